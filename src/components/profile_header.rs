use rocket::serde::Serialize;

use crate::config::Config;
use crate::format::thousands;
use crate::models::PlayerProfile;

const DESCRIPTION_PREVIEW: usize = 200;

/// Page `<head>` data.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct Meta {
    pub title: String,
    pub description: String,
    pub image: String,
    pub reverse_title: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ProfileHeader {
    pub name: String,
    pub discriminator: String,
    pub display_name: String,
    pub avatar: String,
    pub border_color: Option<String>,
    pub banner: Option<String>,
    pub description: String,
    pub staff: bool,
    pub verified: bool,
    pub patreon: bool,
    pub level: u32,
    pub level_percent: f64,
    pub experience: String,
}

impl ProfileHeader {
    pub fn new(profile: &PlayerProfile, config: &Config) -> Self {
        Self {
            name: profile.name.clone(),
            discriminator: profile.discriminator.clone(),
            display_name: format!("{}#{}", profile.name, profile.discriminator),
            avatar: profile
                .avatar_src
                .clone()
                .unwrap_or_else(|| config.default_icon.to_owned()),
            border_color: profile.card_border.clone(),
            banner: profile
                .banner
                .as_ref()
                .map(|banner| format!("/banners/{}.jpg", banner)),
            description: profile.description.clone(),
            staff: profile.staff,
            verified: profile.verified,
            patreon: profile.patreon,
            level: profile.level.index,
            level_percent: profile.level.percentage.max(0.0).min(100.0),
            experience: format!(
                "{} / {}",
                thousands(profile.experience),
                thousands(profile.level.next)
            ),
        }
    }
}

impl Meta {
    pub fn profile(profile: &PlayerProfile, config: &Config) -> Self {
        let preview: String = profile.description.chars().take(DESCRIPTION_PREVIEW).collect();
        Self {
            title: format!("{}#{}'s Profile", profile.name, profile.discriminator),
            description: format!("{}...", preview),
            image: profile
                .avatar_src
                .clone()
                .unwrap_or_else(|| config.default_image.to_owned()),
            reverse_title: true,
        }
    }

    pub fn titled(title: impl Into<String>, config: &Config) -> Self {
        Self {
            title: title.into(),
            description: config.slogan.to_owned(),
            image: config.default_image.to_owned(),
            reverse_title: false,
        }
    }
}
