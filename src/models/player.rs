use rocket::serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "PascalCase")]
pub struct Level {
    #[serde(default)]
    pub index: u32,
    /// Experience needed to reach the next level.
    #[serde(default)]
    pub next: u64,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct PlayerProfile {
    #[serde(deserialize_with = "super::id")]
    pub player_id: String,
    pub name: String,
    #[serde(default)]
    pub discriminator: String,
    #[serde(default)]
    pub avatar_src: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub card_border: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "super::flag")]
    pub staff: bool,
    #[serde(default, deserialize_with = "super::flag")]
    pub verified: bool,
    #[serde(default, deserialize_with = "super::flag")]
    pub patreon: bool,
    #[serde(default)]
    pub experience: u64,
    #[serde(default, rename = "Level")]
    pub level: Level,
}
