use rocket::serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

pub const VERSION_CONTROL: &str = "3.0.0";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum Mode {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown mode: {0}")]
    UnknownMode(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

impl std::str::FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::UnknownMode(other.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct GameServer {
    pub url: String,
    pub port: Option<u16>,
}

/// Deployment configuration, built once at startup and handed to the
/// routes through rocket's managed state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct Config {
    pub mode: Mode,
    pub version_control: &'static str,
    pub name: &'static str,
    pub slogan: &'static str,
    pub default_icon: &'static str,
    pub default_image: &'static str,
    pub storage_url: &'static str,
    pub web_url: String,
    pub api_url: String,
    pub auth_url: String,
    pub game_url: String,
    pub oauth_url: String,
    pub cookie_url: String,
    pub game_server: GameServer,
    pub ads: bool,
}

impl Config {
    pub fn for_mode(mode: Mode) -> Self {
        let (web, api) = match mode {
            Mode::Development => ("http://localhost:3000", "http://localhost:8080"),
            Mode::Staging => ("https://staging.keymash.io", "https://apistaging.keymash.io"),
            Mode::Production => ("https://keymash.io", "https://api.keymash.io"),
        };
        let game_server = match mode {
            Mode::Development => GameServer {
                url: "http://localhost".to_owned(),
                port: Some(2096),
            },
            Mode::Staging => GameServer {
                url: "https://wsstaging.keymash.io".to_owned(),
                port: None,
            },
            Mode::Production => GameServer {
                url: "https://us-east.keymash.io".to_owned(),
                port: None,
            },
        };
        let cookie_url = match mode {
            Mode::Development => "localhost",
            _ => ".keymash.io",
        };

        Self {
            mode,
            version_control: VERSION_CONTROL,
            name: "Keymash",
            slogan: "Take your typing to the next level",
            default_icon: "/extras/avatar.jpg",
            default_image: "/extras/banner.jpg",
            storage_url: "https://nyc3.digitaloceanspaces.com/keymash",
            web_url: web.to_owned(),
            api_url: format!("{api}/api/v2"),
            auth_url: format!("{api}/auth/v2"),
            game_url: format!("{api}/data"),
            oauth_url: format!("{api}/auth/v2"),
            cookie_url: cookie_url.to_owned(),
            game_server,
            ads: true,
        }
    }

    /// Reads `KEYMASH_MODE`, `KEYMASH_ADS` and `KEYMASH_API_URL`.
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match lookup("KEYMASH_MODE") {
            Some(mode) => mode.parse()?,
            None => {
                info!("KEYMASH_MODE not set, using production");
                Mode::Production
            }
        };
        let mut config = Self::for_mode(mode);

        if let Some(ads) = lookup("KEYMASH_ADS") {
            config.ads = parse_flag("KEYMASH_ADS", &ads)?;
        }
        if let Some(api_url) = lookup("KEYMASH_API_URL") {
            let api_url = api_url.trim_end_matches('/');
            if api_url.is_empty() {
                warn!("KEYMASH_API_URL is empty, keeping {}", config.api_url);
            } else {
                config.api_url = api_url.to_owned();
            }
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}
