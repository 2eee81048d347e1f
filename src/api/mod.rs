use std::sync::Arc;

use rocket::serde::json::{serde_json, Value};
use rocket::serde::DeserializeOwned;
use reqwest::Url;

use crate::models::{MatchPageData, NewsItem, PlayerProfile};
use crate::view::Cursor;

mod error;
mod http;

pub use error::*;
pub use http::HttpUpstream;

/// Number of news items the news page asks for.
pub const NEWS_LIMIT: usize = 50;

/// Source of raw response bodies.
#[rocket::async_trait]
pub trait Upstream: Send + Sync {
    async fn get(&self, url: &Url) -> ApiResult<String>;
}

/// Typed access to the Keymash REST API.
#[derive(Clone)]
pub struct Api {
    base: String,
    upstream: Arc<dyn Upstream>,
}

impl Api {
    pub fn new(base: impl Into<String>, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_owned(),
            upstream,
        }
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Url> {
        Url::parse_with_params(&format!("{}/{}", self.base, path), query)
            .map_err(|error| ApiError::Transport(error.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.url(path, query)?;
        let body = self.upstream.get(&url).await?;
        parse_body(&body)
    }

    pub async fn player_info(&self, name: &str) -> ApiResult<PlayerProfile> {
        self.get_json("player/info", &[("name", name.to_owned())])
            .await
    }

    pub async fn statistics(&self, player_id: &str) -> ApiResult<Value> {
        self.get_json("player/statistics", &[("playerId", player_id.to_owned())])
            .await
    }

    pub async fn chart(&self, player_id: &str) -> ApiResult<Value> {
        self.get_json("player/chart", &[("playerId", player_id.to_owned())])
            .await
    }

    pub async fn achievements(&self, player_id: &str) -> ApiResult<Vec<Value>> {
        self.get_json("player/achievements", &[("playerId", player_id.to_owned())])
            .await
    }

    pub async fn tournaments(&self, player_id: &str) -> ApiResult<Vec<Value>> {
        self.get_json("player/tournaments", &[("playerId", player_id.to_owned())])
            .await
    }

    pub async fn ranked(&self, player_id: &str) -> ApiResult<Value> {
        self.get_json("player/ranked", &[("playerId", player_id.to_owned())])
            .await
    }

    pub async fn matches(&self, player_id: &str, cursor: Cursor) -> ApiResult<MatchPageData> {
        self.get_json(
            "player/matches",
            &[
                ("playerId", player_id.to_owned()),
                ("limit", cursor.limit().to_string()),
                ("startNum", cursor.skip().to_string()),
            ],
        )
        .await
    }

    pub async fn news(&self, limit: usize) -> ApiResult<Vec<NewsItem>> {
        #[derive(rocket::serde::Deserialize)]
        #[serde(crate = "rocket::serde")]
        struct NewsList {
            #[serde(default)]
            data: Vec<NewsItem>,
        }

        let list: NewsList = self
            .get_json("newsletter/list", &[("limit", limit.to_string())])
            .await?;
        Ok(list.data)
    }

    /// Fetches the transport-encoded keystroke log of one match.
    /// The body is plain text unless the API reports an error object.
    pub async fn keystroke_log(&self, player_id: &str, match_id: &str) -> ApiResult<String> {
        let url = self.url(
            "player/keystrokes",
            &[
                ("playerId", player_id.to_owned()),
                ("matchId", match_id.to_owned()),
            ],
        )?;
        let body = self.upstream.get(&url).await?;

        if let Ok(value) = serde_json::from_str::<Value>(&body) {
            if let Some(message) = error_message(&value) {
                return Err(ApiError::Application(message));
            }
        }
        Ok(body)
    }
}

/// Decodes a JSON body, surfacing an `error` field as an application error.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let value: Value =
        serde_json::from_str(body).map_err(|error| ApiError::Malformed(error.to_string()))?;
    if let Some(message) = error_message(&value) {
        return Err(ApiError::Application(message));
    }
    serde_json::from_value(value).map_err(|error| ApiError::Malformed(error.to_string()))
}

fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
