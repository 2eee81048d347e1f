use rocket::serde::json::Value;
use rocket::serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct TextData {
    #[serde(default)]
    pub content: String,
}

/// One player's result in a finished match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(deserialize_with = "super::id")]
    pub match_id: String,
    #[serde(deserialize_with = "super::id")]
    pub player_id: String,
    /// Finishing rank, `None` or `Some(0)` when the player quit.
    #[serde(default)]
    pub placement: Option<u32>,
    #[serde(default)]
    pub exp: i64,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub wpm: f64,
    /// Unix seconds.
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub keystroke_log: Option<Value>,
    #[serde(default)]
    pub text: Vec<TextData>,
}

impl MatchRecord {
    pub fn finished_placement(&self) -> Option<u32> {
        self.placement.filter(|&placement| placement != 0)
    }

    pub fn has_keystroke_log(&self) -> bool {
        self.keystroke_log.as_ref().map_or(false, super::truthy)
    }

    pub fn quote_preview(&self) -> &str {
        self.text.first().map_or("", |text| text.content.as_str())
    }
}

/// Response of `player/matches`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct MatchPageData {
    #[serde(default)]
    pub data: Vec<MatchRecord>,
    #[serde(default)]
    pub is_next_page: bool,
}
