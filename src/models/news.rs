use rocket::serde::json::serde_json::Map;
use rocket::serde::json::Value;
use rocket::serde::{Deserialize, Serialize};

/// A newsletter entry. Only the fields the page logic looks at are typed,
/// the rest is handed to the renderer untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct NewsItem {
    pub slug: String,
    #[serde(default)]
    pub increment: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
