use rocket::serde::{Deserialize, Deserializer, Serialize};
use rocket::serde::json::Value;

mod matches;
mod news;
mod player;

pub use matches::*;
pub use news::*;
pub use player::*;

/// Ids arrive as strings or plain numbers depending on the endpoint.
pub(crate) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    use rocket::serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("invalid id: {}", other))),
    }
}

/// Role flags come through as booleans or as 0/1 numbers.
pub(crate) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(truthy(&Value::deserialize(deserializer)?))
}

pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(false, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether speeds are shown as words or characters per minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum SpeedUnit {
    Wpm,
    Cpm,
}

impl Default for SpeedUnit {
    fn default() -> Self {
        Self::Wpm
    }
}
