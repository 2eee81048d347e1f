use rocket::serde::{Deserialize, Serialize};

/// Separates the quote from the keystroke timeline in a transport string.
pub const DELIMITER: &str = "<&>";

/// A decoded keystroke log. The raw log is opaque here, the player makes
/// sense of it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct KeystrokeLog {
    pub quote: String,
    pub raw_log: String,
}

impl KeystrokeLog {
    pub fn is_empty(&self) -> bool {
        self.quote.is_empty() && self.raw_log.is_empty()
    }
}

/// Splits on the first delimiter. Without one the whole string is the quote
/// and the log is empty.
pub fn decode(transport: &str) -> KeystrokeLog {
    let (quote, raw_log) = transport.split_once(DELIMITER).unwrap_or((transport, ""));
    KeystrokeLog {
        quote: quote.to_owned(),
        raw_log: raw_log.to_owned(),
    }
}

pub fn encode(log: &KeystrokeLog) -> String {
    format!("{}{}{}", log.quote, DELIMITER, log.raw_log)
}
