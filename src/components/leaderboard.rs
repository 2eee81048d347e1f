use chrono::{DateTime, Utc};
use rocket::serde::Serialize;

use crate::format::{ordinal, time_ago};
use crate::models::{MatchRecord, SpeedUnit};
use crate::replay::ReplayKey;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum Trophy {
    Gold,
    Silver,
    Bronze,
}

impl Trophy {
    pub fn for_placement(placement: u32) -> Option<Self> {
        match placement {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }
}

/// One line of a player's match history.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MatchRow {
    pub match_id: String,
    pub placement: String,
    pub trophy: Option<Trophy>,
    pub quote: String,
    pub exp: String,
    pub accuracy: String,
    pub speed: String,
    pub time: String,
    pub replay: Option<ReplayKey>,
    pub replay_link: Option<String>,
}

impl MatchRow {
    pub fn new(record: &MatchRecord, unit: SpeedUnit, now: DateTime<Utc>) -> Self {
        let finished = record.finished_placement();

        let (exp, accuracy, speed) = match finished {
            Some(_) => (
                format!("{} EXP", record.exp),
                format!("{}%", record.accuracy),
                speed(record.wpm, unit),
            ),
            None => (
                NOT_AVAILABLE.to_owned(),
                NOT_AVAILABLE.to_owned(),
                NOT_AVAILABLE.to_owned(),
            ),
        };

        let replay = match finished {
            Some(_) if record.has_keystroke_log() => {
                Some(ReplayKey::new(&record.player_id, &record.match_id))
            }
            _ => None,
        };

        Self {
            match_id: record.match_id.clone(),
            placement: finished.map_or_else(|| "QUIT".to_owned(), ordinal),
            trophy: finished.and_then(Trophy::for_placement),
            quote: record.quote_preview().to_owned(),
            exp,
            accuracy,
            speed,
            time: time_ago(record.created, now),
            replay_link: replay.as_ref().map(ReplayKey::link),
            replay,
        }
    }
}

pub fn speed(wpm: f64, unit: SpeedUnit) -> String {
    match unit {
        SpeedUnit::Wpm => format!("{:.2} WPM", hundredths(wpm)),
        SpeedUnit::Cpm => format!("{:.2} CPM", hundredths(wpm * 5.0)),
    }
}

/// Ties round away from zero; `{:.2}` alone would round them to even.
fn hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn match_rows(records: &[MatchRecord], unit: SpeedUnit, now: DateTime<Utc>) -> Vec<MatchRow> {
    records
        .iter()
        .map(|record| MatchRow::new(record, unit, now))
        .collect()
}
