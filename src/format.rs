use chrono::{DateTime, TimeZone, Utc};

/// `1` -> `1st`, `12` -> `12th`, `22` -> `22nd`.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Groups digits by thousands: `1234567` -> `1,234,567`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Human distance between a unix timestamp and `now`, e.g. `3 hours ago`.
pub fn time_ago(created: i64, now: DateTime<Utc>) -> String {
    let then = match Utc.timestamp_opt(created, 0).single() {
        Some(then) => then,
        None => return String::new(),
    };
    let seconds = (now - then).num_seconds();
    let distance = distance(seconds.unsigned_abs());
    if seconds < 0 {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

fn distance(seconds: u64) -> String {
    let round = |value: u64, unit: u64| (value + unit / 2) / unit;
    let minutes = round(seconds, 60);
    let hours = round(seconds, 3600);
    let days = round(seconds, 86400);

    match seconds {
        0..=44 => "a few seconds".to_owned(),
        45..=89 => "a minute".to_owned(),
        _ if minutes < 45 => format!("{} minutes", minutes),
        _ if minutes < 90 => "an hour".to_owned(),
        _ if hours < 22 => format!("{} hours", hours),
        _ if hours < 36 => "a day".to_owned(),
        _ if days < 26 => format!("{} days", days),
        _ if days < 45 => "a month".to_owned(),
        _ if days < 320 => format!("{} months", ((days as f64) / 30.4).round() as u64),
        _ if days < 548 => "a year".to_owned(),
        _ => format!("{} years", ((days as f64) / 365.0).round() as u64),
    }
}
