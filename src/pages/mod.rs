use rocket::serde::json::Json;
use rocket::{get, routes, Route, State};

use crate::config::Config;

mod guard;
pub mod news;
pub mod profile;
pub mod replay;

pub use guard::SPEED_COOKIE;

#[get("/")]
pub fn index(config: &State<Config>) -> String {
    format!("{}: {}", config.name, config.slogan)
}

/// Public deployment settings for the client bundle.
#[get("/config")]
pub fn config(config: &State<Config>) -> Json<Config> {
    Json(config.inner().clone())
}

pub fn routes() -> Vec<Route> {
    routes![
        index,
        config,
        profile::profile,
        profile::matches,
        news::news,
        replay::replay,
        replay::replay_log,
    ]
}
