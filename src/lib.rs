use rocket::{Build, Rocket};

pub mod api;
pub mod components;
pub mod config;
pub mod format;
pub mod models;
pub mod pages;
pub mod replay;
pub mod view;

#[cfg(test)]
mod tests;

use api::Api;
use config::Config;

/// Assembles the server around an already-configured API client.
pub fn build(config: Config, api: Api) -> Rocket<Build> {
    rocket::build()
        .mount("/", pages::routes())
        .manage::<Config>(config)
        .manage::<Api>(api)
}
