use std::sync::Arc;

use keymash_web::api::{Api, HttpUpstream};
use keymash_web::config::Config;
use rocket::launch;
use tracing::info;

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).try_init().ok();

    let config = Config::from_env().expect("invalid KEYMASH_* environment");
    let upstream = HttpUpstream::new().expect("failed to build the HTTP client");
    info!(mode = ?config.mode, api = %config.api_url, "starting");

    let api = Api::new(config.api_url.clone(), Arc::new(upstream));
    keymash_web::build(config, api)
}
