use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::{get, State};

use crate::api::Api;
use crate::replay::{fetch, KeystrokeLog, ReplayKey, ReplayState};

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ReplayPage {
    pub key: ReplayKey,
    #[serde(flatten)]
    pub log: KeystrokeLog,
    pub notifications: Vec<crate::view::Notification>,
}

#[get("/replay/<player_id>/<match_id>")]
pub async fn replay(player_id: &str, match_id: &str, api: &State<Api>) -> Json<ReplayPage> {
    let key = ReplayKey::new(player_id, match_id);

    let mut state = ReplayState {
        key: Some(key.clone()),
        ..ReplayState::default()
    };
    state.apply(api.keystroke_log(player_id, match_id).await);

    Json(ReplayPage {
        key,
        log: state.log,
        notifications: state.notifications,
    })
}

/// Keystroke log alone, for players that fetch it lazily.
#[get("/replay/<player_id>/<match_id>/log")]
pub async fn replay_log(
    player_id: &str,
    match_id: &str,
    api: &State<Api>,
) -> Option<Json<KeystrokeLog>> {
    fetch(api, &ReplayKey::new(player_id, match_id))
        .await
        .ok()
        .map(Json)
}
