use rocket::serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::{Api, ApiResult};
use crate::view::{Latest, Notification};

pub mod codec;

pub use codec::{decode, encode, KeystrokeLog, DELIMITER};

/// Which match's replay is being looked at.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ReplayKey {
    pub player_id: String,
    pub match_id: String,
}

impl ReplayKey {
    pub fn new(player_id: impl Into<String>, match_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            match_id: match_id.into(),
        }
    }

    /// Standalone replay page for this match.
    pub fn link(&self) -> String {
        format!("/replay/{}/{}", self.player_id, self.match_id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ReplayState {
    pub key: Option<ReplayKey>,
    pub log: KeystrokeLog,
    pub notifications: Vec<Notification>,
}

impl ReplayState {
    pub fn apply(&mut self, result: ApiResult<String>) {
        match result {
            Ok(transport) => self.log = decode(&transport),
            Err(error) => {
                warn!(%error, key = ?self.key, "failed to fetch keystroke log");
                self.log = KeystrokeLog::default();
                self.notifications.push(Notification::error(error.to_string()));
            }
        }
    }
}

pub async fn fetch(api: &Api, key: &ReplayKey) -> ApiResult<KeystrokeLog> {
    let transport = api.keystroke_log(&key.player_id, &key.match_id).await?;
    Ok(decode(&transport))
}

/// Replay modal state. Opening a different match drops whatever the previous
/// request would have returned.
pub struct ReplayViewer {
    api: Api,
    state: ReplayState,
    fetch: Latest<ApiResult<String>>,
}

impl ReplayViewer {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            state: ReplayState::default(),
            fetch: Latest::new(),
        }
    }

    pub fn state(&self) -> &ReplayState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_pending()
    }

    pub fn open(&mut self, key: ReplayKey) {
        self.state.log = KeystrokeLog::default();
        self.state.key = Some(key.clone());

        let api = self.api.clone();
        self.fetch.spawn(async move {
            api.keystroke_log(&key.player_id, &key.match_id).await
        });
    }

    pub fn close(&mut self) {
        self.fetch.cancel();
        self.state = ReplayState::default();
    }

    pub async fn settle(&mut self) -> bool {
        match self.fetch.settle().await {
            Some(result) => {
                self.state.apply(result);
                true
            }
            None => false,
        }
    }
}

impl Drop for ReplayViewer {
    fn drop(&mut self) {
        self.fetch.cancel();
    }
}
