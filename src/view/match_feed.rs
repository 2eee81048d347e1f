use rocket::serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::{Api, ApiResult};
use crate::models::{MatchPageData, MatchRecord};

use super::{Cursor, Latest, Notification};

pub const MATCHES_UNAVAILABLE: &str = "Unable to pull recent matches!";

/// Everything the matches tab shows, independent of how it is drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct MatchListState {
    pub cursor: Cursor,
    pub rows: Vec<MatchRecord>,
    pub is_next_page: bool,
    pub loaded: bool,
    pub notifications: Vec<Notification>,
}

impl MatchListState {
    pub fn new(cursor: Cursor) -> Self {
        Self {
            cursor,
            rows: Vec::new(),
            // Assume more until the server says otherwise.
            is_next_page: true,
            loaded: false,
            notifications: Vec::new(),
        }
    }

    /// Folds a fetch result in. Failures keep the rows already shown.
    pub fn apply(&mut self, result: ApiResult<MatchPageData>) {
        match result {
            Ok(page) => {
                self.rows = page.data;
                self.is_next_page = page.is_next_page;
                self.loaded = true;
            }
            Err(error) => {
                warn!(%error, skip = self.cursor.skip(), "failed to fetch matches");
                self.notifications
                    .push(Notification::error(error.user_message(MATCHES_UNAVAILABLE)));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Drives the paginated match list of one player.
pub struct MatchFeed {
    api: Api,
    player_id: String,
    state: MatchListState,
    fetch: Latest<ApiResult<MatchPageData>>,
}

impl MatchFeed {
    /// Creates the feed and starts fetching the first page.
    pub fn new(api: Api, player_id: impl Into<String>, limit: usize) -> Self {
        let mut feed = Self {
            api,
            player_id: player_id.into(),
            state: MatchListState::new(Cursor::new(limit)),
            fetch: Latest::new(),
        };
        feed.refresh();
        feed
    }

    pub fn state(&self) -> &MatchListState {
        &self.state
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.is_pending()
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.state.notifications)
    }

    /// Refetches the current page, superseding any fetch in flight.
    pub fn refresh(&mut self) {
        let api = self.api.clone();
        let player_id = self.player_id.clone();
        let cursor = self.state.cursor;
        self.fetch
            .spawn(async move { api.matches(&player_id, cursor).await });
    }

    /// Switches to another player and starts over from the first page.
    pub fn set_player(&mut self, player_id: impl Into<String>) {
        self.player_id = player_id.into();
        self.state = MatchListState::new(Cursor::new(self.state.cursor.limit()));
        self.refresh();
    }

    /// Returns `false` without fetching when the server reported no next page
    /// or the current page has not arrived yet.
    pub fn next_page(&mut self) -> bool {
        if !self.state.is_next_page || self.fetch.is_pending() {
            return false;
        }
        self.state.cursor.next();
        self.refresh();
        true
    }

    /// Returns `false` without fetching on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.state.cursor.previous() {
            return false;
        }
        self.refresh();
        true
    }

    /// Waits for the in-flight fetch and applies it. Returns whether
    /// anything was applied.
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

impl Drop for MatchFeed {
    fn drop(&mut self) {
        self.fetch.cancel();
    }
}
