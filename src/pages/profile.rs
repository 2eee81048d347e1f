use chrono::Utc;
use rocket::serde::json::{Json, Value};
use rocket::serde::Serialize;
use rocket::{get, State};
use tracing::{info, warn};

use crate::api::{Api, ApiError, ApiResult};
use crate::components::{match_rows, Meta, MatchRow, ProfileHeader};
use crate::config::Config;
use crate::models::{PlayerProfile, SpeedUnit};
use crate::view::{Cursor, MatchListState, Notification, ProfileTab, TabButton, TabState, DEFAULT_LIMIT};

pub const MAX_LIMIT: usize = 100;

const NO_MATCHES: &str = "This player has not played any matches.";

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ProfilePage {
    pub meta: Meta,
    pub header: ProfileHeader,
    pub player: PlayerProfile,
    pub tab: ProfileTab,
    pub tabs: Vec<TabButton>,
    pub statistics: Value,
    pub chart: Value,
    pub ranked: Value,
    pub achievements: Vec<Value>,
    pub tournaments: Vec<Value>,
    pub ads: bool,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MatchPage {
    pub cursor: Cursor,
    pub rows: Vec<MatchRow>,
    pub is_next_page: bool,
    pub is_previous_page: bool,
    pub loaded: bool,
    pub empty_message: Option<&'static str>,
    pub notifications: Vec<Notification>,
}

impl MatchPage {
    pub fn new(state: MatchListState, unit: SpeedUnit) -> Self {
        let rows = match_rows(&state.rows, unit, Utc::now());
        Self {
            empty_message: if rows.is_empty() { Some(NO_MATCHES) } else { None },
            is_previous_page: state.cursor.skip() > 0,
            cursor: state.cursor,
            rows,
            is_next_page: state.is_next_page,
            loaded: state.loaded,
            notifications: state.notifications,
        }
    }
}

fn or_default<T: Default>(what: &str, result: ApiResult<T>) -> T {
    result.unwrap_or_else(|error| {
        warn!(%error, "failed to fetch {}", what);
        T::default()
    })
}

/// Looks a player up by name. Anything but a profile is a 404 for the page.
async fn find_player(api: &Api, name: &str) -> Option<PlayerProfile> {
    match api.player_info(name).await {
        Ok(player) => Some(player),
        Err(ApiError::NotFound) | Err(ApiError::Application(_)) => {
            info!(player = name, "player not found");
            None
        }
        Err(error) => {
            warn!(%error, player = name, "player lookup failed");
            None
        }
    }
}

#[get("/profile/<name>?<tab>")]
pub async fn profile(
    name: &str,
    tab: Option<&str>,
    api: &State<Api>,
    config: &State<Config>,
) -> Option<Json<ProfilePage>> {
    let player = find_player(api, name).await?;
    let id = player.player_id.as_str();

    let (statistics, chart, achievements, tournaments, ranked) = tokio::join!(
        api.statistics(id),
        api.chart(id),
        api.achievements(id),
        api.tournaments(id),
        api.ranked(id),
    );

    let tab = tab.and_then(|tab| tab.parse().ok()).unwrap_or_default();
    let tabs = TabState::new(tab);

    Some(Json(ProfilePage {
        meta: Meta::profile(&player, config),
        header: ProfileHeader::new(&player, config),
        tab: tabs.active(),
        tabs: tabs.buttons(),
        statistics: or_default("statistics", statistics),
        chart: or_default("chart", chart),
        ranked: or_default("ranked", ranked),
        achievements: or_default("achievements", achievements),
        tournaments: or_default("tournaments", tournaments),
        player,
        ads: config.ads,
    }))
}

#[get("/profile/<name>/matches?<skip>&<limit>")]
pub async fn matches(
    name: &str,
    skip: Option<i64>,
    limit: Option<usize>,
    unit: SpeedUnit,
    api: &State<Api>,
) -> Option<Json<MatchPage>> {
    let player = find_player(api, name).await?;

    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let mut state = MatchListState::new(Cursor::at(skip.unwrap_or(0), limit));
    state.apply(api.matches(&player.player_id, state.cursor).await);

    Some(Json(MatchPage::new(state, unit)))
}
