use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::{get, State};
use tracing::warn;

use crate::api::{Api, NEWS_LIMIT};
use crate::components::{Meta, NewsCard};
use crate::config::Config;

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct NewsPage {
    pub meta: Meta,
    pub cards: Vec<NewsCard>,
    pub ads: bool,
}

#[get("/news?<latest_seen>")]
pub async fn news(
    latest_seen: Option<u64>,
    api: &State<Api>,
    config: &State<Config>,
) -> Json<NewsPage> {
    let items = api.news(NEWS_LIMIT).await.unwrap_or_else(|error| {
        warn!(%error, "failed to fetch news");
        Vec::new()
    });
    let latest_seen = latest_seen.unwrap_or(0);

    Json(NewsPage {
        meta: Meta::titled("Latest News", config),
        cards: items
            .into_iter()
            .map(|item| NewsCard::new(item, latest_seen))
            .collect(),
        ads: config.ads,
    })
}
