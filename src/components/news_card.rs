use rocket::serde::Serialize;

use crate::models::NewsItem;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct NewsCard {
    #[serde(flatten)]
    pub item: NewsItem,
    pub is_big: bool,
    pub show_unread: bool,
}

impl NewsCard {
    /// `latest_seen` is the highest `increment` the reader has opened.
    pub fn new(item: NewsItem, latest_seen: u64) -> Self {
        Self {
            show_unread: item.increment > latest_seen,
            is_big: true,
            item,
        }
    }
}
