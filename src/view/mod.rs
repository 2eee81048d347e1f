mod cursor;
mod latest;
pub mod match_feed;
mod notification;
mod tabs;

pub use cursor::*;
pub use latest::*;
pub use match_feed::{MatchFeed, MatchListState};
pub use notification::*;
pub use tabs::*;
