//! View models handed to the renderer. Nothing here fetches.

mod leaderboard;
mod news_card;
mod playercard;
mod profile_header;

pub use leaderboard::*;
pub use news_card::*;
pub use playercard::*;
pub use profile_header::*;
