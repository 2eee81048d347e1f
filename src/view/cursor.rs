use rocket::serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: usize = 30;

/// Page position in a match list. `skip` always stays a multiple of
/// `limit` and never goes below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Cursor {
    skip: usize,
    limit: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl Cursor {
    pub fn new(limit: usize) -> Self {
        Self {
            skip: 0,
            limit: limit.max(1),
        }
    }

    /// Builds a cursor from an untrusted offset, rounding down to a page
    /// boundary and clamping negatives to zero.
    pub fn at(skip: i64, limit: usize) -> Self {
        let mut cursor = Self::new(limit);
        let skip = skip.max(0) as usize;
        cursor.skip = skip - skip % cursor.limit;
        cursor
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Zero-based page index.
    pub fn page(&self) -> usize {
        self.skip / self.limit
    }

    pub fn next(&mut self) {
        self.skip += self.limit;
    }

    /// Steps back one page. Returns `false` and stays put on the first page.
    pub fn previous(&mut self) -> bool {
        if self.skip == 0 {
            return false;
        }
        self.skip -= self.limit;
        true
    }

    pub fn reset(&mut self) {
        self.skip = 0;
    }
}
