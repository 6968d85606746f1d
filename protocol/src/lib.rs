//! Wire format of the remote trivia service.
//!
//! Only the fields the game consumes are modeled, everything else in a
//! response is ignored on decode.

use serde::{Deserialize, Serialize};

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE: &str = "https://jservice.io/api";

/// Service-assigned category identifier.
pub type CategoryId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub title: String,
}

/// One clue as returned by both the random-batch and by-category endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub question: String,
    pub answer: String,
    pub category: CategoryRef,
}

/// The two read-only endpoints the game uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// `count` randomly selected clues.
    RandomBatch { count: u8 },
    /// Every clue tagged with the category.
    ByCategory { id: CategoryId },
}

impl Endpoint {
    pub fn path(self) -> String {
        use Endpoint::*;
        match self {
            RandomBatch { count } => format!("random/?count={count}"),
            ByCategory { id } => format!("clues/?category={id}"),
        }
    }

    pub fn url(self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path())
    }
}

/// Error produced when a response body is not a list of clue records.
pub type DecodeError = serde_json::Error;

/// Decodes a JSON array of clue records.
pub fn decode_clues(body: &str) -> Result<Vec<ClueRecord>, DecodeError> {
    serde_json::from_str(body)
}
