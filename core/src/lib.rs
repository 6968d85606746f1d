#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use acquire::*;
pub use board::*;
pub use clue::*;
pub use error::*;
pub use lifecycle::*;
pub use normalize::*;
pub use render::*;
pub use source::*;
pub use types::*;

mod acquire;
mod board;
mod clue;
mod error;
mod lifecycle;
mod normalize;
mod render;
mod source;
mod types;

#[cfg(test)]
mod testing;

/// Shape of a board: how many categories and how many clues each.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub categories: Col,
    pub clues_per_category: Row,
}

impl BoardConfig {
    /// Six categories of five clues, the only shape the game plays.
    pub const STANDARD: Self = Self::new_unchecked(6, 5);

    pub const fn new_unchecked(categories: Col, clues_per_category: Row) -> Self {
        Self {
            categories,
            clues_per_category,
        }
    }

    pub fn new(categories: Col, clues_per_category: Row) -> Self {
        Self::new_unchecked(categories.max(1), clues_per_category.max(1))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.categories, self.clues_per_category)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActivateOutcome {
    NoChange,
    QuestionShown,
    AnswerShown,
}

impl ActivateOutcome {
    pub const fn has_update(self) -> bool {
        use ActivateOutcome::*;
        match self {
            NoChange => false,
            QuestionShown => true,
            AnswerShown => true,
        }
    }
}
