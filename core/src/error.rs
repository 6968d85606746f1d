use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match the board config")]
    InvalidBoardShape,
    #[error("Category {0} appears more than once on the board")]
    DuplicateCategory(CategoryId),
    #[error("Board is not ready, no clues can be activated")]
    NotReady,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// The service handed back less than a full board needs. Recoverable by drawing again.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shortfall {
    #[error("Random batch yielded {distinct} distinct categories, {required} required")]
    DuplicateCategoryCollision { distinct: usize, required: usize },
    #[error("Category {id} has {found} clues, {required} required")]
    IncompleteCategory {
        id: CategoryId,
        found: usize,
        required: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcquireError<E> {
    #[error(transparent)]
    Shortfall(#[from] Shortfall),
    #[error("Clue source failed: {0}")]
    Source(E),
    #[error("Gave up after {attempts} attempts, last failure: {last}")]
    RetriesExhausted { attempts: u32, last: Shortfall },
    #[error("Acquired data does not form a board: {0}")]
    InvalidBoard(GameError),
}

impl<E> AcquireError<E> {
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Shortfall(_))
    }
}

pub type AcquireResult<T, E> = core::result::Result<T, AcquireError<E>>;
