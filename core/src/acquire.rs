use alloc::vec::Vec;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Upper bound on how often acquisition draws again after a [`Shortfall`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}

/// Draws `config.categories` distinct category ids from random batches.
///
/// A batch that repeats a category is thrown away and drawn again, up to
/// `policy.max_attempts` batches in total.
pub async fn acquire_category_ids<S: ClueSource>(
    source: &mut S,
    config: BoardConfig,
    policy: RetryPolicy,
) -> AcquireResult<Vec<CategoryId>, S::Error> {
    let mut attempt = 1;

    loop {
        match draw_category_ids(source, config).await {
            Ok(ids) => return Ok(ids),
            Err(AcquireError::Shortfall(shortfall)) if attempt < policy.max_attempts => {
                log::warn!("category draw {}/{}: {}", attempt, policy.max_attempts, shortfall);
                attempt += 1;
            }
            Err(AcquireError::Shortfall(last)) => return Err(exhausted(attempt, last)),
            Err(err) => return Err(err),
        }
    }
}

async fn draw_category_ids<S: ClueSource>(
    source: &mut S,
    config: BoardConfig,
) -> AcquireResult<Vec<CategoryId>, S::Error> {
    let required = usize::from(config.categories);
    let batch = source
        .random_clues(config.categories)
        .await
        .map_err(AcquireError::Source)?;

    let mut seen = HashSet::with_capacity(batch.len());
    let ids: Vec<CategoryId> = batch
        .iter()
        .map(|record| record.category.id)
        .filter(|&id| seen.insert(id))
        .take(required)
        .collect();

    if ids.len() < required {
        return Err(Shortfall::DuplicateCategoryCollision {
            distinct: ids.len(),
            required,
        }
        .into());
    }

    Ok(ids)
}

/// Fetches one category and keeps its first `config.clues_per_category` clues.
///
/// Fails with [`Shortfall::IncompleteCategory`] when the service has fewer clues than
/// that, or none at all. There is no retry here, the caller decides what to do.
pub async fn acquire_category<S: ClueSource>(
    source: &mut S,
    id: CategoryId,
    config: BoardConfig,
) -> AcquireResult<Category, S::Error> {
    let required = usize::from(config.clues_per_category);
    let records = source
        .category_clues(id)
        .await
        .map_err(AcquireError::Source)?;

    let Some(first) = records.first().filter(|_| records.len() >= required) else {
        return Err(Shortfall::IncompleteCategory {
            id,
            found: records.len(),
            required,
        }
        .into());
    };

    let title = first.category.title.clone();
    let clues = records[..required].iter().map(Clue::from_record).collect();
    Ok(Category::new(id, title, clues))
}

/// Acquires a full board.
///
/// Any [`Shortfall`], whether from the id draw or from a single category, throws away
/// everything gathered so far and starts over from the id draw. Source errors end
/// acquisition immediately.
pub async fn acquire_board<S: ClueSource>(
    source: &mut S,
    config: BoardConfig,
    policy: RetryPolicy,
) -> AcquireResult<Board, S::Error> {
    let started = Instant::now();
    let mut attempt = 1;

    loop {
        match draw_board(source, config, policy).await {
            Ok(board) => {
                log::info!(
                    "board ready after {} attempt(s) in {:?}",
                    attempt,
                    started.elapsed()
                );
                return Ok(board);
            }
            Err(AcquireError::Shortfall(shortfall)) if attempt < policy.max_attempts => {
                log::warn!(
                    "board attempt {}/{}: {}, restarting from category selection",
                    attempt,
                    policy.max_attempts,
                    shortfall
                );
                attempt += 1;
            }
            Err(AcquireError::Shortfall(last)) => return Err(exhausted(attempt, last)),
            Err(err) => return Err(err),
        }
    }
}

async fn draw_board<S: ClueSource>(
    source: &mut S,
    config: BoardConfig,
    policy: RetryPolicy,
) -> AcquireResult<Board, S::Error> {
    let ids = acquire_category_ids(source, config, policy).await?;

    let mut categories = Vec::with_capacity(ids.len());
    for id in ids {
        categories.push(acquire_category(source, id, config).await?);
    }

    Board::new(config, categories).map_err(AcquireError::InvalidBoard)
}

fn exhausted<E>(attempts: u32, last: Shortfall) -> AcquireError<E> {
    log::error!("giving up after {} attempt(s): {}", attempts, last);
    AcquireError::RetriesExhausted { attempts, last }
}
