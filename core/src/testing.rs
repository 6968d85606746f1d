//! Scripted clue source and fixtures shared by the unit tests.

use alloc::collections::{BTreeMap, VecDeque};
use alloc::format;
use alloc::vec::Vec;
use core::future::Future;
use futures_util::FutureExt;
use jeopardy_protocol::{CategoryRef, ClueRecord};
use thiserror::Error;

use crate::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScriptError {
    #[error("No random batch left in the script")]
    OutOfBatches,
    #[error("Category {0} is not in the script")]
    UnknownCategory(CategoryId),
}

/// Serves canned responses: random batches in order, category clues by id.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    batches: VecDeque<Vec<ClueRecord>>,
    categories: BTreeMap<CategoryId, Vec<ClueRecord>>,
    oversized_batches: bool,
    pub random_calls: usize,
    pub category_calls: Vec<CategoryId>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a random batch whose clues belong to `ids`.
    pub fn with_batch(mut self, ids: &[CategoryId]) -> Self {
        self.batches.push_back(ids.iter().map(|&id| record(id, 0)).collect());
        self
    }

    /// Serves random batches whole, even when they hold more clues than requested.
    pub fn with_oversized_batches(mut self) -> Self {
        self.oversized_batches = true;
        self
    }

    /// Registers `clue_count` clues for category `id`.
    pub fn with_category(mut self, id: CategoryId, clue_count: usize) -> Self {
        self.categories.insert(id, (0..clue_count).map(|n| record(id, n)).collect());
        self
    }

    pub fn with_categories(self, ids: &[CategoryId], clue_count: usize) -> Self {
        ids.iter().fold(self, |source, &id| source.with_category(id, clue_count))
    }
}

impl ClueSource for ScriptedSource {
    type Error = ScriptError;

    async fn random_clues(
        &mut self,
        count: u8,
    ) -> core::result::Result<Vec<ClueRecord>, ScriptError> {
        self.random_calls += 1;
        let mut batch = self.batches.pop_front().ok_or(ScriptError::OutOfBatches)?;
        if !self.oversized_batches {
            batch.truncate(usize::from(count));
        }
        Ok(batch)
    }

    async fn category_clues(
        &mut self,
        id: CategoryId,
    ) -> core::result::Result<Vec<ClueRecord>, ScriptError> {
        self.category_calls.push(id);
        self.categories
            .get(&id)
            .cloned()
            .ok_or(ScriptError::UnknownCategory(id))
    }
}

pub(crate) fn record(id: CategoryId, n: usize) -> ClueRecord {
    ClueRecord {
        question: format!("category {id} question {n}"),
        answer: format!("category {id} answer {n}"),
        category: CategoryRef {
            id,
            title: format!("category {id}"),
        },
    }
}

pub(crate) fn category(id: CategoryId, clue_count: usize) -> Category {
    let clues = (0..clue_count)
        .map(|n| Clue::from_record(&record(id, n)))
        .collect();
    Category::new(id, format!("category {id}"), clues)
}

pub(crate) fn standard_board(ids: &[CategoryId]) -> Board {
    let config = BoardConfig::STANDARD;
    let categories = ids
        .iter()
        .map(|&id| category(id, usize::from(config.clues_per_category)))
        .collect();
    Board::new(config, categories).unwrap()
}

/// Drives a future that never suspends, which holds for everything `ScriptedSource` returns.
pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    future
        .now_or_never()
        .expect("scripted source never suspends")
}
