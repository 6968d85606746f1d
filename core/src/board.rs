use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(id: CategoryId, title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            id,
            title: title.into(),
            clues,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title as shown in the board header.
    pub fn header_title(&self) -> String {
        self.title.to_uppercase()
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// Categories in column order, each holding its clues in row order.
///
/// A `Board` always matches its [`BoardConfig`] exactly and never contains the same
/// category twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    categories: Vec<Category>,
}

impl Board {
    pub fn new(config: BoardConfig, categories: Vec<Category>) -> Result<Self> {
        if categories.len() != usize::from(config.categories) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut seen = HashSet::with_capacity(categories.len());
        for category in &categories {
            if category.clues.len() != usize::from(config.clues_per_category) {
                return Err(GameError::InvalidBoardShape);
            }
            if !seen.insert(category.id) {
                return Err(GameError::DuplicateCategory(category.id));
            }
        }

        Ok(Self { config, categories })
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn validate_coords(&self, coords: CellCoords) -> Result<CellCoords> {
        let (row, col) = coords;
        if row < self.config.clues_per_category && col < self.config.categories {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn clue_at(&self, coords: CellCoords) -> Result<&Clue> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    /// Advances the clue at `coords` one reveal step.
    pub fn activate(&mut self, coords: CellCoords) -> Result<ActivateOutcome> {
        let (row, col) = self.validate_coords(coords)?;
        let outcome = self.categories[usize::from(col)].clues[usize::from(row)].activate();
        log::debug!("activate ({}, {}): {:?}", row, col, outcome);
        Ok(outcome)
    }

    /// Every cell position, row by row.
    pub fn iter_coords(&self) -> impl Iterator<Item = CellCoords> + use<> {
        let BoardConfig {
            categories,
            clues_per_category,
        } = self.config;
        (0..clues_per_category).flat_map(move |row| (0..categories).map(move |col| (row, col)))
    }
}

impl Index<CellCoords> for Board {
    type Output = Clue;

    fn index(&self, (row, col): CellCoords) -> &Self::Output {
        &self.categories[usize::from(col)].clues[usize::from(row)]
    }
}
