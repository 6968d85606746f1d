use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a single body cell shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellFace {
    pub coords: CellCoords,
    pub text: String,
    /// Still invites a click, until its question is first shown.
    pub inviting: bool,
}

impl CellFace {
    fn for_clue(coords: CellCoords, clue: &Clue) -> Self {
        let text = clue.shown_text().unwrap_or_else(|| value_label(coords.0));
        Self {
            coords,
            text,
            inviting: clue.state().is_hidden(),
        }
    }

    fn masked(coords: CellCoords) -> Self {
        Self {
            coords,
            text: value_label(coords.0),
            inviting: true,
        }
    }
}

/// Presentation of a board: one header per category, one row per clue index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardFace {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellFace>>,
}

impl BoardFace {
    /// Full render of a freshly loaded board. Every body cell starts masked.
    pub fn render_full(board: &Board) -> Self {
        let headers = board
            .categories()
            .iter()
            .map(Category::header_title)
            .collect();

        let BoardConfig {
            categories,
            clues_per_category,
        } = board.config();
        let rows = (0..clues_per_category)
            .map(|row| {
                (0..categories)
                    .map(|col| CellFace::masked((row, col)))
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn cell(&self, (row, col): CellCoords) -> Option<&CellFace> {
        self.rows.get(usize::from(row))?.get(usize::from(col))
    }

    /// Re-derives one cell from the clue it belongs to, after that clue changed.
    pub fn patch(&mut self, board: &Board, coords: CellCoords) -> Result<()> {
        let clue = board.clue_at(coords)?;
        let (row, col) = coords;
        let cell = self
            .rows
            .get_mut(usize::from(row))
            .and_then(|cells| cells.get_mut(usize::from(col)))
            .ok_or(GameError::InvalidCoords)?;
        *cell = CellFace::for_clue(coords, clue);
        Ok(())
    }
}

/// Dollar value printed on a masked cell: `$200` for the first row, `$400` for the next...
pub fn value_label(row: Row) -> String {
    format!("${}", 200 * (u32::from(row) + 1))
}
