pub use jeopardy_protocol::CategoryId;

/// Clue index inside a category.
pub type Row = u8;

/// Category index on the board.
pub type Col = u8;

/// Count type used for total-cell counts.
pub type CellCount = u16;

/// Cell coordinates `(row, col)`: `row` picks the clue, `col` the category.
pub type CellCoords = (Row, Col);

pub const fn mult(a: u8, b: u8) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}
