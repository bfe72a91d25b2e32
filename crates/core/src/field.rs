//! Field module - the fumen playfield grid
//!
//! The field is 10 columns x 23 visible rows plus one hidden garbage row.
//! Uses a flat array for cache locality and zero-allocation copies between pages.
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..22
//! (bottom to top). The garbage row sits at y = -1.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, GARBAGE_ROWS};

const WIDTH: usize = BOARD_WIDTH as usize;

/// Rows stored, garbage included
const STORED_ROWS: usize = (BOARD_HEIGHT + GARBAGE_ROWS) as usize;

/// Total number of stored cells
pub const FIELD_SIZE: usize = WIDTH * STORED_ROWS;

/// A playfield snapshot - 10 columns x (23 + 1 garbage) rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    /// Row-major, bottom-up: the garbage row first, then y = 0, 1, ...
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        let row = y as i16 + GARBAGE_ROWS as i16;
        if x < 0 || x >= BOARD_WIDTH as i8 || row < 0 || row >= STORED_ROWS as i16 {
            return None;
        }
        Some(row as usize * WIDTH + x as usize)
    }

    /// Get width of the field
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get visible height of the field
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds; y = -1 addresses the garbage row
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Cell at (x, y), treating anything outside the field as empty
    pub fn at(&self, x: i8, y: i8) -> Cell {
        self.get(x, y).flatten()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Highest visible row holding a block, if any
    pub fn highest_occupied_row(&self) -> Option<u8> {
        (0..BOARD_HEIGHT as i8)
            .rev()
            .find(|&y| (0..BOARD_WIDTH as i8).any(|x| self.is_occupied(x, y)))
            .map(|y| y as u8)
    }

    /// Check if a visible row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        if y < 0 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        (0..BOARD_WIDTH as i8).all(|x| self.is_occupied(x, y))
    }

    /// Stamp blocks of `kind` at the given cells. Cells outside the field are skipped.
    pub fn place(&mut self, cells: &[(i8, i8)], kind: PieceKind) {
        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// Clear all full visible rows, shifting rows above down
    /// Returns the row indices that were cleared (sorted bottom to top)
    /// The garbage row is never cleared or moved.
    pub fn clear_full_rows(&mut self) -> ArrayVec<u8, { BOARD_HEIGHT as usize }> {
        let mut cleared_rows = ArrayVec::new();
        let base = GARBAGE_ROWS as usize;
        let mut write_row = 0usize;

        for read_row in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(read_row as i8) {
                cleared_rows.push(read_row as u8);
                continue;
            }
            if write_row != read_row {
                let src = (base + read_row) * WIDTH;
                let dst = (base + write_row) * WIDTH;
                self.cells.copy_within(src..src + WIDTH, dst);
            }
            write_row += 1;
        }

        for row in write_row..BOARD_HEIGHT as usize {
            let start = (base + row) * WIDTH;
            self.cells[start..start + WIDTH].fill(None);
        }

        cleared_rows
    }

    /// Push the garbage row up into y = 0, lifting the whole field by one.
    /// The top row is discarded and the garbage row becomes empty.
    pub fn rise_garbage(&mut self) {
        let len = FIELD_SIZE - WIDTH;
        self.cells.copy_within(0..len, WIDTH);
        self.cells[..WIDTH].fill(None);
    }

    /// Mirror every visible row horizontally (the garbage row stays put)
    pub fn mirror(&mut self) {
        let base = GARBAGE_ROWS as usize * WIDTH;
        for row in self.cells[base..].chunks_exact_mut(WIDTH) {
            row.reverse();
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a field from visible rows given top to bottom, e.g. `["__TTT_____"]`.
    ///
    /// `_` is empty; any other character is parsed with [`PieceKind::from_str`].
    /// Returns None on unknown characters, wrong widths or too many rows.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() > BOARD_HEIGHT as usize {
            return None;
        }
        let mut field = Self::new();
        for (i, row) in rows.iter().enumerate() {
            if row.chars().count() != WIDTH {
                return None;
            }
            let y = (rows.len() - 1 - i) as i8;
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '_' => None,
                    other => Some(PieceKind::from_str(other.encode_utf8(&mut [0; 4]))?),
                };
                field.set(x as i8, y, cell);
            }
        }
        Some(field)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_index_calculation() {
        assert_eq!(Field::index(0, -1), Some(0));
        assert_eq!(Field::index(9, -1), Some(9));
        assert_eq!(Field::index(0, 0), Some(10));
        assert_eq!(Field::index(9, 22), Some(239));
        assert_eq!(Field::index(-1, 0), None);
        assert_eq!(Field::index(10, 0), None);
        assert_eq!(Field::index(0, 23), None);
        assert_eq!(Field::index(0, -2), None);
    }

    #[test]
    fn test_at_outside_is_empty() {
        let field = Field::new();
        assert_eq!(field.at(-1, 0), None);
        assert_eq!(field.at(0, 40), None);
        assert_eq!(field.get(0, 40), None);
    }

    #[test]
    fn test_clear_full_rows_keeps_garbage() {
        let mut field = Field::from_rows(&["T_________", "IIIIIIIIII"]).unwrap();
        for x in 0..10 {
            field.set(x, -1, Some(PieceKind::X));
        }

        let cleared = field.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[0]);
        assert_eq!(field.at(0, 0), Some(PieceKind::T));
        assert_eq!(field.at(0, 1), None);
        assert_eq!(field.at(5, -1), Some(PieceKind::X));
    }

    #[test]
    fn test_rise_garbage() {
        let mut field = Field::from_rows(&["O_________"]).unwrap();
        field.set(3, -1, Some(PieceKind::X));

        field.rise_garbage();

        assert_eq!(field.at(3, 0), Some(PieceKind::X));
        assert_eq!(field.at(0, 1), Some(PieceKind::O));
        assert_eq!(field.at(3, -1), None);
    }

    #[test]
    fn test_mirror() {
        let mut field = Field::from_rows(&["LJ________"]).unwrap();
        field.set(0, -1, Some(PieceKind::X));

        field.mirror();

        assert_eq!(field.at(9, 0), Some(PieceKind::L));
        assert_eq!(field.at(8, 0), Some(PieceKind::J));
        assert_eq!(field.at(0, -1), Some(PieceKind::X));
    }

    #[test]
    fn test_highest_occupied_row() {
        assert_eq!(Field::new().highest_occupied_row(), None);
        let field = Field::from_rows(&["____S_____", "__________", "__________"]).unwrap();
        assert_eq!(field.highest_occupied_row(), Some(2));
    }
}
