//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the decoder, the board model and the renderer alike.
//!
//! # Board Dimensions
//!
//! Fumen playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 23 rows (indexed 0-22, bottom to top)
//! - **Garbage**: 1 hidden row below row 0
//!
//! # Render Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TILE_SIZE` | 22 | Tile edge in pixels |
//! | `DEFAULT_DELAY_MS` | 500 | Animation inter-frame delay |
//! | `ROW_MARGIN` | 2 | Empty rows added above the tallest block |
//! | `MAX_VISIBLE_ROWS` | 23 | Ceiling for the rendered row count |
//!
//! # Examples
//!
//! ```
//! use fumen_render_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::Spawn.rotate_cw(), Rotation::Right);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 23);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Visible board height in cells (23 rows)
pub const BOARD_HEIGHT: u8 = 23;

/// Hidden garbage rows below row 0
pub const GARBAGE_ROWS: u8 = 1;

/// Default tile edge in pixels
pub const DEFAULT_TILE_SIZE: u32 = 22;

/// Default animation delay between frames
pub const DEFAULT_DELAY_MS: u32 = 500;

/// Rows of headroom left above the highest occupied row
pub const ROW_MARGIN: u32 = 2;

/// Hard ceiling for the number of rendered rows
pub const MAX_VISIBLE_ROWS: u32 = BOARD_HEIGHT as u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults() {
        assert_eq!(DEFAULT_TILE_SIZE, 22);
        assert_eq!(DEFAULT_DELAY_MS, 500);
        assert_eq!(ROW_MARGIN, 2);
        assert_eq!(MAX_VISIBLE_ROWS, 23);
    }

    #[test]
    fn block_numbers_round_trip_through_kinds() {
        for n in 1..=8u8 {
            let kind = PieceKind::from_block_number(n).unwrap();
            assert_eq!(kind.block_number(), n);
        }
        assert_eq!(PieceKind::from_block_number(0), None);
        assert_eq!(PieceKind::from_block_number(9), None);
    }
}

/// Block tags that can occupy a cell
///
/// The seven tetrominoes plus `X` for garbage (gray) blocks:
/// - **I**: Cyan bar
/// - **L**: Orange
/// - **O**: Yellow square
/// - **Z**: Red
/// - **T**: Magenta
/// - **J**: Blue
/// - **S**: Green
/// - **X**: Gray garbage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    O,
    Z,
    T,
    J,
    S,
    X,
}

impl PieceKind {
    /// All tags in fumen block-number order (1..=8)
    pub const ALL: [PieceKind; 8] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::J,
        PieceKind::S,
        PieceKind::X,
    ];

    /// Parse a tag from string (case-insensitive)
    ///
    /// Accepts `"gray"` and `"g"` as aliases for `X`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fumen_render_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("gray"), Some(PieceKind::X));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "z" => Some(PieceKind::Z),
            "t" => Some(PieceKind::T),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "x" | "g" | "gray" => Some(PieceKind::X),
            _ => None,
        }
    }

    /// Single uppercase letter, as used in the color table
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::Z => "Z",
            PieceKind::T => "T",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::X => "X",
        }
    }

    /// Fumen block number (1..=8). Zero is reserved for empty.
    pub fn block_number(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::Z => 4,
            PieceKind::T => 5,
            PieceKind::J => 6,
            PieceKind::S => 7,
            PieceKind::X => 8,
        }
    }

    /// Inverse of [`PieceKind::block_number`]; `0` and out-of-range map to `None`.
    pub fn from_block_number(n: u8) -> Option<Self> {
        match n {
            1..=8 => Some(Self::ALL[(n - 1) as usize]),
            _ => None,
        }
    }

    /// True for the seven tetrominoes, false for garbage.
    pub fn is_mino(&self) -> bool {
        !matches!(self, PieceKind::X)
    }
}

/// Piece orientations as fumen names them
///
/// - **Spawn**: 0° rotation
/// - **Right**: 90° clockwise
/// - **Reverse**: 180°
/// - **Left**: 90° counter-clockwise
///
/// The rotation cycle goes: Spawn → Right → Reverse → Left → Spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Spawn,
    Right,
    Reverse,
    Left,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use fumen_render_types::Rotation;
    ///
    /// assert_eq!(Rotation::Spawn.rotate_cw(), Rotation::Right);
    /// assert_eq!(Rotation::Left.rotate_cw(), Rotation::Spawn);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::Spawn => Rotation::Right,
            Rotation::Right => Rotation::Reverse,
            Rotation::Reverse => Rotation::Left,
            Rotation::Left => Rotation::Spawn,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::Spawn => Rotation::Left,
            Rotation::Left => Rotation::Reverse,
            Rotation::Reverse => Rotation::Right,
            Rotation::Right => Rotation::Spawn,
        }
    }

    /// Parse rotation from string
    ///
    /// Accepts fumen names or compass names (case-insensitive):
    /// "spawn" | "north", "right" | "east", "reverse" | "south", "left" | "west"
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spawn" | "north" | "n" => Some(Rotation::Spawn),
            "right" | "east" | "e" => Some(Rotation::Right),
            "reverse" | "south" | "s" => Some(Rotation::Reverse),
            "left" | "west" | "w" => Some(Rotation::Left),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::Spawn => "spawn",
            Rotation::Right => "right",
            Rotation::Reverse => "reverse",
            Rotation::Left => "left",
        }
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified tag
pub type Cell = Option<PieceKind>;
