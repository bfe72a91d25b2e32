//! Pages: one decoded board state plus its active-piece overlay.

use arrayvec::ArrayVec;

use crate::field::Field;
use crate::pieces::get_shape;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// The piece drawn on top of a page's field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Center column
    pub x: i8,
    /// Center row, 0 at the bottom
    pub y: i8,
}

impl ActivePiece {
    pub fn new(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Absolute cells covered by the piece. Empty for garbage, which has no shape.
    ///
    /// Cells may lie outside the field; callers filter to their window.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        let Some(shape) = get_shape(self.kind, self.rotation) else {
            return ArrayVec::new();
        };
        shape
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// True when the piece covers (x, y).
    pub fn contains(&self, x: i8, y: i8) -> bool {
        self.cells().contains(&(x, y))
    }
}

/// One immutable board state of a fumen sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub field: Field,
    pub active: Option<ActivePiece>,
    pub comment: Option<String>,
}

impl Page {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            active: None,
            comment: None,
        }
    }

    pub fn with_active(mut self, active: ActivePiece) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Highest visible row holding either a field block or an overlay mino.
    pub fn highest_occupied_row(&self) -> Option<u8> {
        let overlay_top = self
            .active
            .iter()
            .flat_map(|active| active.cells())
            .filter(|&(x, y)| (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y))
            .map(|(_, y)| y as u8)
            .max();
        self.field.highest_occupied_row().max(overlay_top)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Field::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_cells() {
        let t = ActivePiece::new(PieceKind::T, Rotation::Spawn, 4, 0);
        assert_eq!(t.cells().as_slice(), &[(4, 0), (3, 0), (5, 0), (4, 1)]);
        assert!(t.contains(4, 1));
        assert!(!t.contains(4, 2));
    }

    #[test]
    fn test_garbage_overlay_is_empty() {
        let x = ActivePiece::new(PieceKind::X, Rotation::Spawn, 4, 0);
        assert!(x.cells().is_empty());
    }

    #[test]
    fn test_highest_row_includes_overlay() {
        let field = Field::from_rows(&["I_________"]).unwrap();
        let page = Page::new(field).with_active(ActivePiece::new(PieceKind::I, Rotation::Right, 5, 3));
        // vertical I spans rows 1..=4 around its center
        assert_eq!(page.highest_occupied_row(), Some(4));
    }

    #[test]
    fn test_overlay_outside_field_is_ignored() {
        let page = Page::default().with_active(ActivePiece::new(PieceKind::O, Rotation::Spawn, 4, 30));
        assert_eq!(page.highest_occupied_row(), None);
    }
}
