//! Pieces module - tetromino shapes around a rotation center
//!
//! Offsets follow the SRS centers used by fumen: every shape lists the center
//! mino first. Other rotations are derived from the spawn shape.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece center
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the piece center
pub type PieceShape = [MinoOffset; 4];

/// Spawn-orientation offsets, y pointing up
fn spawn_shape(kind: PieceKind) -> Option<PieceShape> {
    let shape = match kind {
        PieceKind::I => [(0, 0), (-1, 0), (1, 0), (2, 0)],
        PieceKind::T => [(0, 0), (-1, 0), (1, 0), (0, 1)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::L => [(0, 0), (-1, 0), (1, 0), (1, 1)],
        PieceKind::J => [(0, 0), (-1, 0), (1, 0), (-1, 1)],
        PieceKind::S => [(0, 0), (-1, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(0, 0), (1, 0), (0, 1), (-1, 1)],
        PieceKind::X => return None,
    };
    Some(shape)
}

/// Get the shape (mino offsets) for a piece kind and rotation
///
/// Returns None for garbage, which has no shape.
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> Option<PieceShape> {
    let mut shape = spawn_shape(kind)?;
    for offset in &mut shape {
        let (x, y) = *offset;
        *offset = match rotation {
            Rotation::Spawn => (x, y),
            Rotation::Right => (y, -x),
            Rotation::Reverse => (-x, -y),
            Rotation::Left => (-y, x),
        };
    }
    Some(shape)
}

/// Convert a fumen-encoded anchor cell into the SRS center of the piece.
///
/// Fumen anchors O, I, S and Z on a different mino than SRS does for some
/// orientations; this applies the fixed correction.
pub fn center_from_anchor(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> (i8, i8) {
    match (kind, rotation) {
        (PieceKind::O, Rotation::Left) => (x + 1, y - 1),
        (PieceKind::O, Rotation::Reverse) => (x + 1, y),
        (PieceKind::O, Rotation::Spawn) => (x, y - 1),
        (PieceKind::I, Rotation::Reverse) => (x + 1, y),
        (PieceKind::I, Rotation::Left) => (x, y - 1),
        (PieceKind::S, Rotation::Spawn) => (x, y - 1),
        (PieceKind::S, Rotation::Right) => (x - 1, y),
        (PieceKind::Z, Rotation::Spawn) => (x, y - 1),
        (PieceKind::Z, Rotation::Left) => (x + 1, y),
        _ => (x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_has_no_shape() {
        assert_eq!(get_shape(PieceKind::X, Rotation::Spawn), None);
    }

    #[test]
    fn test_t_rotations() {
        assert_eq!(
            get_shape(PieceKind::T, Rotation::Right),
            Some([(0, 0), (0, 1), (0, -1), (1, 0)])
        );
        assert_eq!(
            get_shape(PieceKind::T, Rotation::Reverse),
            Some([(0, 0), (1, 0), (-1, 0), (0, -1)])
        );
        assert_eq!(
            get_shape(PieceKind::T, Rotation::Left),
            Some([(0, 0), (0, -1), (0, 1), (-1, 0)])
        );
    }

    #[test]
    fn test_four_rotations_return_to_spawn() {
        for kind in PieceKind::ALL.into_iter().filter(PieceKind::is_mino) {
            let mut rotation = Rotation::Spawn;
            for _ in 0..4 {
                rotation = rotation.rotate_cw();
            }
            assert_eq!(get_shape(kind, rotation), get_shape(kind, Rotation::Spawn));
        }
    }

    #[test]
    fn test_center_from_anchor() {
        assert_eq!(center_from_anchor(PieceKind::O, Rotation::Spawn, 4, 1), (4, 0));
        assert_eq!(center_from_anchor(PieceKind::I, Rotation::Reverse, 4, 0), (5, 0));
        assert_eq!(center_from_anchor(PieceKind::T, Rotation::Spawn, 4, 0), (4, 0));
    }
}
