//! Static color table. Rendered output is bit-exact against these values.

use crate::fb::Rgba;
use crate::types::PieceKind;

/// Display colors for one block tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceColors {
    pub normal: Rgba,
    /// The color every rendered block uses
    pub light: Rgba,
}

impl PieceColors {
    const fn new(normal: u32, light: u32) -> Self {
        Self {
            normal: Rgba::hex(normal),
            light: Rgba::hex(light),
        }
    }
}

pub const fn colors(kind: PieceKind) -> PieceColors {
    match kind {
        PieceKind::I => PieceColors::new(0x009999, 0x00FFFF),
        PieceKind::T => PieceColors::new(0x990099, 0xFF00FF),
        PieceKind::S => PieceColors::new(0x009900, 0x00FF00),
        PieceKind::Z => PieceColors::new(0x990000, 0xFF0000),
        PieceKind::L => PieceColors::new(0x996600, 0xFF9900),
        PieceKind::J => PieceColors::new(0x0000BB, 0x0000FF),
        PieceKind::O => PieceColors::new(0x999900, 0xFFFF00),
        PieceKind::X => PieceColors::new(0x999999, 0xCCCCCC),
    }
}

/// Empty-cell color. Kept with the table; the grid renderer draws empties as background.
pub const EMPTY: Rgba = Rgba::hex(0xF3F3ED);

/// Tile fill behind the grid
pub const GRID_BASE: Rgba = Rgba::hex(0x000000);

/// Tile fill behind the grid in transparent mode
pub const GRID_BASE_TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

/// One-pixel outline around every tile
pub const GRID_BORDER: Rgba = Rgba::hex(0x333333);
