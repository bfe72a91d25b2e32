//! Grid rasterizer: one page to one RGBA frame.
//!
//! Board row 0 is drawn at the bottom of the canvas. Every tile keeps a
//! one-pixel border, so blocks are painted as inset squares.

use crate::core::Page;
use crate::error::RenderError;
use crate::fb::PixelBuffer;
use crate::palette::{self, GRID_BASE, GRID_BASE_TRANSPARENT, GRID_BORDER};
use crate::types::{PieceKind, BOARD_WIDTH, MAX_VISIBLE_ROWS, ROW_MARGIN};

/// Largest accepted tile edge: the board width must fit a 16-bit image dimension
pub const MAX_TILE_SIZE: u32 = u16::MAX as u32 / BOARD_WIDTH as u32;

pub(crate) fn check_tile_size(tile_size: u32) -> Result<(), RenderError> {
    if tile_size == 0 || tile_size > MAX_TILE_SIZE {
        return Err(RenderError::InvalidTileSize {
            size: tile_size,
            max: MAX_TILE_SIZE,
        });
    }
    Ok(())
}

/// Rows to render for `pages`: the explicit count capped at 23, or the highest
/// occupied row across all pages plus a 2-row margin, capped at 23.
///
/// # Examples
///
/// ```
/// use fumen_render_render::resolve_visible_rows;
/// use fumen_render_render::core::Page;
///
/// assert_eq!(resolve_visible_rows(&[Page::default()], None), 2);
/// assert_eq!(resolve_visible_rows(&[Page::default()], Some(40)), 23);
/// ```
pub fn resolve_visible_rows(pages: &[Page], explicit: Option<u32>) -> u32 {
    if let Some(rows) = explicit {
        return rows.min(MAX_VISIBLE_ROWS);
    }
    let top = pages
        .iter()
        .filter_map(Page::highest_occupied_row)
        .max()
        .map_or(0, u32::from);
    (top + ROW_MARGIN).min(MAX_VISIBLE_ROWS)
}

/// Draw `page` at `tile_size` pixels per cell, showing the bottom `visible_rows` rows.
///
/// Output is exactly `10 * tile_size` by `visible_rows * tile_size` pixels.
/// Calls with identical arguments produce identical pixels.
pub fn rasterize(
    page: &Page,
    tile_size: u32,
    visible_rows: u32,
    transparent: bool,
) -> Result<PixelBuffer, RenderError> {
    check_tile_size(tile_size)?;
    if visible_rows == 0 || visible_rows > MAX_VISIBLE_ROWS {
        return Err(RenderError::InvalidVisibleRows(visible_rows));
    }
    let width = BOARD_WIDTH as u32 * tile_size;
    let height = visible_rows * tile_size;

    let mut fb = PixelBuffer::new(width, height);
    draw_grid(&mut fb, tile_size, transparent);

    for col in 0..BOARD_WIDTH as u32 {
        for row in 0..visible_rows {
            if let Some(kind) = page.field.at(col as i8, row as i8) {
                fill_block(&mut fb, tile_size, col, row, kind);
            }
        }
    }

    // The overlay goes on last so it wins over whatever the field holds.
    if let Some(active) = page.active {
        for (x, y) in active.cells() {
            let (Ok(col), Ok(row)) = (u32::try_from(x), u32::try_from(y)) else {
                continue;
            };
            if col < BOARD_WIDTH as u32 && row < visible_rows {
                fill_block(&mut fb, tile_size, col, row, active.kind);
            }
        }
    }

    Ok(fb)
}

/// Tile base color plus a one-pixel border around every tile.
fn draw_grid(fb: &mut PixelBuffer, tile_size: u32, transparent: bool) {
    let base = if transparent {
        GRID_BASE_TRANSPARENT
    } else {
        GRID_BASE
    };
    fb.clear(base);

    let (width, height) = (fb.width(), fb.height());
    let last = tile_size - 1;
    let mut x = 0;
    while x < width {
        fb.fill_rect(x, 0, 1, height, GRID_BORDER);
        fb.fill_rect(x + last, 0, 1, height, GRID_BORDER);
        x += tile_size;
    }
    let mut y = 0;
    while y < height {
        fb.fill_rect(0, y, width, 1, GRID_BORDER);
        fb.fill_rect(0, y + last, width, 1, GRID_BORDER);
        y += tile_size;
    }
}

/// Inset square for board cell (col, row), row 0 at the bottom.
fn fill_block(fb: &mut PixelBuffer, tile_size: u32, col: u32, row: u32, kind: PieceKind) {
    let px = col * tile_size;
    let py = fb.height() - (row + 1) * tile_size;
    let inner = tile_size.saturating_sub(2);
    fb.fill_rect(px + 1, py + 1, inner, inner, palette::colors(kind).light);
}
