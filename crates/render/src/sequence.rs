//! Sequence assembler: a page range to one looping GIF.

use tracing::debug;

use crate::core::Page;
use crate::encode::GifSequence;
use crate::error::RenderError;
use crate::options::RenderOptions;
use crate::raster::{check_tile_size, rasterize, resolve_visible_rows};
use crate::types::BOARD_WIDTH;

/// Resolve `[start, end)` against `len` pages.
///
/// A missing `end` means "through the last page"; a too-large `end` is clamped.
pub fn page_range(len: usize, start: usize, end: Option<usize>) -> Result<(usize, usize), RenderError> {
    if len == 0 {
        return Err(RenderError::NoPages);
    }
    let end = end.unwrap_or(len).min(len);
    if start >= end {
        return Err(RenderError::EmptyRange { start, end });
    }
    Ok((start, end))
}

/// Render pages `[options.start, options.end)` as an infinitely looping GIF.
///
/// Row count is resolved once over the whole range, so every frame has the same
/// size. Frames keep input order; identical pages are not merged.
pub fn assemble_sequence(pages: &[Page], options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    check_tile_size(options.tile_size)?;
    let (start, end) = page_range(pages.len(), options.start, options.end)?;
    let selected = &pages[start..end];

    let rows = resolve_visible_rows(selected, options.visible_rows);
    let width = BOARD_WIDTH as u32 * options.tile_size;
    let height = rows * options.tile_size;
    debug!(start, end, rows, width, height, delay_ms = options.delay_ms, "assembling sequence");

    let mut gif = GifSequence::new(width, height, options.delay_ms)?;
    for page in selected {
        let frame = rasterize(page, options.tile_size, rows, options.transparent)?;
        gif.push(frame)?;
    }
    debug!(frames = gif.frames(), "sequence encoded");
    gif.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_range_defaults_and_clamps() {
        assert_eq!(page_range(5, 0, None).unwrap(), (0, 5));
        assert_eq!(page_range(5, 2, Some(99)).unwrap(), (2, 5));
    }

    #[test]
    fn test_page_range_rejects_empty() {
        assert!(matches!(
            page_range(3, 1, Some(1)),
            Err(RenderError::EmptyRange { start: 1, end: 1 })
        ));
        assert!(matches!(
            page_range(3, 2, Some(1)),
            Err(RenderError::EmptyRange { .. })
        ));
        assert!(matches!(
            page_range(3, 7, None),
            Err(RenderError::EmptyRange { start: 7, end: 3 })
        ));
        assert!(matches!(page_range(0, 0, None), Err(RenderError::NoPages)));
    }
}
