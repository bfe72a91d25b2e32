//! Render options and the static-vs-animated decision.

use std::slice;

use tracing::info;

use crate::core::Page;
use crate::encode::encode_png;
use crate::error::RenderError;
use crate::raster::{rasterize, resolve_visible_rows};
use crate::sequence::assemble_sequence;
use crate::types::{DEFAULT_DELAY_MS, DEFAULT_TILE_SIZE};

/// Everything a render call needs besides the pages.
///
/// Animations always loop forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub tile_size: u32,
    /// `None` computes the height from the content
    pub visible_rows: Option<u32>,
    pub transparent: bool,
    /// Single page to draw; any non-zero value forces a static image
    pub page: usize,
    pub start: usize,
    /// Exclusive; `None` means through the last page
    pub end: Option<usize>,
    pub delay_ms: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            visible_rows: None,
            transparent: false,
            page: 0,
            start: 0,
            end: None,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

/// Which kind of image a request produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One PNG of the given page; start, end and delay are ignored
    Static { page: usize },
    /// One GIF of the start..end range
    Animated,
}

/// Decide between a static page and an animation.
///
/// A single-page fumen, or any explicit page index other than 0, renders one
/// static page. Otherwise the whole range is animated.
///
/// # Examples
///
/// ```
/// use fumen_render_render::{choose_output, OutputMode};
///
/// assert_eq!(choose_output(1, 0).unwrap(), OutputMode::Static { page: 0 });
/// assert_eq!(choose_output(4, 2).unwrap(), OutputMode::Static { page: 2 });
/// assert_eq!(choose_output(4, 0).unwrap(), OutputMode::Animated);
/// assert!(choose_output(4, 4).is_err());
/// ```
pub fn choose_output(page_count: usize, page_index: usize) -> Result<OutputMode, RenderError> {
    if page_index >= page_count {
        return Err(RenderError::PageOutOfRange {
            index: page_index,
            len: page_count,
        });
    }
    if page_count == 1 || page_index != 0 {
        Ok(OutputMode::Static { page: page_index })
    } else {
        Ok(OutputMode::Animated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Gif,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
        }
    }
}

/// A finished, fully encoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

/// Render one page as a PNG. Rows are resolved from that page alone.
pub fn render_static(pages: &[Page], options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let page = pages.get(options.page).ok_or(RenderError::PageOutOfRange {
        index: options.page,
        len: pages.len(),
    })?;
    let rows = resolve_visible_rows(slice::from_ref(page), options.visible_rows);
    let fb = rasterize(page, options.tile_size, rows, options.transparent)?;
    encode_png(&fb)
}

/// Render `pages` per `options`, picking PNG or GIF with [`choose_output`].
pub fn render(pages: &[Page], options: &RenderOptions) -> Result<RenderedImage, RenderError> {
    if pages.is_empty() {
        return Err(RenderError::NoPages);
    }
    let image = match choose_output(pages.len(), options.page)? {
        OutputMode::Static { .. } => RenderedImage {
            format: ImageFormat::Png,
            bytes: render_static(pages, options)?,
        },
        OutputMode::Animated => RenderedImage {
            format: ImageFormat::Gif,
            bytes: assemble_sequence(pages, options)?,
        },
    };
    info!(
        format = image.format.extension(),
        bytes = image.bytes.len(),
        pages = pages.len(),
        "rendered fumen"
    );
    Ok(image)
}
