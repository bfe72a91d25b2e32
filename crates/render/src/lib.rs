//! Board image renderer.
//!
//! Draws decoded fumen pages into RGBA frames and encodes them as a PNG (one
//! page) or a looping GIF (a page range). Everything here is synchronous and
//! free of shared state: each call allocates its own buffers.
//!
//! # Module Structure
//!
//! - [`palette`]: the fixed block color table
//! - [`fb`]: RGBA pixel buffer
//! - [`raster`]: page to frame, plus visible-row resolution
//! - [`sequence`]: page range to GIF
//! - [`encode`]: PNG and GIF stream writers
//! - [`options`]: render options, output-mode decision and the `render` entry point
//!
//! # Example
//!
//! ```
//! use fumen_render_render::{rasterize, resolve_visible_rows};
//! use fumen_render_render::core::{Field, Page};
//!
//! let page = Page::new(Field::from_rows(&["I_________"]).unwrap());
//! let rows = resolve_visible_rows(std::slice::from_ref(&page), None);
//! let frame = rasterize(&page, 20, rows, false).unwrap();
//!
//! assert_eq!((frame.width(), frame.height()), (200, 40));
//! ```

pub mod encode;
pub mod error;
pub mod fb;
pub mod options;
pub mod palette;
pub mod raster;
pub mod sequence;

pub use fumen_render_core as core;
pub use fumen_render_types as types;

pub use encode::{encode_png, GifSequence};
pub use error::RenderError;
pub use fb::{PixelBuffer, Rgba};
pub use options::{
    choose_output, render, render_static, ImageFormat, OutputMode, RenderOptions, RenderedImage,
};
pub use raster::{rasterize, resolve_visible_rows, MAX_TILE_SIZE};
pub use sequence::{assemble_sequence, page_range};
