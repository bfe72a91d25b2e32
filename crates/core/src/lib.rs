//! Core board model - pure, deterministic, and testable
//!
//! This crate holds the board-state data that the decoder produces and the
//! renderer consumes. It has **zero dependencies** on encoding, networking or
//! I/O, making it:
//!
//! - **Deterministic**: the same page always describes the same cells
//! - **Testable**: plain values with unit tests for every field transition
//! - **Cheap to copy**: fields are flat arrays, copied page to page
//!
//! # Module Structure
//!
//! - [`field`]: 10x23 playfield (+1 garbage row) with line clear, rise and mirror
//! - [`pieces`]: tetromino offsets around the SRS center, fumen anchor correction
//! - [`page`]: a field plus the optional active-piece overlay and comment
//!
//! # Example
//!
//! ```
//! use fumen_render_core::{ActivePiece, Field, Page};
//! use fumen_render_types::{PieceKind, Rotation};
//!
//! let field = Field::from_rows(&["XXXXXXXXX_"]).unwrap();
//! let page = Page::new(field).with_active(ActivePiece::new(PieceKind::I, Rotation::Left, 9, 1));
//!
//! assert_eq!(page.highest_occupied_row(), Some(3));
//! ```

pub mod field;
pub mod page;
pub mod pieces;

pub use fumen_render_types as types;

// Re-export commonly used types for convenience
pub use field::Field;
pub use page::{ActivePiece, Page};
pub use pieces::{center_from_anchor, get_shape, PieceShape};
