//! Fumen decoding.
//!
//! Turns fumen text (`v115@...`, a fumen link, or a short link that redirects
//! to one) into [`Page`](crate::core::Page)s for the renderer.
//!
//! - [`decoder`]: the v115/v110 page chain decoder
//! - [`comment`]: page comment unpacking
//! - [`link`]: argument to code resolution, including HTTP redirects
//! - [`values`]: the base-64 digit stream underneath it all

pub mod comment;
pub mod decoder;
pub mod error;
pub mod link;
pub mod values;

pub use fumen_render_core as core;
pub use fumen_render_types as types;

pub use decoder::{decode, Version};
pub use error::{DecodeError, LinkError};
pub use link::{extract_code, resolve_argument};
