//! fumen-render (workspace facade crate).
//!
//! Renders fumen codes (Tetris board diagrams) to PNG or animated GIF. The
//! implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `fumen_render::{types,core,fumen,render}` and adds the
//! command-line glue around them.

pub use fumen_render_core as core;
pub use fumen_render_fumen as fumen;
pub use fumen_render_render as render;
pub use fumen_render_types as types;

pub mod command;
pub mod config;
pub mod logging;
pub mod request;

pub use command::{parse_cli, Cli, Command, RenderRequest, USAGE};
pub use config::RenderConfig;
pub use request::{handle_request, RequestError};
