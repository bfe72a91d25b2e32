//! One render request end to end: argument -> code -> pages -> image.

use thiserror::Error;
use tracing::{debug, info};

use crate::command::RenderRequest;
use crate::fumen::{decode, resolve_argument, DecodeError, LinkError};
use crate::render::{render, RenderError, RenderedImage};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Could not parse fumen. ({0})")]
    Link(#[from] LinkError),

    #[error("Could not parse fumen. ({0})")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl RequestError {
    /// True when the input never became pages.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, RequestError::Link(_) | RequestError::Decode(_))
    }
}

/// Resolve, decode and render. Network I/O only happens for short links.
pub async fn handle_request(request: &RenderRequest) -> Result<RenderedImage, RequestError> {
    let code = resolve_argument(&request.fumen).await?;
    debug!(code = %code, "resolved fumen");

    let pages = decode(&code)?;
    info!(pages = pages.len(), "decoded fumen");

    Ok(render(&pages, &request.options)?)
}
