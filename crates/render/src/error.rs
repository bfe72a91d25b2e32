use thiserror::Error;

/// Everything that can stop a render call. No partial output accompanies an error.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("tile size must be between 1 and {max}, got {size}")]
    InvalidTileSize { size: u32, max: u32 },

    #[error("visible rows must be between 1 and 23, got {0}")]
    InvalidVisibleRows(u32),

    #[error("frame size {width}x{height} does not fit the animation")]
    FrameSize { width: u32, height: u32 },

    #[error("page {index} is out of range ({len} pages)")]
    PageOutOfRange { index: usize, len: usize },

    #[error("page range {start}..{end} is empty")]
    EmptyRange { start: usize, end: usize },

    #[error("no pages to render")]
    NoPages,

    #[error("gif encoding failed: {0}")]
    Gif(#[from] gif::EncodingError),

    #[error("png encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    #[error("failed to finish image stream: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// True for errors caused by the caller's options rather than the encoder.
    pub fn is_invalid_option(&self) -> bool {
        matches!(
            self,
            RenderError::InvalidTileSize { .. }
                | RenderError::InvalidVisibleRows(_)
                | RenderError::FrameSize { .. }
                | RenderError::PageOutOfRange { .. }
                | RenderError::EmptyRange { .. }
                | RenderError::NoPages
        )
    }
}
