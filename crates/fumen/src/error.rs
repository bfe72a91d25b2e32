use thiserror::Error;

/// Failures while turning fumen text into pages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no fumen data found (expected `v115@...`)")]
    MissingVersion,

    #[error("unsupported fumen version {0}")]
    UnsupportedVersion(String),

    #[error("invalid character {0:?} in fumen data")]
    InvalidCharacter(char),

    #[error("fumen data ended unexpectedly")]
    UnexpectedEnd,

    #[error("block value {value} out of range at ({x}, {y})")]
    InvalidBlock { x: i8, y: i8, value: i32 },

    #[error("invalid comment character value {0}")]
    InvalidComment(u32),
}

/// Failures while turning a command argument into fumen text.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("`{0}` does not contain a fumen code")]
    NotFumen(String),

    #[error("failed to follow link: {0}")]
    Http(#[from] reqwest::Error),
}
