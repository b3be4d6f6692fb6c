/// Crate-wide result alias.
pub type BoomerangResult<T> = Result<T, BoomerangError>;

/// Errors surfaced by stage construction, playback and frame output.
#[derive(thiserror::Error, Debug)]
pub enum BoomerangError {
    /// The drawing surface could not be created or read back.
    #[error("surface error: {0}")]
    Surface(String),

    /// The periodic driver could not be scheduled or dispatched.
    #[error("ticker error: {0}")]
    Ticker(String),

    /// Invalid stage options.
    #[error("config error: {0}")]
    Config(String),

    /// A frame sink failed to write output.
    #[error("encode error: {0}")]
    Encode(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoomerangError {
    /// Build a [`BoomerangError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`BoomerangError::Ticker`].
    pub fn ticker(msg: impl Into<String>) -> Self {
        Self::Ticker(msg.into())
    }

    /// Build a [`BoomerangError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BoomerangError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
