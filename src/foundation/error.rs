/// Convenience result type used across the crate.
pub type SwapResult<T> = Result<T, SwapError>;

/// Top-level error taxonomy used by generation APIs.
#[derive(thiserror::Error, Debug)]
pub enum SwapError {
    /// Invalid configuration, or a request the symbol pool cannot satisfy.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Prompt selection was invoked without a resolved replacement symbol.
    #[error("missing symbol error: a replacement symbol is required to fill the prompt")]
    MissingSymbol,

    /// Raster or compositing failures.
    #[error("render error: {0}")]
    Render(String),

    /// Video sink failures.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SwapError {
    /// Build a [`SwapError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`SwapError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SwapError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SwapError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
