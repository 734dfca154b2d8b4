/// Convenience result type used across Tessera.
pub type TesseraResult<T> = Result<T, TesseraError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TesseraError {
    /// Invalid node parameters, settings or keys.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed color strings.
    #[error("color parse error: {0}")]
    ColorParse(String),

    /// Failures while rasterizing a source tree.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TesseraError {
    /// Build a [`TesseraError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TesseraError::ColorParse`] value.
    pub fn color_parse(msg: impl Into<String>) -> Self {
        Self::ColorParse(msg.into())
    }

    /// Build a [`TesseraError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
