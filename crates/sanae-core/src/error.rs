use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Paired selector lists resolved to a different number of nodes.
    #[error("selector lists differ in length: {titles} titles vs {targets} targets")]
    LengthMismatch { titles: usize, targets: usize },

    #[error("platform error: {0}")]
    Platform(String),
}

impl Error {
    pub fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        Error::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }
}
