use thiserror::Error;

/// PSL engine error types
#[derive(Error, Debug)]
pub enum PslError {
    /// Structural problem in the raw suffix-list text, e.g. a section begin
    /// marker without its matching end marker under strict mode.
    #[error("Malformed suffix list: {0}")]
    MalformedList(String),

    /// The IDN codec rejected a rule or query string.
    #[error("IDN encoding failed for '{input}': {message}")]
    Encoding { input: String, message: String },

    /// No stored rule is a suffix of the queried domain.
    #[error("No public suffix found for '{0}'")]
    SuffixNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PslError>;
