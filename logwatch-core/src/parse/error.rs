use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line does not match the access log format")]
    Malformed,

    #[error("invalid byte count '{field}'")]
    InvalidBytes { field: String },
}
