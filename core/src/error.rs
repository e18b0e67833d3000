#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("document identifier must not be empty")]
    EmptyIdentifier,

    #[error("document `{0}` was already added")]
    DuplicateIdentifier(String),

    #[error("malformed catalog record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
