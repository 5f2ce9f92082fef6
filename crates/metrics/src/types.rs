use std::io;

/// Hard failures while deriving metrics from a tabular source. Per-field
/// parse failures never surface here; they degrade the affected row instead.
#[derive(Debug)]
pub enum DataError {
    Io(io::Error),
    MissingColumn(&'static str),
    MissingKey { row: usize },
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::MissingColumn(name) => write!(f, "missing required column: {}", name),
            Self::MissingKey { row } => write!(f, "row {} has an empty key", row),
        }
    }
}

impl std::error::Error for DataError {}

impl From<io::Error> for DataError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
