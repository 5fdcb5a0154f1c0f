use searcher::SearchError;
use thiserror::Error;

/// Error when loading a map or game board.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("Line {line}: cannot parse {text:?}")]
    Syntax { line: usize, text: String },

    #[error("Line {line}: invalid number {text:?}")]
    InvalidNumber { line: usize, text: String },

    #[error("Line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: SearchError,
    },

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Map has no cities")]
    Empty,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Search(#[from] SearchError),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
