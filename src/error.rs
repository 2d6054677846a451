use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamBuilderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV decode error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog row {row}: {message}")]
    CatalogRow { row: usize, message: String },

    #[error("Unknown type tag: {0}")]
    UnknownType(String),

    #[error("Unknown generation: {0}")]
    UnknownGeneration(u8),

    #[error("Index {index} out of range for roster of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Team is full ({capacity} members)")]
    TeamFull { capacity: usize },
}

pub type Result<T> = std::result::Result<T, TeamBuilderError>;
