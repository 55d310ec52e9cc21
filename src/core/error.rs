use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::content::CatalogError),

    #[error("Content not found: {0}")]
    ContentNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StudyError>;
