use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the store and the catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No movies available in the catalog.")]
    Empty,

    #[error("selection {index} is out of range for a catalog of {len} movies")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("failed to serialize the catalog")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write catalog file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
