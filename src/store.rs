// Catalog persistence: the whole catalog lives in one pretty-printed JSON
// array and is read and rewritten in full on every operation.

use crate::error::{CatalogError, Result};
use crate::model::Movie;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        CatalogStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record from the backing file.
    ///
    /// A missing file and an unparsable one both yield an empty catalog;
    /// callers cannot tell the two apart.
    pub fn load(&self) -> Vec<Movie> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                log::debug!("no catalog read from {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Movie>>(&data) {
            Ok(movies) => {
                log::debug!("loaded {} movies from {}", movies.len(), self.path.display());
                movies
            }
            Err(e) => {
                log::warn!(
                    "catalog file {} is not a movie list, treating it as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the backing file with `movies`, creating it if needed.
    /// There is no temp-file rename, so a crash mid-write can truncate it.
    pub fn save(&self, movies: &[Movie]) -> Result<()> {
        let json = serde_json::to_string_pretty(movies)?;
        std::fs::write(&self.path, json).map_err(|source| CatalogError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }
}
