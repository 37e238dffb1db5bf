// Runtime configuration. All settings come from environment variables so
// nothing (in particular the OMDb key) has to live in the source.

use std::path::PathBuf;

pub const DEFAULT_CATALOG_FILE: &str = "movies.json";
pub const DEFAULT_OMDB_API_URL: &str = "http://www.omdbapi.com/";

/// Settings handed to the store and the metadata client at construction.
#[derive(Clone, Debug)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub omdb_api_url: String,
    pub omdb_api_key: Option<String>,
}

impl Config {
    /// Read `MOVIE_CATALOG_FILE`, `OMDB_API_URL` and `OMDB_API_KEY`,
    /// falling back to `movies.json` and the public OMDb endpoint.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but with a caller-supplied variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup("MOVIE_CATALOG_FILE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_FILE.into());
        let omdb_api_url = lookup("OMDB_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OMDB_API_URL.into());
        let omdb_api_key = lookup("OMDB_API_KEY").filter(|v| !v.trim().is_empty());

        Config {
            catalog_path: PathBuf::from(catalog_path),
            omdb_api_url,
            omdb_api_key,
        }
    }
}
