// API client module: a small blocking HTTP client for the OMDb search
// endpoint. One request per import, no retries and no timeout.

use crate::config::Config;
use crate::model::Movie;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

/// Client for the OMDb search endpoint. The API key is optional at
/// construction so the rest of the CLI works without one.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

/// Body of a search response. `Search` is absent when the service answers
/// with `"Response": "False"`, in which case `Error` says why.
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(rename = "Search")]
    pub search: Option<Vec<SearchResult>>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

/// One search hit. The search endpoint does not always send director and
/// genre, so those default to empty.
#[derive(Deserialize, Debug)]
pub struct SearchResult {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
}

impl From<SearchResult> for Movie {
    fn from(hit: SearchResult) -> Self {
        Movie {
            title: hit.title,
            director: hit.director.unwrap_or_default(),
            release_year: hit.year,
            genre: hit.genre.unwrap_or_default(),
        }
    }
}

impl OmdbClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(OmdbClient {
            client,
            base_url: config.omdb_api_url.clone(),
            api_key: config.omdb_api_key.clone(),
        })
    }

    /// Returns whether an API key was configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search OMDb for `query` and map every hit into a `Movie`.
    /// Either the whole result set maps or an error is returned.
    pub fn search(&self, query: &str) -> Result<Vec<Movie>> {
        let api_key = self
            .api_key
            .as_deref()
            .context("no OMDb API key configured (set OMDB_API_KEY)")?;

        log::info!("searching OMDb for {:?}", query);
        let res = self
            .client
            .get(&self.base_url)
            .query(&[("s", query), ("apikey", api_key)])
            .send()
            .context("Failed to send search request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Search failed: {} - {}", status, txt);
        }
        let body = res.text().context("Reading search response body")?;
        map_search_response(&body)
    }
}

/// Parse a search response body into local records.
pub fn map_search_response(body: &str) -> Result<Vec<Movie>> {
    let resp: SearchResponse = serde_json::from_str(body).context("Parsing search response json")?;
    match resp.search {
        Some(hits) => {
            log::debug!("search returned {} results", hits.len());
            Ok(hits.into_iter().map(Movie::from).collect())
        }
        None => anyhow::bail!(
            "{}",
            resp.error
                .unwrap_or_else(|| "response has no search results".into())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_search_hits() {
        let body = r#"{
            "Search": [
                {"Title": "Alien", "Year": "1979", "imdbID": "tt0078748", "Type": "movie"},
                {"Title": "Aliens", "Year": "1986", "Director": "James Cameron", "Genre": "Action, Sci-Fi"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;
        let movies = map_search_response(body).unwrap();
        assert_eq!(
            movies,
            vec![
                Movie::new("Alien", "", "1979", ""),
                Movie::new("Aliens", "James Cameron", "1986", "Action, Sci-Fi"),
            ]
        );
    }

    #[test]
    fn service_error_is_reported() {
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let err = map_search_response(body).unwrap_err();
        assert_eq!(err.to_string(), "Movie not found!");
    }

    #[test]
    fn hit_without_title_fails_the_whole_response() {
        let body = r#"{"Search":[{"Title":"Ok","Year":"2000"},{"Year":"2001"}]}"#;
        assert!(map_search_response(body).is_err());
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(map_search_response("<html>oops</html>").is_err());
    }

    #[test]
    fn search_without_key_fails_before_any_request() {
        let config = Config::from_lookup(|_| None);
        let client = OmdbClient::new(&config).unwrap();
        assert!(!client.has_api_key());
        let err = client.search("alien").unwrap_err();
        assert!(err.to_string().contains("OMDB_API_KEY"));
    }
}
