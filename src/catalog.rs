// Catalog operations. Nothing is cached between calls: every operation
// loads the full catalog from the store, works on it in memory and, if it
// changed anything, writes the full catalog back.

use crate::error::{CatalogError, Result};
use crate::model::Movie;
use crate::store::CatalogStore;

/// The two filter modes. Genre is a case-insensitive substring match;
/// release year must equal the stored string exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    Genre(String),
    ReleaseYear(String),
}

impl Filter {
    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            Filter::Genre(genre) => contains_ignore_case(&movie.genre, genre),
            Filter::ReleaseYear(year) => movie.release_year == *year,
        }
    }
}

/// Result of a read-only query. An empty catalog is reported separately
/// from a query that matched nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryOutcome {
    EmptyCatalog,
    NoMatches,
    Found(Vec<Movie>),
}

impl QueryOutcome {
    /// The matched records; empty unless the outcome is `Found`.
    pub fn matches(&self) -> &[Movie] {
        match self {
            QueryOutcome::Found(movies) => movies.as_slice(),
            _ => &[],
        }
    }

    fn from_matches(catalog_len: usize, matches: Vec<Movie>) -> Self {
        if catalog_len == 0 {
            QueryOutcome::EmptyCatalog
        } else if matches.is_empty() {
            QueryOutcome::NoMatches
        } else {
            QueryOutcome::Found(matches)
        }
    }
}

/// A numbered, read-only view of the catalog as loaded at one instant.
///
/// Update and delete take the snapshot by value together with an index
/// into it, so a selection can only ever refer to the list the operator
/// was shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    movies: Vec<Movie>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// `(index, movie)` pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Movie)> + '_ {
        self.movies.iter().enumerate()
    }

    /// Records whose title, director or genre contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> QueryOutcome {
        self.select(|movie| matches_query(movie, query))
    }

    pub fn filter(&self, filter: &Filter) -> QueryOutcome {
        self.select(|movie| filter.matches(movie))
    }

    fn select<P>(&self, predicate: P) -> QueryOutcome
    where
        P: Fn(&Movie) -> bool,
    {
        let found = self
            .movies
            .iter()
            .filter(|movie| predicate(movie))
            .cloned()
            .collect();
        QueryOutcome::from_matches(self.movies.len(), found)
    }

    fn check_selection(&self, index: usize) -> Result<()> {
        if self.movies.is_empty() {
            return Err(CatalogError::Empty);
        }
        if index >= self.movies.len() {
            return Err(CatalogError::SelectionOutOfRange {
                index,
                len: self.movies.len(),
            });
        }
        Ok(())
    }
}

/// Entry point for every catalog operation.
#[derive(Clone, Debug)]
pub struct Catalog {
    store: CatalogStore,
}

impl Catalog {
    pub fn new(store: CatalogStore) -> Self {
        Catalog { store }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Every record in insertion order, for display.
    pub fn movies(&self) -> Vec<Movie> {
        self.store.load()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            movies: self.store.load(),
        }
    }

    /// Append `movie` to the end of the catalog.
    pub fn add(&self, movie: Movie) -> Result<()> {
        let mut movies = self.store.load();
        log::info!("adding movie {:?}", movie.title);
        movies.push(movie);
        self.store.save(&movies)
    }

    /// Replace the entry at `index` of `snapshot` wholesale and save.
    /// Returns the record that was replaced.
    pub fn update(&self, snapshot: Snapshot, index: usize, movie: Movie) -> Result<Movie> {
        snapshot.check_selection(index)?;
        let mut movies = snapshot.movies;
        let previous = std::mem::replace(&mut movies[index], movie);
        log::info!("updating movie {} ({:?})", index, previous.title);
        self.store.save(&movies)?;
        Ok(previous)
    }

    /// Remove the entry at `index` of `snapshot`, shifting later entries
    /// down by one, and save. Returns the removed record.
    pub fn delete(&self, snapshot: Snapshot, index: usize) -> Result<Movie> {
        snapshot.check_selection(index)?;
        let mut movies = snapshot.movies;
        let removed = movies.remove(index);
        log::info!("deleting movie {} ({:?})", index, removed.title);
        self.store.save(&movies)?;
        Ok(removed)
    }

    /// Append already-fetched records in one save. Returns how many were added.
    pub fn import(&self, fetched: Vec<Movie>) -> Result<usize> {
        let mut movies = self.store.load();
        let count = fetched.len();
        movies.extend(fetched);
        self.store.save(&movies)?;
        log::info!("imported {} movies", count);
        Ok(count)
    }
}

fn matches_query(movie: &Movie, query: &str) -> bool {
    contains_ignore_case(&movie.title, query)
        || contains_ignore_case(&movie.director, query)
        || contains_ignore_case(&movie.genre, query)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
