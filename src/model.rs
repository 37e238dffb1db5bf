use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Line printed after every record when the catalog is listed.
pub const RECORD_SEPARATOR: &str = "------------------------";

/// One catalog entry. Every field is free-form text; the release year is
/// kept exactly as typed or as the metadata service returned it.
///
/// Fields are read leniently: a missing field or `null` becomes an empty
/// string and a number or boolean becomes its text, so a hand-edited record
/// never makes the whole file unreadable.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Movie {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub director: String,
    #[serde(default, rename = "releaseYear", deserialize_with = "lenient_text")]
    pub release_year: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub genre: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        release_year: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Movie {
            title: title.into(),
            director: director.into(),
            release_year: release_year.into(),
            genre: genre.into(),
        }
    }
}

/// Accept any JSON value where text is expected.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Director: {}", self.director)?;
        writeln!(f, "Release Year: {}", self.release_year)?;
        write!(f, "Genre: {}", self.genre)
    }
}

/// Format each record followed by the separator line. The iterator borrows
/// the slice, so calling `render` again starts over from the first record.
pub fn render(movies: &[Movie]) -> impl Iterator<Item = String> + '_ {
    movies
        .iter()
        .map(|movie| format!("{}\n{}", movie, RECORD_SEPARATOR))
}
