//! Data types returned by the movie database.

use serde::{Deserialize, Serialize};

/// Base URL for poster images; `poster_path` values are appended to it.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// One film's metadata as returned by the movie database.
///
/// Fields are taken as-is from the response. A missing required field is a
/// parse error, never a silently defaulted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Identifier assigned by the movie database
    pub id: u64,
    /// Localized title
    pub title: String,
    /// Release date as an ISO-like string, possibly empty
    pub release_date: String,
    /// Relative poster path such as `/x.jpg`, absent when there is no poster
    pub poster_path: Option<String>,
    /// Free-form synopsis
    pub overview: String,
    /// Average user rating on a 0-10 scale
    pub vote_average: f64,
}

impl Movie {
    /// Absolute poster URL, if the movie has a poster.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{POSTER_BASE_URL}{path}"))
    }

    /// Rating with exactly one decimal place.
    pub fn formatted_rating(&self) -> String {
        format!("{:.1}", self.vote_average)
    }
}

/// Response body of one title search. Result order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSearchPage {
    /// Matching movies in the order the movie database returned them
    pub results: Vec<Movie>,
}
