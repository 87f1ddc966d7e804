use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::runtime::Runtime;
use crate::validator::{Validator, unique};

/// A catalog entry.
///
/// `id` and `version` are owned by the store: insert assigns both, update
/// bumps the version. The API layer only carries them through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub runtime: Runtime,
    pub genres: Vec<String>,
    pub version: i32,
}

/// Run every domain rule against `movie`, accumulating errors in `v`.
pub fn validate_movie(v: &mut Validator, movie: &Movie) {
    v.check(!movie.title.is_empty(), "title", "must be provided");
    v.check(
        movie.title.len() <= 500,
        "title",
        "must not be more than 500 bytes long",
    );

    v.check(movie.year != 0, "year", "must be provided");
    v.check(movie.year >= 1888, "year", "must not be before 1888");
    v.check(
        movie.year <= Utc::now().year(),
        "year",
        "must not be in the future",
    );

    v.check(
        movie.runtime.minutes() > 0,
        "runtime",
        "must be a positive integer",
    );

    v.check(!movie.genres.is_empty(), "genres", "must contain at least 1 genre");
    v.check(
        movie.genres.len() <= 5,
        "genres",
        "must not contain more than 5 genres",
    );
    v.check(
        movie.genres.iter().all(|genre| !genre.is_empty()),
        "genres",
        "must not contain empty values",
    );
    v.check(
        unique(&movie.genres),
        "genres",
        "must not contain duplicate values",
    );
}
