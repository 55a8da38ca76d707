use std::cmp::Ordering;

use rand::Rng;

use crate::error::RecommendError;
use crate::models::{MovieRecord, MovieTable};

/// Default number of rated and unrated movies returned per genre
pub const DEFAULT_GENRE_LIMIT: usize = 5;

/// Default number of movies returned by the popular listing
pub const DEFAULT_POPULAR_LIMIT: usize = 10;

/// Genre recommendations, split into rated and unrated shelves
#[derive(Debug, Default, PartialEq)]
pub struct GenreShelf<'a> {
    /// Best-rated matches, descending by rating
    pub rated: Vec<&'a MovieRecord>,
    /// Matches without a usable rating, in table order
    pub unrated: Vec<&'a MovieRecord>,
}

impl GenreShelf<'_> {
    pub fn is_empty(&self) -> bool {
        self.rated.is_empty() && self.unrated.is_empty()
    }
}

/// Sorts descending by rating. The sort is stable, so movies with equal
/// ratings keep their table order.
fn sort_by_rating_desc(movies: &mut [&MovieRecord]) {
    movies.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
    });
}

/// Recommends movies matching a genre, partitioned into rated and unrated
/// shelves and truncated to the given limits.
///
/// Matching is a case-insensitive substring test against the raw genre
/// field, so vocabulary tokens also hit multi-word genre strings. An empty
/// match set returns two empty shelves rather than an error.
pub fn by_genre<'a>(
    table: &'a MovieTable,
    genre: &str,
    rated_limit: usize,
    unrated_limit: usize,
) -> GenreShelf<'a> {
    let mut shelf = GenreShelf::default();
    for record in table.records() {
        if !record.matches_genre(genre) {
            continue;
        }
        if record.is_rated() {
            shelf.rated.push(record);
        } else {
            shelf.unrated.push(record);
        }
    }

    sort_by_rating_desc(&mut shelf.rated);
    shelf.rated.truncate(rated_limit);
    shelf.unrated.truncate(unrated_limit);
    shelf
}

/// Returns the highest-rated movies across the whole table.
pub fn popular(table: &MovieTable, limit: usize) -> Result<Vec<&MovieRecord>, RecommendError> {
    let mut rated: Vec<&MovieRecord> = table
        .records()
        .iter()
        .filter(|record| record.is_rated())
        .collect();
    if rated.is_empty() {
        return Err(RecommendError::NoRatedMovies);
    }

    sort_by_rating_desc(&mut rated);
    rated.truncate(limit);
    Ok(rated)
}

/// Picks one movie uniformly at random across the whole table, rated or not.
pub fn random_pick<'a, R: Rng + ?Sized>(
    table: &'a MovieTable,
    rng: &mut R,
) -> Result<&'a MovieRecord, RecommendError> {
    if table.is_empty() {
        return Err(RecommendError::EmptyTable);
    }
    let index = rng.gen_range(0..table.len());
    Ok(&table.records()[index])
}
