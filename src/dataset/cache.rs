use std::path::Path;

use tracing::info;

use crate::error::LoadError;
use crate::models::movie::{MovieRecord, NO_RATE};

/// Canonical header of the cache file
const CACHE_HEADERS: [&str; 6] = ["Title", "Year", "Rate", "Genre", "Type", "Plot"];

/// Writes the normalized table as the advisory cache file.
///
/// Unrated movies keep the "No Rate" sentinel so the cache round-trips
/// through the same rating parser as the raw source.
pub fn write_cache(path: &Path, records: &[MovieRecord]) -> Result<(), LoadError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CACHE_HEADERS)?;
    for record in records {
        let rate = record
            .rating
            .map(|value| value.to_string())
            .unwrap_or_else(|| NO_RATE.to_string());
        writer.write_record([
            record.title.as_str(),
            record.year.as_str(),
            rate.as_str(),
            record.genre.as_str(),
            record.media_type.as_str(),
            record.plot.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    info!(path = %path.display(), movies = records.len(), "dataset cache written");
    Ok(())
}

/// Loads records directly from a previously written cache file.
///
/// The cache must carry the canonical Title and Genre headers; anything less
/// counts as corrupt and the caller falls back to the raw source.
pub fn load_cache(path: &Path) -> Result<Vec<MovieRecord>, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);

    let (Some(title_idx), Some(genre_idx)) = (position("Title"), position("Genre")) else {
        return Err(LoadError::MissingRequiredColumns);
    };
    let year_idx = position("Year");
    let rate_idx = position("Rate");
    let type_idx = position("Type");
    let plot_idx = position("Plot");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i)).filter(|value| !value.is_empty())
        };

        // Cache rows are already normalized, but stay defensive about
        // hand-edited files: rows without a title or genre are skipped.
        let (Some(title), Some(genre)) = (cell(Some(title_idx)), cell(Some(genre_idx))) else {
            continue;
        };

        records.push(MovieRecord::from_cells(
            title.to_string(),
            cell(year_idx).map(str::to_string),
            cell(rate_idx),
            genre.to_string(),
            cell(type_idx).map(str::to_string),
            cell(plot_idx).map(str::to_string),
        ));
    }

    info!(path = %path.display(), movies = records.len(), "dataset loaded from cache");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, rating: Option<&str>, genre: &str) -> MovieRecord {
        MovieRecord::from_cells(
            title.to_string(),
            Some("2001".to_string()),
            rating,
            genre.to_string(),
            Some("Film".to_string()),
            Some("Film PG rated, 2h duration.".to_string()),
        )
    }

    #[test]
    fn cache_round_trips_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies_data.csv");

        let records = vec![
            record("A", Some("8.5"), "Drama, Action"),
            record("B", Some("No Rate"), "Comedy"),
        ];
        write_cache(&path, &records).unwrap();
        let loaded = load_cache(&path).unwrap();

        assert_eq!(loaded, records);
        assert_eq!(loaded[1].rating, None);
    }

    #[test]
    fn cache_without_canonical_headers_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies_data.csv");
        std::fs::write(&path, "Foo,Bar\n1,2\n").unwrap();

        let err = load_cache(&path).unwrap_err();
        assert!(matches!(err, LoadError::MissingRequiredColumns));
    }
}
