mod cache;
mod inspect;
mod normalizer;

pub use inspect::{summarize, DatasetSummary};
pub use normalizer::normalize_raw;

use std::path::Path;

use tracing::warn;

use crate::error::LoadError;
use crate::models::MovieTable;

/// Loads the movie dataset, preferring the advisory cache when it is
/// readable and falling back to normalizing the raw source otherwise.
///
/// A cache that is missing or fails to parse is never fatal; only the raw
/// source failing is. After a raw load the cache is rewritten best-effort.
pub fn load(
    dataset_path: impl AsRef<Path>,
    cache_path: impl AsRef<Path>,
) -> Result<MovieTable, LoadError> {
    let dataset_path = dataset_path.as_ref();
    let cache_path = cache_path.as_ref();

    if cache_path.exists() {
        match cache::load_cache(cache_path) {
            Ok(records) => return Ok(MovieTable::new(records)),
            Err(err) => {
                warn!(%err, path = %cache_path.display(), "cache unreadable, reprocessing raw dataset");
            }
        }
    }

    let records = normalizer::normalize_raw(dataset_path)?;
    if let Err(err) = cache::write_cache(cache_path, &records) {
        warn!(%err, path = %cache_path.display(), "failed to write dataset cache");
    }
    Ok(MovieTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "Name,Date,Rate,Genre,Type\n\
                       A,2001,8.5,\"Drama, Action\",Film\n\
                       B,2005,No Rate,Comedy,Film\n";

    #[test]
    fn loads_raw_dataset_and_writes_cache() {
        let dir = tempfile::tempdir().unwrap();
        let raw_path = dir.path().join("imdb_movies.csv");
        let cache_path = dir.path().join("movies_data.csv");
        std::fs::write(&raw_path, RAW).unwrap();

        let table = load(&raw_path, &cache_path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.genres(), ["Action", "Comedy", "Drama"]);
        assert!(cache_path.exists());
    }

    #[test]
    fn prefers_readable_cache_over_raw_source() {
        let dir = tempfile::tempdir().unwrap();
        let raw_path = dir.path().join("imdb_movies.csv");
        let cache_path = dir.path().join("movies_data.csv");
        std::fs::write(&raw_path, RAW).unwrap();
        std::fs::write(
            &cache_path,
            "Title,Year,Rate,Genre,Type,Plot\nCached,1999,9,Noir,Film,\n",
        )
        .unwrap();

        let table = load(&raw_path, &cache_path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].title, "Cached");
    }

    #[test]
    fn corrupt_cache_falls_back_to_raw_source() {
        let dir = tempfile::tempdir().unwrap();
        let raw_path = dir.path().join("imdb_movies.csv");
        let cache_path = dir.path().join("movies_data.csv");
        std::fs::write(&raw_path, RAW).unwrap();
        std::fs::write(&cache_path, "Foo,Bar\n1,2\n").unwrap();

        let table = load(&raw_path, &cache_path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].title, "A");
    }

    #[test]
    fn missing_raw_source_without_cache_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(
            dir.path().join("imdb_movies.csv"),
            dir.path().join("movies_data.csv"),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[test]
    fn normalized_genres_match_direct_derivation_from_raw_rows() {
        let dir = tempfile::tempdir().unwrap();
        let raw_path = dir.path().join("imdb_movies.csv");
        std::fs::write(&raw_path, RAW).unwrap();

        let table = load(&raw_path, dir.path().join("movies_data.csv")).unwrap();

        // Same split/trim/dedupe/sort rule applied straight to the raw cells.
        let mut direct: Vec<String> = ["Drama, Action", "Comedy"]
            .iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        direct.sort();
        direct.dedup();

        assert_eq!(table.genres(), direct.as_slice());
    }
}
