use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::movie::MovieRecord;

/// The normalized, immutable in-memory dataset.
///
/// Built once at load time and shared read-only by every handler; the genre
/// vocabulary is derived at construction so it always matches the records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieTable {
    records: Vec<MovieRecord>,
    genres: Vec<String>,
}

impl MovieTable {
    pub fn new(records: Vec<MovieRecord>) -> Self {
        let genres = derive_genres(&records);
        Self { records, genres }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Records in source order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Sorted, deduplicated genre vocabulary
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Collects every genre token across all records into a sorted, deduplicated
/// vocabulary (ascending case-sensitive lexicographic order).
pub fn derive_genres(records: &[MovieRecord]) -> Vec<String> {
    let mut vocabulary = BTreeSet::new();
    for record in records {
        for token in &record.genres {
            vocabulary.insert(token.clone());
        }
    }
    vocabulary.into_iter().collect()
}
