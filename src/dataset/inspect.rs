use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::Path;

use crate::error::LoadError;
use crate::models::movie::split_genres;

/// How many of the most frequent genres the report lists
const TOP_GENRES: usize = 10;

/// Structure report over a raw dataset file, for verifying a dataset before
/// pointing the bot at it.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    /// Data rows in the file (header excluded)
    pub rows: usize,
    /// Header names in file order
    pub columns: Vec<String>,
    /// Per-column count of empty cells, columns with none omitted
    pub missing: Vec<(String, usize)>,
    /// Sorted unique genre tokens, when the file has a Genre column
    pub genres: Vec<String>,
    /// Most frequent genre tokens with their occurrence counts
    pub top_genres: Vec<(String, usize)>,
}

/// Scans a raw dataset file and reports its shape, missing values, and
/// genre distribution.
pub fn summarize(path: &Path) -> Result<DatasetSummary, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let genre_idx = headers.iter().position(|h| h == "Genre");

    let mut rows = 0usize;
    let mut missing = vec![0usize; columns.len()];
    let mut genre_counts: HashMap<String, usize> = HashMap::new();

    for row in reader.records() {
        let row = row?;
        rows += 1;
        for (i, count) in missing.iter_mut().enumerate() {
            if row.get(i).map_or(true, str::is_empty) {
                *count += 1;
            }
        }
        if let Some(raw) = genre_idx.and_then(|i| row.get(i)) {
            for token in split_genres(raw) {
                *genre_counts.entry(token).or_insert(0) += 1;
            }
        }
    }

    let genres: Vec<String> = genre_counts
        .keys()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut top_genres: Vec<(String, usize)> = genre_counts.into_iter().collect();
    top_genres.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_genres.truncate(TOP_GENRES);

    let missing = columns
        .iter()
        .cloned()
        .zip(missing)
        .filter(|(_, count)| *count > 0)
        .collect();

    Ok(DatasetSummary {
        rows,
        columns,
        missing,
        genres,
        top_genres,
    })
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows: {}", self.rows)?;
        writeln!(f, "Columns: {}", self.columns.join(", "))?;

        writeln!(f, "Missing values per column:")?;
        if self.missing.is_empty() {
            writeln!(f, "  none")?;
        }
        for (column, count) in &self.missing {
            writeln!(f, "  {column}: {count} missing values")?;
        }

        if !self.genres.is_empty() {
            writeln!(f, "Unique genres found: {}", self.genres.join(", "))?;
            writeln!(f, "Top genres by frequency:")?;
            for (genre, count) in &self.top_genres {
                writeln!(f, "  {genre}: {count}")?;
            }
        }
        Ok(())
    }
}
