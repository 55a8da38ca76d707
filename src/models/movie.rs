use serde::{Deserialize, Serialize};

/// Default value for string columns that are absent from the source file
pub const UNKNOWN: &str = "Unknown";

/// Sentinel used by the source dataset for movies without a rating
pub const NO_RATE: &str = "No Rate";

/// Delimiter between genre tokens in the raw genre field
pub const GENRE_DELIMITER: char = ',';

/// One normalized row of the movie dataset.
///
/// All optional-column handling happens when the record is built; downstream
/// code never re-derives fields from raw cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    /// Movie or show title
    pub title: String,
    /// Release year or date, free-form ("Unknown" when the source had none)
    pub year: String,
    /// Rating on a 0-10 scale; None for unrated or unparseable values
    pub rating: Option<f64>,
    /// Raw comma-delimited genre field as it appeared in the source
    pub genre: String,
    /// Trimmed non-empty genre tokens, in source order
    pub genres: Vec<String>,
    /// Kind of content (e.g. "Film", "Series"); "Unknown" when absent
    pub media_type: String,
    /// Synthesized content summary, when the source carried enough detail
    pub plot: Option<String>,
}

impl MovieRecord {
    /// Builds a record from already-extracted cells, applying the
    /// normalization rules shared by the raw loader and the cache loader.
    pub fn from_cells(
        title: String,
        year: Option<String>,
        rating: Option<&str>,
        genre: String,
        media_type: Option<String>,
        plot: Option<String>,
    ) -> Self {
        let genres = split_genres(&genre);
        Self {
            title,
            year: year.unwrap_or_else(|| UNKNOWN.to_string()),
            rating: rating.and_then(parse_rating),
            genre,
            genres,
            media_type: media_type.unwrap_or_else(|| UNKNOWN.to_string()),
            plot,
        }
    }

    /// A movie counts as rated only with a parsed rating strictly above zero.
    pub fn is_rated(&self) -> bool {
        matches!(self.rating, Some(r) if r > 0.0)
    }

    /// Case-insensitive substring match against the raw genre field.
    ///
    /// Deliberately looser than token equality: "Sci" matches "Sci-Fi", and a
    /// multi-word genre string can match on any of its parts.
    pub fn matches_genre(&self, needle: &str) -> bool {
        self.genre
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

/// Parses a raw rating cell. The "No Rate" sentinel and anything that is not
/// a number both normalize to None rather than erroring.
pub fn parse_rating(raw: &str) -> Option<f64> {
    if raw == NO_RATE {
        return None;
    }
    raw.trim().parse::<f64>().ok()
}

/// Splits a raw genre field into trimmed, non-empty tokens, keeping order.
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(GENRE_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rate_sentinel_is_unrated() {
        let record = MovieRecord::from_cells(
            "X".to_string(),
            None,
            Some("No Rate"),
            "Action, Drama".to_string(),
            None,
            None,
        );
        assert_eq!(record.title, "X");
        assert_eq!(record.rating, None);
        assert_eq!(record.genres, vec!["Action", "Drama"]);
        assert!(!record.is_rated());
    }

    #[test]
    fn unparseable_rating_becomes_none() {
        assert_eq!(parse_rating("n/a"), None);
        assert_eq!(parse_rating(""), None);
        assert_eq!(parse_rating("8.2"), Some(8.2));
    }

    #[test]
    fn zero_rating_is_not_rated() {
        let record = MovieRecord::from_cells(
            "Zero".to_string(),
            None,
            Some("0"),
            "Drama".to_string(),
            None,
            None,
        );
        assert_eq!(record.rating, Some(0.0));
        assert!(!record.is_rated());
    }

    #[test]
    fn split_genres_trims_and_drops_empty_tokens() {
        assert_eq!(
            split_genres(" Action , , Sci-Fi,"),
            vec!["Action", "Sci-Fi"]
        );
        assert!(split_genres("").is_empty());
        assert!(split_genres(" , ,").is_empty());
    }

    #[test]
    fn genre_match_is_case_insensitive_substring() {
        let record = MovieRecord::from_cells(
            "X".to_string(),
            None,
            None,
            "Action, Sci-Fi".to_string(),
            None,
            None,
        );
        assert!(record.matches_genre("sci"));
        assert!(record.matches_genre("ACTION"));
        assert!(!record.matches_genre("Romance"));
    }

    #[test]
    fn absent_columns_default_to_unknown() {
        let record = MovieRecord::from_cells(
            "X".to_string(),
            None,
            None,
            "Drama".to_string(),
            None,
            None,
        );
        assert_eq!(record.year, UNKNOWN);
        assert_eq!(record.media_type, UNKNOWN);
        assert_eq!(record.plot, None);
    }
}
