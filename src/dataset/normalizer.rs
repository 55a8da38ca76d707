use std::path::Path;

use csv::StringRecord;
use tracing::info;

use crate::error::LoadError;
use crate::models::movie::{MovieRecord, UNKNOWN};

/// Source column names recognized in the raw dataset. Presence varies by
/// file; everything except a title/genre candidate is optional.
const COL_NAME: &str = "Name";
const COL_DATE: &str = "Date";
const COL_RATE: &str = "Rate";
const COL_GENRE: &str = "Genre";
const COL_TYPE: &str = "Type";
const COL_DURATION: &str = "Duration";
const COL_CERTIFICATE: &str = "Certificate";
const COL_VIOLENCE: &str = "Violence";
const COL_FRIGHTENING: &str = "Frightening";

/// Header positions of the recognized source columns
struct Columns {
    name: Option<usize>,
    date: Option<usize>,
    rate: Option<usize>,
    genre: Option<usize>,
    media_type: Option<usize>,
    duration: Option<usize>,
    certificate: Option<usize>,
    violence: Option<usize>,
    frightening: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h == name);
        Self {
            name: position(COL_NAME),
            date: position(COL_DATE),
            rate: position(COL_RATE),
            genre: position(COL_GENRE),
            media_type: position(COL_TYPE),
            duration: position(COL_DURATION),
            certificate: position(COL_CERTIFICATE),
            violence: position(COL_VIOLENCE),
            frightening: position(COL_FRIGHTENING),
        }
    }
}

/// Returns the cell at `index`, treating empty strings as absent values.
fn cell<'a>(row: &'a StringRecord, index: Option<usize>) -> Option<&'a str> {
    index
        .and_then(|i| row.get(i))
        .filter(|value| !value.is_empty())
}

/// Normalizes the raw dataset into canonical records.
///
/// Column mapping: title←Name, year←Date, rating←Rate, genre←Genre,
/// type←Type. A column that is absent from the file defaults every row
/// ("Unknown" for strings, no rating); a row whose title, genre, or rating
/// cell is empty while the column exists is dropped.
pub fn normalize_raw(path: &Path) -> Result<Vec<MovieRecord>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    info!(path = %path.display(), "processing raw dataset");

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let columns = Columns::locate(&headers);

    if columns.name.is_none() && columns.genre.is_none() {
        return Err(LoadError::MissingRequiredColumns);
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.records() {
        let row = row?;

        // Title and genre survive column absence via defaults, but an empty
        // cell in a present column drops the row. An empty rating cell drops
        // the row too, while a missing Rate column is tolerated.
        let title = match columns.name {
            Some(_) => match cell(&row, columns.name) {
                Some(value) => value.to_string(),
                None => {
                    dropped += 1;
                    continue;
                }
            },
            None => UNKNOWN.to_string(),
        };
        let genre = match columns.genre {
            Some(_) => match cell(&row, columns.genre) {
                Some(value) => value.to_string(),
                None => {
                    dropped += 1;
                    continue;
                }
            },
            None => UNKNOWN.to_string(),
        };
        let rating = match columns.rate {
            Some(_) => match cell(&row, columns.rate) {
                Some(value) => Some(value),
                None => {
                    dropped += 1;
                    continue;
                }
            },
            None => None,
        };

        let media_type = cell(&row, columns.media_type).map(str::to_string);
        let plot = synthesize_plot(&columns, &row, media_type.as_deref().unwrap_or(UNKNOWN));

        records.push(MovieRecord::from_cells(
            title,
            cell(&row, columns.date).map(str::to_string),
            rating,
            genre,
            media_type,
            plot,
        ));
    }

    info!(
        movies = records.len(),
        dropped, "raw dataset normalized"
    );
    Ok(records)
}

/// Builds the content summary for one row.
///
/// Only produced when the file carries both Duration and Certificate columns
/// and the row has values for both; content-warning columns contribute only
/// when present and non-empty, so nothing renders as a placeholder.
fn synthesize_plot(columns: &Columns, row: &StringRecord, media_type: &str) -> Option<String> {
    if columns.duration.is_none() || columns.certificate.is_none() {
        return None;
    }
    let certificate = cell(row, columns.certificate)?;
    let duration = cell(row, columns.duration)?;

    let mut plot = format!("{media_type} {certificate} rated, {duration} duration.");

    let mut warnings = Vec::new();
    if let Some(violence) = cell(row, columns.violence) {
        warnings.push(format!("Violence: {violence}"));
    }
    if let Some(frightening) = cell(row, columns.frightening) {
        warnings.push(format!("Frightening: {frightening}"));
    }
    if !warnings.is_empty() {
        plot.push_str(" Content warnings: ");
        plot.push_str(&warnings.join(" "));
    }

    Some(plot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn maps_source_columns_to_canonical_fields() {
        let file = write_csv(
            "Name,Date,Rate,Genre,Type\n\
             The Deep,2003,7.9,\"Drama, Thriller\",Film\n",
        );
        let records = normalize_raw(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "The Deep");
        assert_eq!(records[0].year, "2003");
        assert_eq!(records[0].rating, Some(7.9));
        assert_eq!(records[0].genres, vec!["Drama", "Thriller"]);
        assert_eq!(records[0].media_type, "Film");
        assert_eq!(records[0].plot, None);
    }

    #[test]
    fn no_rate_sentinel_survives_as_unrated() {
        let file = write_csv("Name,Rate,Genre\nX,No Rate,\"Action, Drama\"\n");
        let records = normalize_raw(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rating, None);
        assert_eq!(records[0].genres, vec!["Action", "Drama"]);
    }

    #[test]
    fn rows_with_empty_required_cells_are_dropped() {
        let file = write_csv(
            "Name,Rate,Genre\n\
             ,8.0,Drama\n\
             NoGenre,8.0,\n\
             NoRateCell,,Drama\n\
             Kept,8.0,Drama\n",
        );
        let records = normalize_raw(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Kept");
    }

    #[test]
    fn absent_rate_column_is_tolerated() {
        let file = write_csv("Name,Genre\nX,Drama\n");
        let records = normalize_raw(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rating, None);
    }

    #[test]
    fn absent_name_column_defaults_titles_to_unknown() {
        let file = write_csv("Genre,Rate\nDrama,8.0\n");
        let records = normalize_raw(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, UNKNOWN);
    }

    #[test]
    fn missing_both_name_and_genre_columns_is_fatal() {
        let file = write_csv("Rate,Type\n8.0,Film\n");
        let err = normalize_raw(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingRequiredColumns));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = normalize_raw(Path::new("does_not_exist.csv")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[test]
    fn plot_combines_type_certificate_duration_and_warnings() {
        let file = write_csv(
            "Name,Rate,Genre,Type,Duration,Certificate,Violence,Frightening\n\
             X,8.0,Horror,Film,2h,R,Severe,Severe\n\
             Y,7.0,Comedy,Film,1h30m,PG,,\n",
        );
        let records = normalize_raw(file.path()).unwrap();
        assert_eq!(
            records[0].plot.as_deref(),
            Some("Film R rated, 2h duration. Content warnings: Violence: Severe Frightening: Severe")
        );
        assert_eq!(
            records[1].plot.as_deref(),
            Some("Film PG rated, 1h30m duration.")
        );
    }

    #[test]
    fn plot_is_skipped_without_duration_and_certificate_columns() {
        let file = write_csv("Name,Rate,Genre,Duration\nX,8.0,Drama,2h\n");
        let records = normalize_raw(file.path()).unwrap();
        assert_eq!(records[0].plot, None);
    }
}
