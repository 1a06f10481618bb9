// Spreadsheet exports are messy: header names drift in casing and stray
// whitespace between edits, and deleted products leave all-empty rows.
// FeedRow absorbs both so the normalizer can ask for canonical columns.
use crate::model::ParseError;

use csv::ReaderBuilder;

/// One data row of a feed, keyed by the header row.
#[derive(Debug, Clone)]
pub struct FeedRow {
    columns: Vec<(String, String)>,
}

impl FeedRow {
    /// Resolves a column case-insensitively and whitespace-tolerantly.
    pub fn get(&self, column: &str) -> Option<&str> {
        let wanted = column.trim().to_lowercase();
        self.columns
            .iter()
            .find(|(header, _)| header.trim().to_lowercase() == wanted)
            .map(|(_, value)| value.as_str())
    }

    fn is_blank(&self) -> bool {
        self.columns.iter().all(|(_, value)| value.trim().is_empty())
    }
}

/// Parses a CSV export into header-keyed rows. Empty lines are skipped and
/// ragged records are tolerated; a malformed file is a single hard error.
pub fn parse_rows(text: &str) -> Result<Vec<FeedRow>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ParseError::Csv(e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ParseError::Csv(e.to_string()))?;
        let row = FeedRow {
            columns: headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    (header.to_string(), record.get(i).unwrap_or_default().to_string())
                })
                .collect(),
        };
        if !row.is_blank() {
            rows.push(row);
        }
    }

    Ok(rows)
}
