// Typo-tolerant search over one catalog tab. Built whenever the item array
// changes, never per keystroke; queries only read.
use crate::model::CatalogItem;

use strsim::damerau_levenshtein;

pub const DEFAULT_THRESHOLD: f64 = 0.35;

struct Document {
    // lowercase title plus, for packs, each included-game line
    fields: Vec<String>,
}

pub struct SearchIndex {
    documents: Vec<Document>,
    threshold: f64,
}

impl SearchIndex {
    pub fn build(items: &[CatalogItem], threshold: f64) -> Self {
        let documents = items
            .iter()
            .map(|item| {
                let mut fields = vec![item.title.to_lowercase()];
                if let Some(included) = &item.included_titles {
                    fields.extend(included.iter().map(|title| title.to_lowercase()));
                }
                Document { fields }
            })
            .collect();

        Self { documents, threshold }
    }

    /// Indices of matching items, best score first, ties in input order.
    /// An empty query returns everything in input order.
    pub fn query(&self, query: &str) -> Vec<usize> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return (0..self.documents.len()).collect();
        }

        let mut scored: Vec<(usize, f64)> = self
            .documents
            .iter()
            .enumerate()
            .filter_map(|(index, document)| {
                let score = document
                    .fields
                    .iter()
                    .map(|field| field_score(&needle, field))
                    .fold(f64::INFINITY, f64::min);
                (score <= self.threshold).then_some((index, score))
            })
            .collect();

        // sort_by is stable, so equal scores keep feed order
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(index, _)| index).collect()
    }
}

/// Location-agnostic score in [0, 1]: 0.0 for a substring hit anywhere,
/// otherwise the best normalized edit distance over query-sized windows.
fn field_score(needle: &str, field: &str) -> f64 {
    if field.contains(needle) {
        return 0.0;
    }

    let needle_len = needle.chars().count();
    if needle_len == 0 {
        return 0.0;
    }

    let field_chars: Vec<char> = field.chars().collect();
    if field_chars.len() <= needle_len {
        return damerau_levenshtein(needle, field) as f64 / needle_len as f64;
    }

    let mut best = f64::INFINITY;
    for window in field_chars.windows(needle_len) {
        let candidate: String = window.iter().collect();
        let distance = damerau_levenshtein(needle, &candidate) as f64 / needle_len as f64;
        if distance < best {
            best = distance;
        }
    }
    best
}
