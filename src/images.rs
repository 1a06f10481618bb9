// Local fallback table for cover art: the feeds frequently ship rows without
// an image column, but the titles are stable enough to match by name.
use crate::utils::clean_key;
use serde::Deserialize;
use std::fs;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
pub struct ImageEntry {
    pub name: String,
    pub url: String,
}

/// Read-only title -> cover URL table, loaded once per process.
#[derive(Debug, Default)]
pub struct ImageTable {
    entries: Vec<ImageEntry>,
}

impl ImageTable {
    pub fn from_entries(entries: Vec<ImageEntry>) -> Self {
        Self { entries }
    }

    /// Loads the table from a JSON asset. A missing or broken file is not an
    /// error: the resolver just never matches and cards render without art.
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Vec<ImageEntry>>(&raw) {
                Ok(entries) => Self::from_entries(entries),
                Err(e) => {
                    warn!("Image table {} is not valid JSON: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Image table {} not readable: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// First entry whose normalized name equals the normalized title.
    /// Linear scan; the table stays small.
    pub fn resolve(&self, title: &str) -> Option<&str> {
        if title.is_empty() {
            return None;
        }
        let key = clean_key(title);
        if key.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| clean_key(&entry.name) == key)
            .map(|entry| entry.url.as_str())
    }
}
