use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub store_name: String,
    pub whatsapp_number: String,
    pub units_feed_url: String,
    pub packs_feed_url: String,
    /// Days a pack counts as newly added after its feed date.
    #[serde(default = "default_recent_days")]
    pub recent_days: i64,
    /// Edit-distance tolerance for the fuzzy search, 0.0 = exact only.
    #[serde(default = "default_search_threshold")]
    pub search_threshold: f64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_image_table_path")]
    pub image_table_path: String,
}

fn default_recent_days() -> i64 {
    5
}

fn default_search_threshold() -> f64 {
    crate::search::DEFAULT_THRESHOLD
}

fn default_page_size() -> usize {
    20
}

fn default_image_table_path() -> String {
    "imagenes.json".to_string()
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
