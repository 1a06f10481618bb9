// Core structs: CatalogItem, StoreTab, FeedStatus and the error taxonomy.
use thiserror::Error;

/// One entry of the storefront catalog, unit game or pack alike.
///
/// Constructed once per feed refresh by the normalizer and immutable from
/// then on. Prices are whole pesos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
    pub price: u32,
    /// Regular price, present only while a discount applies. Always >= `price`.
    pub original_price: Option<u32>,
    pub is_pack: bool,
    pub is_new: bool,
    pub badge: Option<String>,
    /// Games bundled into a pack. `Some` is always non-empty.
    pub included_titles: Option<Vec<String>>,
}

impl CatalogItem {
    pub fn on_offer(&self) -> bool {
        self.badge.is_some()
    }
}

/// The two catalog tabs a visitor can browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreTab {
    Units,
    Packs,
}

impl StoreTab {
    pub fn label(self) -> &'static str {
        match self {
            StoreTab::Units => "Juegos Unitarios",
            StoreTab::Packs => "Pack de Juegos",
        }
    }
}

/// Per-feed completion flags. "Ready" is their AND, regardless of which
/// feed finished first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedStatus {
    pub units_loaded: bool,
    pub packs_loaded: bool,
}

impl FeedStatus {
    pub fn ready(self) -> bool {
        self.units_loaded && self.packs_loaded
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("feed responded with status {0}")]
    InvalidResponse(u16),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("CSV error: {0}")]
    Csv(String),
}
