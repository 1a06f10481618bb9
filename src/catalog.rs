// In-memory catalog for one refresh cycle: the two item arrays, their
// search indices and the feed readiness status.
use crate::model::{CatalogItem, FeedStatus, StoreTab};
use crate::search::SearchIndex;
use crate::view::ViewState;

/// On-offer units shown on the home surface.
pub const FLASH_OFFER_LIMIT: usize = 8;
/// Packs shown on the home surface.
pub const FEATURED_PACK_LIMIT: usize = 6;

pub struct Catalog {
    units: Vec<CatalogItem>,
    packs: Vec<CatalogItem>,
    units_index: SearchIndex,
    packs_index: SearchIndex,
    pub status: FeedStatus,
}

impl Catalog {
    pub fn new(
        units: Vec<CatalogItem>,
        packs: Vec<CatalogItem>,
        status: FeedStatus,
        search_threshold: f64,
    ) -> Self {
        let units_index = SearchIndex::build(&units, search_threshold);
        let packs_index = SearchIndex::build(&packs, search_threshold);
        Self {
            units,
            packs,
            units_index,
            packs_index,
            status,
        }
    }

    pub fn empty(search_threshold: f64) -> Self {
        Self::new(Vec::new(), Vec::new(), FeedStatus::default(), search_threshold)
    }

    pub fn items(&self, tab: StoreTab) -> &[CatalogItem] {
        match tab {
            StoreTab::Units => &self.units,
            StoreTab::Packs => &self.packs,
        }
    }

    fn index(&self, tab: StoreTab) -> &SearchIndex {
        match tab {
            StoreTab::Units => &self.units_index,
            StoreTab::Packs => &self.packs_index,
        }
    }

    /// The tab's items after the committed filter and the offers-only
    /// toggle. Search results come back in relevance order; the offers
    /// toggle only means something on the units tab.
    pub fn filtered(&self, view: &ViewState) -> Vec<&CatalogItem> {
        let items = self.items(view.active_tab);

        let mut filtered: Vec<&CatalogItem> = if view.committed_filter.is_empty() {
            items.iter().collect()
        } else {
            self.index(view.active_tab)
                .query(&view.committed_filter)
                .into_iter()
                .map(|index| &items[index])
                .collect()
        };

        if view.offers_only && view.active_tab == StoreTab::Units {
            filtered.retain(|item| item.on_offer());
        }

        filtered
    }

    /// The filtered list cut down to the current page window.
    pub fn visible(&self, view: &ViewState) -> Vec<&CatalogItem> {
        let mut filtered = self.filtered(view);
        filtered.truncate(view.visible_count);
        filtered
    }

    pub fn flash_offers(&self) -> Vec<&CatalogItem> {
        self.units
            .iter()
            .filter(|item| item.on_offer())
            .take(FLASH_OFFER_LIMIT)
            .collect()
    }

    pub fn featured_packs(&self) -> &[CatalogItem] {
        &self.packs[..self.packs.len().min(FEATURED_PACK_LIMIT)]
    }

    pub fn new_pack_count(&self) -> usize {
        self.packs.iter().filter(|pack| pack.is_new).count()
    }
}
