// Interactive storefront session: owns the catalog and the view state,
// reads commands from stdin and renders pages in between.

pub mod command_handler;

use crate::catalog::Catalog;
use crate::checkout;
use crate::config::AppConfig;
use crate::feed::{FeedFetcher, HttpFetcher, parse_rows};
use crate::images::ImageTable;
use crate::model::{CatalogItem, FeedStatus, StoreTab};
use crate::normalizer::{normalize_packs, normalize_units};
use crate::view::ViewState;

use chrono::Local;
use futures::future;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

pub struct StoreSession {
    pub config: Arc<AppConfig>,
    pub images: ImageTable,
    pub catalog: Catalog,
    pub view: ViewState,
    fetcher: HttpFetcher,
}

impl StoreSession {
    pub fn new(config: Arc<AppConfig>, fetcher: HttpFetcher, images: ImageTable) -> Self {
        let catalog = Catalog::empty(config.search_threshold);
        let view = ViewState::new(config.page_size);
        Self {
            config,
            images,
            catalog,
            view,
            fetcher,
        }
    }

    /// Fetches both feeds, rebuilds the catalog and resets the view.
    pub async fn refresh(&mut self) {
        self.catalog = load_catalog(&self.fetcher, &self.config, &self.images).await;
        self.view = ViewState::new(self.config.page_size);
        info!(
            "Catalog refreshed: {} juegos, {} packs, ready={}",
            self.catalog.items(StoreTab::Units).len(),
            self.catalog.items(StoreTab::Packs).len(),
            self.catalog.status.ready()
        );
    }

    pub fn filtered_len(&self) -> usize {
        self.catalog.filtered(&self.view).len()
    }

    /// Reads commands from stdin until `/salir` or end of input.
    pub async fn run(&mut self) {
        println!("🕹  {} — catálogo interactivo", self.config.store_name);
        println!("Escribe /help para ver los comandos.\n");
        self.render_home();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let Ok(Some(line)) = lines.next_line().await else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !command_handler::handle_command(line, self).await {
                break;
            }
        }
        println!("👋 Hasta pronto!");
    }

    pub fn render_home(&self) {
        if !self.catalog.status.ready() {
            println!("⏳ Cargando catálogo... algún feed no respondió. /refresh para reintentar.");
            return;
        }

        println!("⚡ Estado de la Tienda");
        println!(
            "   🎮 Juegos unitarios: {}",
            self.catalog.items(StoreTab::Units).len()
        );
        println!(
            "   📦 Packs totales: {}",
            self.catalog.items(StoreTab::Packs).len()
        );

        let new_packs = self.catalog.new_pack_count();
        if new_packs > 0 {
            println!(
                "📣 ¡Nuevos Packs Disponibles! {new_packs} agregados al catálogo — /packs para verlos"
            );
        }

        let offers = self.catalog.flash_offers();
        if !offers.is_empty() {
            println!("\n🔥 Ofertas Flash");
            for item in offers {
                println!("   {}", item_summary(item));
            }
        }

        let featured = self.catalog.featured_packs();
        if !featured.is_empty() {
            println!("\n🎁 Packs Imperdibles");
            for item in featured {
                println!("   {}", item_summary(item));
            }
        }
    }

    pub fn render_page(&self) {
        if !self.catalog.status.ready() {
            println!("⏳ Cargando catálogo... algún feed no respondió. /refresh para reintentar.");
            return;
        }

        let filtered_len = self.filtered_len();
        let visible = self.catalog.visible(&self.view);

        let scope = if self.view.offers_only && self.view.active_tab == StoreTab::Units {
            "🔥 Solo Ofertas"
        } else {
            "Todos"
        };
        println!(
            "🛒 {} — {scope} ({filtered_len} resultados, mostrando {})",
            self.view.active_tab.label(),
            visible.len()
        );

        if visible.is_empty() {
            println!("   No encontramos juegos... /buscar sin texto muestra todo.");
            return;
        }

        for (position, item) in visible.iter().enumerate() {
            println!("   {}. {}", position + 1, item_summary(item));
        }
        if visible.len() < filtered_len {
            println!("   … /mas para ver más, /comprar N para pedir por WhatsApp");
        } else {
            println!("   /comprar N para pedir por WhatsApp");
        }
    }

    pub fn render_status(&self) {
        let status = self.catalog.status;
        println!("📊 Estado");
        println!("   Feed juegos: {}", if status.units_loaded { "✅" } else { "❌" });
        println!("   Feed packs:  {}", if status.packs_loaded { "✅" } else { "❌" });
        println!(
            "   Juegos: {} | Packs: {} | Packs nuevos: {}",
            self.catalog.items(StoreTab::Units).len(),
            self.catalog.items(StoreTab::Packs).len(),
            self.catalog.new_pack_count()
        );
    }

    /// `/comprar N`: builds the WhatsApp link for the Nth visible item.
    pub fn buy(&self, position: usize) {
        let visible = self.catalog.visible(&self.view);
        match position.checked_sub(1).and_then(|index| visible.get(index)) {
            Some(item) => {
                let link = checkout::checkout_link(
                    item,
                    &self.config.store_name,
                    &self.config.whatsapp_number,
                );
                println!("🟢 Pedido listo — abre este enlace para coordinar por WhatsApp:");
                println!("{link}");
            }
            None => println!("🤖 No hay un ítem {position} en el listado visible."),
        }
    }
}

fn item_summary(item: &CatalogItem) -> String {
    let mut line = format!("{} — ${}", item.title, checkout::format_clp(item.price));
    if let Some(original) = item.original_price {
        line.push_str(&format!(" (antes ${})", checkout::format_clp(original)));
    }
    if let Some(games) = &item.included_titles {
        line.push_str(&format!(" ({} juegos)", games.len()));
    }
    if let Some(badge) = &item.badge {
        line.push_str(&format!(" [{badge}]"));
    }
    line
}

/// Fetches both feeds concurrently and joins them into one catalog.
/// Readiness is the AND of the two explicit completion flags; a failed feed
/// contributes nothing and leaves its flag down.
pub async fn load_catalog(
    fetcher: &dyn FeedFetcher,
    config: &AppConfig,
    images: &ImageTable,
) -> Catalog {
    let (units_result, packs_result) = future::join(
        fetcher.fetch_csv(&config.units_feed_url),
        fetcher.fetch_csv(&config.packs_feed_url),
    )
    .await;

    let mut status = FeedStatus::default();
    let today = Local::now().date_naive();

    let units = match units_result {
        Ok(text) => match parse_rows(&text) {
            Ok(rows) => {
                status.units_loaded = true;
                normalize_units(&rows, images)
            }
            Err(e) => {
                error!("Units feed unreadable: {}", e);
                Vec::new()
            }
        },
        Err(e) => {
            error!("Units feed fetch failed: {}", e);
            Vec::new()
        }
    };

    let packs = match packs_result {
        Ok(text) => match parse_rows(&text) {
            Ok(rows) => {
                status.packs_loaded = true;
                normalize_packs(&rows, images, today, config.recent_days)
            }
            Err(e) => {
                error!("Packs feed unreadable: {}", e);
                Vec::new()
            }
        },
        Err(e) => {
            error!("Packs feed fetch failed: {}", e);
            Vec::new()
        }
    };

    Catalog::new(units, packs, status, config.search_threshold)
}
