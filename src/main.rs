mod catalog;
mod checkout;
mod config;
mod feed;
mod images;
mod model;
mod normalizer;
mod search;
mod session;
mod utils;
mod view;

use config::load_config;
use feed::HttpFetcher;
use images::ImageTable;
use session::StoreSession;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file
    let config = match load_config("config.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    // Local cover-art fallback table, loaded once
    let images = ImageTable::load(&config.image_table_path);
    info!("Image table loaded: {} entries", images.len());

    let fetcher = HttpFetcher::new();
    let mut session = StoreSession::new(config, fetcher, images);

    info!("Fetching catalog feeds...");
    session.refresh().await;

    session.run().await;
}
