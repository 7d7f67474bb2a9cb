//! Catalog loading

use super::App;
use crate::constants::*;
use crate::types::{ImageStatus, LoadState, Product};
use eframe::egui;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed catalog: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type CatalogResult = Result<Vec<Product>, FetchError>;

/// Single GET of the product catalog
pub async fn fetch_products(client: &reqwest::Client, url: &str) -> CatalogResult {
    let response = client.get(url).send().await?;
    let status = response.status();
    debug!(%status, "Catalog response received");
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body = response.bytes().await?;
    parse_products(&body)
}

pub fn parse_products(body: &[u8]) -> CatalogResult {
    Ok(serde_json::from_slice(body)?)
}

/// Turn the fetch outcome into the state the window shows.
/// Failures keep no partial data and always show the same message.
pub fn resolve_catalog(result: CatalogResult) -> (LoadState, Vec<Product>) {
    match result {
        Ok(products) => {
            info!(count = products.len(), "Catalog loaded");
            (LoadState::Loaded, products)
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch products");
            (LoadState::Failed(FETCH_ERROR_MESSAGE.to_string()), Vec::new())
        }
    }
}

async fn fetch_image(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    Ok(response.bytes().await?.to_vec())
}

impl App {
    /// Kick off the one-shot catalog request. Subsequent calls do nothing.
    pub fn start_catalog_load(&mut self, ctx: &egui::Context) {
        if self.load_started {
            return;
        }
        self.load_started = true;

        let (tx, rx) = oneshot::channel();
        self.catalog_rx = Some(rx);

        let client = self.client.clone();
        let url = self.catalog_url.clone();
        let ctx = ctx.clone();
        debug!(url = %url, "Fetching catalog");

        self.runtime.spawn(async move {
            let result = fetch_products(&client, &url).await;
            // Receiver only goes away when the window closes
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Check for the catalog result; installs it exactly once.
    pub fn poll_catalog(&mut self, ctx: &egui::Context) {
        let Some(rx) = self.catalog_rx.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => {
                warn!("Catalog task ended without a result");
                self.catalog_rx = None;
                self.load_state = LoadState::Failed(FETCH_ERROR_MESSAGE.to_string());
                return;
            }
        };
        self.catalog_rx = None;

        let (state, products) = resolve_catalog(result);
        self.load_state = state;
        self.products = products;
        if self.load_state == LoadState::Loaded {
            self.grid.reset();
            self.start_image_prefetch(ctx);
        }
    }

    fn start_image_prefetch(&mut self, ctx: &egui::Context) {
        let jobs: Vec<(u64, String)> = self
            .products
            .iter()
            .map(|p| (p.id, p.image.clone()))
            .collect();

        if let Ok(mut images) = self.images.lock() {
            for (id, _) in &jobs {
                images.insert(*id, ImageStatus::Pending);
            }
        }

        debug!(count = jobs.len(), "Starting image prefetch");

        let client = self.client.clone();
        let images = Arc::clone(&self.images);
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            futures::stream::iter(jobs)
                .map(|(id, url)| {
                    let client = client.clone();
                    async move {
                        let status = match fetch_image(&client, &url).await {
                            Ok(bytes) => ImageStatus::Ready(Arc::new(bytes)),
                            Err(e) => {
                                warn!(product = id, url = %url, error = %e, "Image fetch failed");
                                ImageStatus::Failed
                            }
                        };
                        (id, status)
                    }
                })
                .buffer_unordered(IMAGE_FETCH_CONCURRENCY)
                .for_each(|(id, status)| {
                    if let Ok(mut images) = images.lock() {
                        images.insert(id, status);
                    }
                    ctx.request_repaint();
                    futures::future::ready(())
                })
                .await;
        });
    }
}
