//! App module - contains the main application state and logic

mod images;
mod loader;
mod views;

use crate::grid::GridController;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use loader::CatalogResult;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) client: reqwest::Client,
    pub(crate) catalog_url: String,
    // Catalog
    pub(crate) load_started: bool,
    pub(crate) load_state: LoadState,
    pub(crate) catalog_rx: Option<oneshot::Receiver<CatalogResult>>,
    pub(crate) products: Vec<Product>,
    // Grid interaction
    pub(crate) grid: GridController,
    // Images (product id -> download status / decoded texture)
    pub(crate) images: Arc<Mutex<HashMap<u64, ImageStatus>>>,
    pub(crate) textures: HashMap<u64, Option<egui::TextureHandle>>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Ok(Self {
            runtime: tokio::runtime::Runtime::new()?,
            client: reqwest::Client::new(),
            catalog_url: settings.catalog_url,
            load_started: false,
            load_state: LoadState::Loading,
            catalog_rx: None,
            products: Vec::new(),
            grid: GridController::new(),
            images: Arc::new(Mutex::new(HashMap::new())),
            textures: HashMap::new(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            catalog_url: self.catalog_url.clone(),
        };
        settings.save(&self.data_dir);
    }
}
