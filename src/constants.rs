//! Application constants and configuration

pub const PRODUCTS_URL: &str = "https://fakestoreapi.com/products";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Product Grid";

/// Grid dimensions are fixed for the lifetime of the window
pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 5;

/// The only message a failed catalog load ever shows
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch products";

/// Concurrent product image downloads
pub const IMAGE_FETCH_CONCURRENCY: usize = 8;
