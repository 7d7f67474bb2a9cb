//! Common types and data structures

use serde::Deserialize;

/// Catalog entry as returned by the products endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// Catalog load lifecycle. Resolves exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Image fetch outcome for a single product, keyed by product id
#[derive(Clone)]
pub enum ImageStatus {
    Pending,
    Ready(std::sync::Arc<Vec<u8>>),
    Failed,
}
