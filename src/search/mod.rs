//! Secondary search index for shops.
//!
//! Every shop maps to exactly one document keyed by the shop id. Writes go
//! through the [`SearchIndex`] trait so the reindex pool can be exercised
//! without an index server.

pub mod client;
pub mod errors;
pub mod reindex;

pub use client::HttpSearchIndex;
pub use errors::SearchError;
pub use reindex::{reindex_all, ReindexReport};

use crate::models;
use serde::Serialize;

/// Indexed representation of a shop.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopDocument {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: models::ShopStatus,
    pub average_rating: Option<f64>,
}

impl From<&models::Shop> for ShopDocument {
    fn from(shop: &models::Shop) -> Self {
        Self {
            id: shop.id,
            name: shop.name.clone(),
            description: shop.description.clone(),
            status: shop.status,
            average_rating: shop.average_rating,
        }
    }
}

#[async_trait::async_trait]
pub trait SearchIndex: Send + Sync {
    /// Create or replace the document of one shop.
    async fn upsert_document(&self, document: &ShopDocument) -> Result<(), SearchError>;
}
