//! Persistence store.
//!
//! Queries live in per-entity modules as free functions over `&PgPool`.
//! Services never call them directly; they go through the [`Store`] trait so
//! the same query semantics can be served from memory in tests.

pub mod campaign;
pub mod memory;
mod pg;
pub mod review;
pub mod shop;

pub use memory::MemoryStore;
pub use pg::PgStore;

use crate::forms::Pagination;
use crate::models;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("invalid {entity}: {message}")]
    Invalid {
        entity: &'static str,
        message: String,
    },
    #[error("{entity} {id} references missing {missing}")]
    MissingReference {
        entity: &'static str,
        id: i32,
        missing: &'static str,
    },
}

#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Reviews of a non-banned shop, newest `updated_at` first, paginated.
    async fn list_reviews(
        &self,
        shop_id: i32,
        pagination: &Pagination,
    ) -> Result<Vec<models::ReviewRow>, StoreError>;

    /// Campaigns matching `scope`, `id DESC`, at most `limit`, with their shop.
    async fn list_campaign_shops(
        &self,
        scope: &models::CampaignScope,
        limit: i64,
    ) -> Result<Vec<models::PromotedShop>, StoreError>;

    /// Every shop, `id ASC`.
    async fn list_shops(&self) -> Result<Vec<models::Shop>, StoreError>;
}
