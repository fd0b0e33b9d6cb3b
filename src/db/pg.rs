use sqlx::PgPool;

use super::{campaign, review, shop, Store, StoreError};
use crate::forms::Pagination;
use crate::models;

/// PostgreSQL-backed store.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Store for PgStore {
    async fn list_reviews(
        &self,
        shop_id: i32,
        pagination: &Pagination,
    ) -> Result<Vec<models::ReviewRow>, StoreError> {
        review::fetch_visible_by_shop(&self.pool, shop_id, pagination).await
    }

    async fn list_campaign_shops(
        &self,
        scope: &models::CampaignScope,
        limit: i64,
    ) -> Result<Vec<models::PromotedShop>, StoreError> {
        campaign::fetch_shops_in_scope(&self.pool, scope, limit).await
    }

    async fn list_shops(&self) -> Result<Vec<models::Shop>, StoreError> {
        shop::fetch_all(&self.pool).await
    }
}
