use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;

use crate::db::{Store, StoreError};
use crate::models::{CampaignScope, CampaignType};
use crate::views;

/// Maximum number of shops in the top feed slideshow. Eligible campaigns past
/// this count (in `id DESC` order) are not shown.
pub const TOP_FEED_SLIDESHOW_PAGE_SIZE: i64 = 5;

/// Picks shops for paid promotional placements.
#[derive(Clone)]
pub struct PromotionSelectionService {
    store: Arc<dyn Store>,
}

impl PromotionSelectionService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn get_top_feed_slideshow(&self) -> Result<views::shop::ShopList, StoreError> {
        self.get_top_feed_slideshow_at(Utc::now()).await
    }

    /// Shops of the newest eligible slideshow campaigns at `at`, shuffled.
    /// The set is deterministic, the order changes on every call.
    #[tracing::instrument(name = "Select top feed slideshow.", skip(self))]
    pub async fn get_top_feed_slideshow_at(
        &self,
        at: DateTime<Utc>,
    ) -> Result<views::shop::ShopList, StoreError> {
        let scope = CampaignScope::valid_for(CampaignType::TopFeedSlideshow, at);
        let promoted = self
            .store
            .list_campaign_shops(&scope, TOP_FEED_SLIDESHOW_PAGE_SIZE)
            .await?;

        let mut shops: Vec<views::shop::Shop> = promoted
            .into_iter()
            .map(|promoted| promoted.shop.into())
            .collect();
        shops.shuffle(&mut rand::thread_rng());

        tracing::debug!("Selected {} promoted shops", shops.len());
        Ok(views::shop::ShopList { shops })
    }
}
