//! In-process store applying the same filters, ordering and limits as the
//! SQL queries. Test double for the service and HTTP test suites.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde_valid::Validate;
use tokio::sync::RwLock;

use super::{Store, StoreError};
use crate::forms::Pagination;
use crate::models;

#[derive(Default)]
struct Tables {
    shops: BTreeMap<i32, models::Shop>,
    users: BTreeMap<i32, models::User>,
    reviews: BTreeMap<i32, models::Review>,
    campaigns: BTreeMap<i32, models::ShopPromotionCampaign>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_shop(&self, shop: models::Shop) {
        self.tables.write().await.shops.insert(shop.id, shop);
    }

    pub async fn insert_user(&self, user: models::User) {
        self.tables.write().await.users.insert(user.id, user);
    }

    /// Validates rate/comment and both references, like the table constraints.
    pub async fn insert_review(&self, review: models::Review) -> Result<(), StoreError> {
        review.validate().map_err(|err| StoreError::Invalid {
            entity: "review",
            message: err.to_string(),
        })?;

        let mut tables = self.tables.write().await;
        if !tables.shops.contains_key(&review.shop_id) {
            return Err(StoreError::MissingReference {
                entity: "review",
                id: review.id,
                missing: "shop",
            });
        }
        if !tables.users.contains_key(&review.user_id) {
            return Err(StoreError::MissingReference {
                entity: "review",
                id: review.id,
                missing: "user",
            });
        }
        tables.reviews.insert(review.id, review);
        Ok(())
    }

    pub async fn insert_campaign(
        &self,
        campaign: models::ShopPromotionCampaign,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.shops.contains_key(&campaign.shop_id) {
            return Err(StoreError::MissingReference {
                entity: "campaign",
                id: campaign.id,
                missing: "shop",
            });
        }
        tables.campaigns.insert(campaign.id, campaign);
        Ok(())
    }

    pub async fn set_shop_banned(&self, shop_id: i32, banned: Option<bool>) {
        if let Some(shop) = self.tables.write().await.shops.get_mut(&shop_id) {
            shop.banned = banned;
        }
    }
}

fn clamp_to_usize(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn list_reviews(
        &self,
        shop_id: i32,
        pagination: &Pagination,
    ) -> Result<Vec<models::ReviewRow>, StoreError> {
        let tables = self.tables.read().await;

        let mut rows: Vec<models::ReviewRow> = tables
            .reviews
            .values()
            .filter(|review| review.shop_id == shop_id)
            .filter_map(|review| {
                let shop = tables.shops.get(&review.shop_id)?;
                let user = tables.users.get(&review.user_id)?;
                Some((review, shop, user))
            })
            .filter(|(_, shop, _)| !shop.is_banned())
            .map(|(review, shop, user)| models::ReviewRow {
                id: review.id,
                shop_id: review.shop_id,
                rate: review.rate,
                comment: review.comment.clone(),
                updated_at: review.updated_at,
                shop_banned: shop.banned,
                user_id: user.id,
                user_full_name: user.full_name.clone(),
                user_avatar: user.avatar.clone(),
            })
            .collect();

        rows.sort_by_key(|row| Reverse((row.updated_at, row.id)));

        Ok(rows
            .into_iter()
            .skip(clamp_to_usize(pagination.offset()))
            .take(clamp_to_usize(pagination.limit()))
            .collect())
    }

    async fn list_campaign_shops(
        &self,
        scope: &models::CampaignScope,
        limit: i64,
    ) -> Result<Vec<models::PromotedShop>, StoreError> {
        let tables = self.tables.read().await;

        Ok(tables
            .campaigns
            .values()
            .rev()
            .filter(|campaign| scope.matches(campaign))
            .filter_map(|campaign| {
                tables
                    .shops
                    .get(&campaign.shop_id)
                    .map(|shop| models::PromotedShop {
                        campaign_id: campaign.id,
                        shop: shop.clone(),
                    })
            })
            .take(clamp_to_usize(limit))
            .collect())
    }

    async fn list_shops(&self) -> Result<Vec<models::Shop>, StoreError> {
        Ok(self.tables.read().await.shops.values().cloned().collect())
    }
}
