use std::sync::Arc;

use crate::db::{Store, StoreError};
use crate::forms::Pagination;
use crate::views;

/// Paginated review listing for a shop.
#[derive(Clone)]
pub struct ReviewQueryService {
    store: Arc<dyn Store>,
}

impl ReviewQueryService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Reviews of `shop_id`, most recently updated first. Reviews of a banned
    /// shop and unknown shops both produce an empty page.
    #[tracing::instrument(name = "List shop reviews.", skip(self))]
    pub async fn list_reviews(
        &self,
        shop_id: i32,
        pagination: Pagination,
    ) -> Result<views::review::ReviewList, StoreError> {
        let rows = self.store.list_reviews(shop_id, &pagination).await?;
        tracing::debug!("Fetched {} reviews", rows.len());

        Ok(views::review::ReviewList {
            reviews: rows.into_iter().map(Into::into).collect(),
        })
    }
}
