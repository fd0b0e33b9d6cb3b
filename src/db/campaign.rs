use crate::db::StoreError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

/// SQL rendition of [`models::CampaignScope::matches`].
const IN_SCOPE: &str = "c.active = TRUE \
    AND c.start_date <= $1 \
    AND c.end_date >= $1 \
    AND c.campaign_type = $2";

pub async fn fetch_shops_in_scope(
    pool: &PgPool,
    scope: &models::CampaignScope,
    limit: i64,
) -> Result<Vec<models::PromotedShop>, StoreError> {
    let query_span = tracing::info_span!(
        "Fetch promoted shops.",
        placement = scope.placement.code(),
        at = %scope.at,
        limit
    );

    let query = format!(
        r#"SELECT
            c.id AS campaign_id,
            s.id,
            s.name,
            s.description,
            s.banned,
            s.status,
            s.average_rating,
            s.created_at,
            s.updated_at
        FROM shop_promotion_campaign c
        INNER JOIN shop s ON s.id = c.shop_id
        WHERE {}
        ORDER BY c.id DESC
        LIMIT $3"#,
        IN_SCOPE
    );

    sqlx::query_as::<_, models::PromotedShop>(&query)
        .bind(scope.at)
        .bind(scope.placement.code())
        .bind(limit)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch promoted shops: {:?}", err);
            StoreError::from(err)
        })
}
