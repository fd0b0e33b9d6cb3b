use crate::db::StoreError;
use crate::forms::Pagination;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_visible_by_shop(
    pool: &PgPool,
    shop_id: i32,
    pagination: &Pagination,
) -> Result<Vec<models::ReviewRow>, StoreError> {
    let query_span = tracing::info_span!(
        "Fetch reviews of a shop.",
        shop_id,
        offset = pagination.offset(),
        limit = pagination.limit()
    );

    sqlx::query_as::<_, models::ReviewRow>(
        r#"SELECT
            r.id,
            r.shop_id,
            r.rate,
            r.comment,
            r.updated_at,
            s.banned AS shop_banned,
            u.id AS user_id,
            u.full_name AS user_full_name,
            u.avatar AS user_avatar
        FROM review r
        INNER JOIN shop s ON s.id = r.shop_id
        INNER JOIN app_user u ON u.id = r.user_id
        WHERE r.shop_id = $1 AND s.banned IS NOT TRUE
        ORDER BY r.updated_at DESC, r.id DESC
        OFFSET $2 LIMIT $3"#,
    )
    .bind(shop_id)
    .bind(pagination.offset())
    .bind(pagination.limit())
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch reviews: {:?}", err);
        StoreError::from(err)
    })
}
