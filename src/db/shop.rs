use crate::db::StoreError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Shop>, StoreError> {
    let query_span = tracing::info_span!("Fetch all shops.");
    sqlx::query_as::<_, models::Shop>(
        r#"SELECT id, name, description, banned, status, average_rating, created_at, updated_at
        FROM shop
        ORDER BY id ASC"#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch shops: {:?}", err);
        StoreError::from(err)
    })
}
