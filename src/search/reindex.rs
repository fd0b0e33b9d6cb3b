use std::time::Duration;

use futures::{stream, StreamExt};

use super::{SearchError, SearchIndex, ShopDocument};
use crate::configuration::SearchSettings;
use crate::db::{Store, StoreError};

#[derive(Debug)]
pub struct FailedDocument {
    pub shop_id: i32,
    pub attempts: usize,
    pub error: SearchError,
}

#[derive(Debug, Default)]
pub struct ReindexReport {
    pub total: usize,
    pub indexed: usize,
    /// Sorted by shop id.
    pub failed: Vec<FailedDocument>,
}

impl ReindexReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Rewrites the document of every shop.
///
/// At most `settings.concurrency` writes are in flight. A failed write is
/// retried with exponential backoff until `settings.retry_attempts` is spent,
/// then reported in [`ReindexReport::failed`]; other shops keep going.
/// Only a failure to list the shops aborts the run.
pub async fn reindex_all(
    store: &dyn Store,
    index: &dyn SearchIndex,
    settings: &SearchSettings,
) -> Result<ReindexReport, StoreError> {
    let shops = store.list_shops().await?;
    let concurrency = settings.concurrency.max(1);
    tracing::info!(total = shops.len(), concurrency, "Reindexing shops");

    let outcomes = stream::iter(shops.iter().map(ShopDocument::from))
        .map(|document| async move {
            let outcome = upsert_with_retry(index, &document, settings).await;
            (document.id, outcome)
        })
        .buffer_unordered(concurrency)
        .collect::<Vec<_>>()
        .await;

    let mut report = ReindexReport {
        total: outcomes.len(),
        ..Default::default()
    };
    for (shop_id, outcome) in outcomes {
        match outcome {
            Ok(()) => report.indexed += 1,
            Err((attempts, error)) => {
                tracing::error!(shop_id, attempts, "Failed to index shop: {}", error);
                report.failed.push(FailedDocument {
                    shop_id,
                    attempts,
                    error,
                });
            }
        }
    }
    report.failed.sort_by_key(|failed| failed.shop_id);

    tracing::info!(
        total = report.total,
        indexed = report.indexed,
        failed = report.failed.len(),
        "Reindex finished"
    );
    Ok(report)
}

async fn upsert_with_retry(
    index: &dyn SearchIndex,
    document: &ShopDocument,
    settings: &SearchSettings,
) -> Result<(), (usize, SearchError)> {
    let max_attempts = settings.retry_attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        match index.upsert_document(document).await {
            Ok(()) => return Ok(()),
            Err(err) if attempt >= max_attempts => return Err((attempt, err)),
            Err(err) => {
                let backoff = backoff_delay(settings.retry_backoff_ms, attempt);
                tracing::warn!(
                    shop_id = document.id,
                    attempt,
                    "Index write failed, retrying in {:?}: {}",
                    backoff,
                    err
                );
                tokio::time::sleep(backoff).await;
            }
        }
    }
}

// base, 2*base, 4*base, ...
fn backoff_delay(base_ms: u64, attempt: usize) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16) as u32;
    Duration::from_millis(base_ms.saturating_mul(2_u64.pow(exponent)))
}
