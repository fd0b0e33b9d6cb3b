use crate::configuration::SearchSettings;
use tracing::Instrument;

use super::{SearchError, SearchIndex, ShopDocument};

/// Document writes over the index server's REST API:
/// `PUT {host}/{index}/_doc/{id}`.
pub struct HttpSearchIndex {
    base_url: String,
    index_name: String,
    http_client: reqwest::Client,
}

impl HttpSearchIndex {
    pub fn new(settings: &SearchSettings) -> Result<Self, SearchError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.host.trim_end_matches('/').to_string(),
            index_name: settings.index_name.clone(),
            http_client,
        })
    }

    fn document_url(&self, id: i32) -> String {
        format!("{}/{}/_doc/{}", self.base_url, self.index_name, id)
    }
}

#[async_trait::async_trait]
impl SearchIndex for HttpSearchIndex {
    async fn upsert_document(&self, document: &ShopDocument) -> Result<(), SearchError> {
        let span = tracing::info_span!("search_upsert_document", shop_id = document.id);

        let response = self
            .http_client
            .put(self.document_url(document.id))
            .json(document)
            .send()
            .instrument(span)
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        Ok(())
    }
}
