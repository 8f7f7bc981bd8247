use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::debug;

use super::source::{CatalogError, CatalogSource, Row, TableQuery};

/// Catalog source backed by a PostgREST endpoint (`{base}/rest/v1/{table}`).
#[derive(Clone)]
pub struct PostgrestSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PostgrestSource {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

impl std::fmt::Debug for PostgrestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgrestSource")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogSource for PostgrestSource {
    async fn select(&self, query: &TableQuery) -> Result<Vec<Row>, CatalogError> {
        let response = self
            .client
            .get(self.endpoint(&query.table))
            .query(&query.to_query_pairs())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let rows: Vec<Row> =
            serde_json::from_str(&body).map_err(|source| CatalogError::Payload {
                table: query.table.clone(),
                source,
            })?;
        debug!(table = %query.table, rows = rows.len(), "data store query complete");
        Ok(rows)
    }
}
