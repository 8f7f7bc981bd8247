use std::sync::Arc;

use tracing::debug;

use super::domain::{sort_for_display, CatalogRecord};
use super::source::{CatalogError, CatalogSource, Row, TableQuery};

/// Typed access to the catalog for route handlers and the CLI.
pub struct CatalogService<S: ?Sized = dyn CatalogSource> {
    source: Arc<S>,
}

impl<S: ?Sized> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> CatalogService<S>
where
    S: CatalogSource + ?Sized,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Every record of `R`'s category, featured first then newest.
    pub async fn listings<R: CatalogRecord>(&self) -> Result<Vec<R>, CatalogError> {
        let query = TableQuery::listing(R::CATEGORY);
        let rows = self.source.select(&query).await?;
        let mut records = rows
            .into_iter()
            .map(decode::<R>)
            .collect::<Result<Vec<R>, _>>()?;
        sort_for_display(&mut records);
        Ok(records)
    }

    /// A single record, or `None` when the id matches nothing.
    pub async fn detail<R: CatalogRecord>(&self, id: &str) -> Result<Option<R>, CatalogError> {
        let query = TableQuery::by_id(R::CATEGORY, id);
        let rows = match self.source.select(&query).await {
            Ok(rows) => rows,
            Err(CatalogError::Status { status: 400, body }) if is_invalid_input(&body) => {
                debug!(
                    table = R::CATEGORY.table(),
                    %id,
                    %body,
                    "store rejected id; treating as missing"
                );
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        rows.into_iter().next().map(decode::<R>).transpose()
    }
}

/// Postgres error code PostgREST relays when a value cannot be cast to the
/// column type, such as a malformed uuid.
const INVALID_INPUT: &str = "22P02";

fn is_invalid_input(body: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("code")?
                .as_str()
                .map(|code| code == INVALID_INPUT)
        })
        .unwrap_or(false)
}

fn decode<R: CatalogRecord>(row: Row) -> Result<R, CatalogError> {
    serde_json::from_value(row).map_err(|source| CatalogError::Decode {
        table: R::CATEGORY.table(),
        source,
    })
}
