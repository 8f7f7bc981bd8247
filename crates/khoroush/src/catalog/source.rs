use async_trait::async_trait;

use super::domain::Category;

/// Untyped row as returned by the data store.
pub type Row = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

/// Table query with the subset of PostgREST operators the site relies on:
/// column selection, equality filters, ordering, and a row limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub table: String,
    pub columns: String,
    pub filters: Vec<(String, String)>,
    pub order: Vec<OrderBy>,
    pub limit: Option<usize>,
}

impl TableQuery {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    pub fn order(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order.push(OrderBy {
            column: column.into(),
            direction,
        });
        self
    }

    /// At most one row.
    pub fn single(mut self) -> Self {
        self.limit = Some(1);
        self
    }

    /// All rows of a category, featured first then newest.
    pub fn listing(category: Category) -> Self {
        Self::table(category.table())
            .select("*")
            .order("featured", Direction::Descending)
            .order("created_at", Direction::Descending)
    }

    pub fn by_id(category: Category, id: &str) -> Self {
        Self::table(category.table())
            .select("*")
            .eq("id", id)
            .single()
    }

    /// Query-string parameters in PostgREST syntax.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.columns.clone())];

        for (column, value) in &self.filters {
            pairs.push((column.clone(), format!("eq.{value}")));
        }

        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|entry| format!("{}.{}", entry.column, entry.direction.as_str()))
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("order".to_string(), order));
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }
}

/// Read access to the hosted data store.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn select(&self, query: &TableQuery) -> Result<Vec<Row>, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("data store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("data store responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("data store returned malformed JSON for {table}: {source}")]
    Payload {
        table: String,
        source: serde_json::Error,
    },
    #[error("unable to decode {table} row: {source}")]
    Decode {
        table: &'static str,
        source: serde_json::Error,
    },
    #[error("fixture catalog unavailable: {0}")]
    Fixture(String),
}
