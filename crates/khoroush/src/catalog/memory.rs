use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use super::source::{CatalogError, CatalogSource, Direction, Row, TableQuery};

/// Catalog held in memory, keyed by table name.
///
/// Serves local development from a JSON fixture file shaped like
/// `{ "real_estate_listings": [ ... ], "construction_projects": [ ... ] }`
/// and stands in for the hosted store in tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<HashMap<String, Vec<Row>>>>,
}

impl InMemoryCatalog {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|err| CatalogError::Fixture(format!("{}: {}", path.display(), err)))?;
        Self::from_json(&raw)
            .map_err(|err| CatalogError::Fixture(format!("{}: {}", path.display(), err)))
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let tables: HashMap<String, Vec<Row>> = serde_json::from_str(raw)?;
        Ok(Self {
            tables: Arc::new(RwLock::new(tables)),
        })
    }

    pub fn with_rows(self, table: impl Into<String>, rows: Vec<Row>) -> Self {
        self.insert_rows(table, rows);
        self
    }

    pub fn insert_rows(&self, table: impl Into<String>, rows: Vec<Row>) {
        let mut guard = self
            .tables
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.entry(table.into()).or_default().extend(rows);
    }

    pub fn row_count(&self, table: &str) -> usize {
        let guard = self
            .tables
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.get(table).map(Vec::len).unwrap_or(0)
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn select(&self, query: &TableQuery) -> Result<Vec<Row>, CatalogError> {
        let guard = self
            .tables
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let Some(rows) = guard.get(&query.table) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<Row> = rows
            .iter()
            .filter(|row| {
                query
                    .filters
                    .iter()
                    .all(|(column, expected)| matches_eq(row.get(column), expected))
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            query.order.iter().fold(Ordering::Equal, |ordering, entry| {
                ordering.then_with(|| {
                    let cmp = compare_values(a.get(&entry.column), b.get(&entry.column));
                    match entry.direction {
                        Direction::Ascending => cmp,
                        Direction::Descending => cmp.reverse(),
                    }
                })
            })
        });

        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }

        Ok(matched)
    }
}

fn matches_eq(value: Option<&Value>, expected: &str) -> bool {
    match value {
        Some(Value::String(actual)) => actual == expected,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == expected,
    }
}

// Nulls sort last ascending, matching PostgREST defaults for `asc`.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|value| !value.is_null());
    let b = b.filter(|value| !value.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let a = a.as_f64().unwrap_or_default();
            let b = b.as_f64().unwrap_or_default();
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(a), Some(b)) => a.to_string().cmp(&b.to_string()),
    }
}
