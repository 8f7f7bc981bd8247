//! Read-only listing catalog: real estate listings, construction projects, and
//! managed properties fetched from the hosted data store.

pub mod domain;
pub mod format;
pub mod memory;
pub mod postgrest;
pub mod service;
pub mod source;

pub use domain::{
    sort_for_display, BadgeVariant, CatalogRecord, Category, ConstructionProject, Fact,
    ListingStatus, ManagedProperty, ManagementStatus, Metric, MetricIcon, ProjectStatus,
    RealEstateListing, StatusBadge,
};
pub use memory::InMemoryCatalog;
pub use postgrest::PostgrestSource;
pub use service::CatalogService;
pub use source::{CatalogError, CatalogSource, Direction, OrderBy, Row, TableQuery};
