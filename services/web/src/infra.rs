use khoroush::catalog::{CatalogService, CatalogSource, Category, InMemoryCatalog, PostgrestSource};
use khoroush::config::{AppConfig, HttpConfig};
use khoroush::contact::{ContactService, FormRelay, Web3FormsRelay};
use khoroush::error::AppError;
use khoroush::site::SiteState;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn http_client(config: &HttpConfig) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(concat!("khoroush-web/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Hosted store when configured, else the fixture file, else an empty catalog.
pub(crate) fn catalog_source(
    config: &AppConfig,
    client: &reqwest::Client,
) -> Result<Arc<dyn CatalogSource>, AppError> {
    let store = &config.data_store;
    if let (Some(url), Some(key)) = (&store.url, &store.api_key) {
        info!(%url, "serving catalog from hosted data store");
        return Ok(Arc::new(PostgrestSource::new(client.clone(), url, key)));
    }

    if let Some(path) = &store.fixtures {
        let catalog = InMemoryCatalog::from_path(path)?;
        info!(
            path = %path.display(),
            listings = catalog.row_count(Category::RealEstate.table()),
            projects = catalog.row_count(Category::Construction.table()),
            properties = catalog.row_count(Category::PropertyManagement.table()),
            "serving catalog from fixture file"
        );
        return Ok(Arc::new(catalog));
    }

    warn!("no DATA_STORE_URL or CATALOG_FIXTURES configured; catalog is empty");
    Ok(Arc::new(InMemoryCatalog::default()))
}

pub(crate) fn contact_relay(config: &AppConfig, client: &reqwest::Client) -> Arc<dyn FormRelay> {
    let relay = Web3FormsRelay::new(client.clone(), &config.contact);
    if !relay.is_configured() {
        warn!("CONTACT_ACCESS_KEY is not set; contact submissions will fail");
    }
    Arc::new(relay)
}

pub(crate) fn site_state(config: &AppConfig) -> Result<SiteState, AppError> {
    let client = http_client(&config.http)?;
    let source = catalog_source(config, &client)?;
    let relay = contact_relay(config, &client);
    Ok(SiteState {
        catalog: CatalogService::new(source),
        contact: Arc::new(ContactService::new(relay)),
    })
}

/// Clap value parser for category slugs.
pub(crate) fn parse_category(raw: &str) -> Result<Category, String> {
    Category::from_slug(raw).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(|category| category.slug()).collect();
        format!("unknown category '{raw}' (expected one of: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use khoroush::config::{
        AppEnvironment, ContactConfig, DataStoreConfig, ServerConfig, TelemetryConfig,
    };
    use std::path::PathBuf;

    fn config(data_store: DataStoreConfig) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            data_store,
            contact: ContactConfig::default(),
            http: HttpConfig::default(),
        }
    }

    #[test]
    fn parse_category_accepts_slugs() {
        assert_eq!(parse_category("real-estate"), Ok(Category::RealEstate));
        let err = parse_category("interiors").expect_err("unknown slug");
        assert!(err.contains("property-management"));
    }

    #[tokio::test]
    async fn bundled_fixtures_load() {
        let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/catalog.json");
        let config = config(DataStoreConfig {
            fixtures: Some(fixtures),
            ..DataStoreConfig::default()
        });
        let state = site_state(&config).expect("state builds");
        let listings: Vec<khoroush::catalog::RealEstateListing> =
            state.catalog.listings().await.expect("fixtures decode");
        assert!(!listings.is_empty());
        let projects: Vec<khoroush::catalog::ConstructionProject> =
            state.catalog.listings().await.expect("fixtures decode");
        assert!(!projects.is_empty());
        let properties: Vec<khoroush::catalog::ManagedProperty> =
            state.catalog.listings().await.expect("fixtures decode");
        assert!(!properties.is_empty());
    }

    #[test]
    fn missing_fixture_file_is_an_error() {
        let config = config(DataStoreConfig {
            fixtures: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..DataStoreConfig::default()
        });
        assert!(matches!(site_state(&config), Err(AppError::Catalog(_))));
    }
}
