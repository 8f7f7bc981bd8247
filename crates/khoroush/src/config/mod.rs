use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Relay endpoint used when `CONTACT_ENDPOINT` is not set.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://api.web3forms.com/submit";
/// Inbox that receives contact form submissions unless overridden.
pub const DEFAULT_CONTACT_RECIPIENT: &str = "info@khoroush.ca";

/// Distinguishes runtime behavior for different stages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the site.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub data_store: DataStoreConfig,
    pub contact: ContactConfig,
    pub http: HttpConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let data_store = DataStoreConfig::from_env()?;
        let contact = ContactConfig::from_env();

        let timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidTimeout)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            data_store,
            contact,
            http: HttpConfig {
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where listing records come from.
///
/// A hosted store wins when `DATA_STORE_URL` is set; otherwise the catalog is
/// served from the optional JSON fixture file.
#[derive(Debug, Clone, Default)]
pub struct DataStoreConfig {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub fixtures: Option<PathBuf>,
}

impl DataStoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = non_empty_var("DATA_STORE_URL");
        let api_key = non_empty_var("DATA_STORE_KEY");
        let fixtures = non_empty_var("CATALOG_FIXTURES").map(PathBuf::from);

        if let Some(url) = &url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidDataStoreUrl);
            }
            if api_key.is_none() {
                return Err(ConfigError::MissingDataStoreKey);
            }
        }

        Ok(Self {
            url,
            api_key,
            fixtures,
        })
    }
}

/// Contact form relay settings.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub endpoint: String,
    pub access_key: Option<String>,
    pub recipient: String,
}

impl ContactConfig {
    fn from_env() -> Self {
        Self {
            endpoint: non_empty_var("CONTACT_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_CONTACT_ENDPOINT.to_string()),
            access_key: non_empty_var("CONTACT_ACCESS_KEY"),
            recipient: non_empty_var("CONTACT_RECIPIENT")
                .unwrap_or_else(|| DEFAULT_CONTACT_RECIPIENT.to_string()),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            access_key: None,
            recipient: DEFAULT_CONTACT_RECIPIENT.to_string(),
        }
    }
}

/// Outbound HTTP client settings shared by the data store and relay clients.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTimeout,
    InvalidDataStoreUrl,
    MissingDataStoreKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "HTTP_TIMEOUT_SECS must be a positive number of seconds")
            }
            ConfigError::InvalidDataStoreUrl => {
                write!(f, "DATA_STORE_URL must be an http(s) URL")
            }
            ConfigError::MissingDataStoreKey => {
                write!(f, "DATA_STORE_KEY is required when DATA_STORE_URL is set")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidTimeout
            | ConfigError::InvalidDataStoreUrl
            | ConfigError::MissingDataStoreKey => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "DATA_STORE_URL",
            "DATA_STORE_KEY",
            "CATALOG_FIXTURES",
            "CONTACT_ENDPOINT",
            "CONTACT_ACCESS_KEY",
            "CONTACT_RECIPIENT",
            "HTTP_TIMEOUT_SECS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.data_store.url.is_none());
        assert_eq!(config.contact.endpoint, DEFAULT_CONTACT_ENDPOINT);
        assert_eq!(config.contact.recipient, DEFAULT_CONTACT_RECIPIENT);
        assert!(config.contact.access_key.is_none());
        assert_eq!(config.http.timeout, Duration::from_secs(10));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn data_store_url_requires_key() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DATA_STORE_URL", "https://example.supabase.co");
        let err = AppConfig::load().expect_err("key is required");
        assert!(matches!(err, ConfigError::MissingDataStoreKey));

        env::set_var("DATA_STORE_KEY", "anon-key");
        let config = AppConfig::load().expect("config loads with key");
        assert_eq!(
            config.data_store.url.as_deref(),
            Some("https://example.supabase.co")
        );
        assert_eq!(config.data_store.api_key.as_deref(), Some("anon-key"));
        reset_env();
    }

    #[test]
    fn rejects_non_http_data_store_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DATA_STORE_URL", "postgres://db.internal");
        env::set_var("DATA_STORE_KEY", "anon-key");
        let err = AppConfig::load().expect_err("scheme is validated");
        assert!(matches!(err, ConfigError::InvalidDataStoreUrl));
        reset_env();
    }

    #[test]
    fn rejects_zero_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("HTTP_TIMEOUT_SECS", "0");
        let err = AppConfig::load().expect_err("zero timeout rejected");
        assert!(matches!(err, ConfigError::InvalidTimeout));
        reset_env();
    }
}
