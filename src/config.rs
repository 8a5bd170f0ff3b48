use crate::db::connection::Database;
use std::env;
use std::path::PathBuf;

/// Scheme-keyed proxy URLs applied to every upstream fetch
/// (inventory and geocoding alike). Immutable after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub http: String,
    pub https: String,
}

/// Expand a single proxy host into the scheme-keyed egress policy.
/// "proxy.local:8080" -> http://proxy.local:8080 + https://proxy.local:8080
pub fn expand_proxy(host: &str) -> ProxyConfig {
    ProxyConfig {
        http: format!("http://{host}"),
        https: format!("https://{host}"),
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub proxy: Option<ProxyConfig>,
    pub artifact_dir: PathBuf,
    /// Root of the shipped static assets (stylesheet, favicon). Like
    /// `artifact_dir`, configurable so the server can run from any
    /// working directory.
    pub static_dir: PathBuf,
    pub addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let db_path = env::var("TREASURE_MAP_DB").unwrap_or_else(|_| "treasure_map.sqlite3".into());
        let proxy = env::var("TREASURE_MAP_PROXY")
            .ok()
            .filter(|h| !h.is_empty())
            .map(|h| expand_proxy(&h));
        let artifact_dir = env::var("TREASURE_MAP_ARTIFACTS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("artifacts"));
        let static_dir = env::var("TREASURE_MAP_STATIC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));
        let addr = env::var("TREASURE_MAP_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());

        Self {
            db_path,
            proxy,
            artifact_dir,
            static_dir,
            addr,
        }
    }
}

/// Everything a request handler needs. Constructed once in main;
/// the store handle inside is cheap to clone (path only).
#[derive(Clone)]
pub struct Context {
    pub db: Database,
    pub config: AppConfig,
}

impl Context {
    pub fn new(config: AppConfig) -> Self {
        let db = Database::new(config.db_path.clone());
        Self { db, config }
    }
}
