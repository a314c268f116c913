/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL. Required.
    pub database_url: String,

    /// Base URL for links returned by the local storage adapter.
    /// Default: http://localhost:3000
    pub app_url: String,

    /// Storage adapter: "local" or "s3".
    /// Default: local
    pub storage_adapter: String,

    /// Root directory for the local storage adapter.
    /// Default: ./uploads
    pub storage_root: String,

    /// S3 bucket name. Required when storage_adapter=s3.
    pub s3_bucket: Option<String>,

    /// S3 region. Required when storage_adapter=s3.
    pub s3_region: Option<String>,
}

impl Config {
    /// Build config from environment variables.
    /// Returns an error if required vars are missing.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env")?;

        let app_url = std::env::var("APP_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let storage_adapter = std::env::var("STORAGE_ADAPTER")
            .unwrap_or_else(|_| "local".to_string());

        let storage_root = std::env::var("STORAGE_ROOT")
            .unwrap_or_else(|_| "./uploads".to_string());

        let s3_bucket = std::env::var("S3_BUCKET").ok();
        let s3_region = std::env::var("S3_REGION").ok();

        Ok(Self {
            database_url,
            app_url,
            storage_adapter,
            storage_root,
            s3_bucket,
            s3_region,
        })
    }

    /// Returns the base URL without trailing slash, for building links.
    pub fn app_url_base(&self) -> &str {
        self.app_url.trim_end_matches('/')
    }

    /// Config for tests. Uses in-memory database URL and local storage.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            app_url: "http://localhost:3000".to_string(),
            storage_adapter: "local".to_string(),
            storage_root: std::env::temp_dir()
                .join("gramtrack-test-uploads")
                .to_string_lossy()
                .into_owned(),
            s3_bucket: None,
            s3_region: None,
        }
    }
}
