//! Environment-driven configuration for the storefront binary.

/// Default request timeout for the catalog fetch.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the catalog resource (a JSON array of product records).
    pub catalog_url: String,
    /// Request timeout for the catalog fetch, in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` sent with the catalog fetch.
    pub user_agent: String,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// - `CATALOG_URL` (required)
    /// - `CATALOG_TIMEOUT_SECS` (optional, default 10; non-numeric values fall back
    ///   to the default)
    ///
    /// # Errors
    ///
    /// Returns an error message when `CATALOG_URL` is not set.
    pub fn from_env() -> Result<Self, String> {
        let catalog_url =
            std::env::var("CATALOG_URL").map_err(|_| "CATALOG_URL is not set".to_string())?;

        let timeout_secs = std::env::var("CATALOG_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            catalog_url,
            timeout_secs,
            user_agent: format!("storefront/{}", env!("CARGO_PKG_VERSION")),
        })
    }
}
