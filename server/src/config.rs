//! Server configuration parsed from environment variables.
//!
//! Blob storage is optional: without the three `AZURE_STORAGE_*` settings the
//! server still starts and the upload endpoint answers 503.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPLOAD_MAX_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_BLOB_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but does not parse.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// Some, but not all, of the blob storage variables are set.
    #[error("incomplete blob storage config: {var} not set")]
    IncompleteBlob { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobConfig {
    pub account: String,
    pub container: String,
    pub sas_token: String,
    /// Account endpoint without trailing slash, e.g. `https://acct.blob.core.windows.net`.
    pub endpoint: String,
    pub request_timeout_secs: u64,
}

impl BlobConfig {
    /// Public container URL that keys are appended to.
    #[must_use]
    pub fn container_url(&self) -> String {
        format!("{}/{}", self.endpoint, self.container)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub upload_max_bytes: usize,
    pub blob: Option<BlobConfig>,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `UPLOAD_MAX_BYTES`: default 10 MiB
    /// - `AZURE_STORAGE_ACCOUNT_NAME`, `AZURE_STORAGE_CONTAINER_NAME`,
    ///   `AZURE_STORAGE_SAS_TOKEN`: all or none
    /// - `AZURE_STORAGE_ENDPOINT`: default `https://{account}.blob.core.windows.net`
    /// - `BLOB_REQUEST_TIMEOUT_SECS`: default 60
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a numeric variable does not parse or the
    /// blob settings are only partly present.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let upload_max_bytes = parse_or(&lookup, "UPLOAD_MAX_BYTES", DEFAULT_UPLOAD_MAX_BYTES)?;
        let blob = blob_config(&lookup)?;
        Ok(Self { port, upload_max_bytes, blob })
    }
}

fn blob_config(lookup: &impl Fn(&str) -> Option<String>) -> Result<Option<BlobConfig>, ConfigError> {
    let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

    let account = non_empty("AZURE_STORAGE_ACCOUNT_NAME");
    let container = non_empty("AZURE_STORAGE_CONTAINER_NAME");
    let sas_token = non_empty("AZURE_STORAGE_SAS_TOKEN");

    let (account, container, sas_token) = match (account, container, sas_token) {
        (None, None, None) => return Ok(None),
        (Some(a), Some(c), Some(s)) => (a, c, s),
        (None, _, _) => return Err(ConfigError::IncompleteBlob { var: "AZURE_STORAGE_ACCOUNT_NAME" }),
        (_, None, _) => return Err(ConfigError::IncompleteBlob { var: "AZURE_STORAGE_CONTAINER_NAME" }),
        (_, _, None) => return Err(ConfigError::IncompleteBlob { var: "AZURE_STORAGE_SAS_TOKEN" }),
    };

    let endpoint = non_empty("AZURE_STORAGE_ENDPOINT")
        .unwrap_or_else(|| format!("https://{account}.blob.core.windows.net"))
        .trim_end_matches('/')
        .to_owned();
    let request_timeout_secs = parse_or(lookup, "BLOB_REQUEST_TIMEOUT_SECS", DEFAULT_BLOB_REQUEST_TIMEOUT_SECS)?;

    Ok(Some(BlobConfig {
        account,
        container,
        sas_token: sas_token.trim_start_matches('?').to_owned(),
        endpoint,
        request_timeout_secs,
    }))
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
