//! Blob storage for uploaded files.
//!
//! DESIGN
//! ======
//! Routes talk to [`BlobStore`] so handler tests can swap in an in-memory
//! store. [`AzureBlobStore`] writes each upload as a single block blob with a
//! `Put Blob` request authorised by a container SAS token. The public URL it
//! returns is the container URL plus the key and never carries the token.

use std::time::Duration;

use time::OffsetDateTime;

use crate::config::BlobConfig;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const FALLBACK_FILE_NAME: &str = "file";

/// Errors produced by blob storage operations.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// The HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response.
    #[error("blob request failed: {0}")]
    Request(String),

    /// The storage service answered with a non-success status.
    #[error("blob store returned {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Store a file and hand back the URL it can be fetched from.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `bytes` under `key`, returning the public URL.
    ///
    /// # Errors
    ///
    /// Returns a [`BlobError`] if the write does not succeed.
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> Result<String, BlobError>;
}

pub struct AzureBlobStore {
    http: reqwest::Client,
    container_url: String,
    sas_token: String,
}

impl AzureBlobStore {
    /// Build a store for the configured container.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &BlobConfig) -> Result<Self, BlobError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| BlobError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, container_url: config.container_url(), sas_token: config.sas_token.clone() })
    }

    fn public_url(&self, key: &str) -> String {
        public_url(&self.container_url, key)
    }
}

#[async_trait::async_trait]
impl BlobStore for AzureBlobStore {
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> Result<String, BlobError> {
        let url = self.public_url(key);
        let resp = self
            .http
            .put(format!("{url}?{}", self.sas_token))
            .header("x-ms-blob-type", "BlockBlob")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| BlobError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BlobError::Rejected { status: status.as_u16(), body });
        }

        tracing::debug!(%key, "blob stored");
        Ok(url)
    }
}

/// Storage key for an upload: `{unix_millis}-{sanitised name}`.
#[must_use]
pub fn blob_key(unix_millis: i128, file_name: &str) -> String {
    format!("{unix_millis}-{}", sanitize_file_name(file_name))
}

/// Storage key stamped with the current time.
#[must_use]
pub fn blob_key_now(file_name: &str) -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    blob_key(millis, file_name)
}

/// Reduce a client-supplied name to a URL-safe file name.
///
/// Directory components are dropped, anything outside `[A-Za-z0-9._-]`
/// becomes `_`, and an empty result falls back to `file`.
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() { FALLBACK_FILE_NAME.to_owned() } else { cleaned.to_owned() }
}

fn public_url(container_url: &str, key: &str) -> String {
    format!("{}/{key}", container_url.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "blob_test.rs"]
mod tests;
