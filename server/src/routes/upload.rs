//! File upload route.
//!
//! `POST /api/upload` takes a multipart body with a `file` field, writes it
//! to the blob store under a timestamp-prefixed key, and answers `{url}`.
//! Every failure answers `{error}`.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::services::blob::{self, BlobError};
use crate::state::AppState;

pub const FILE_FIELD: &str = "file";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No file uploaded")]
    NoFile,
    #[error("Invalid multipart body")]
    InvalidMultipart(String),
    #[error("File too large")]
    TooLarge,
    #[error("File storage is not configured")]
    StorageUnavailable,
    #[error("Upload failed")]
    Storage(#[from] BlobError),
}

pub(crate) fn upload_error_to_status(err: &UploadError) -> StatusCode {
    match err {
        UploadError::NoFile | UploadError::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
        UploadError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        UploadError::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        UploadError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: UploadError) -> (StatusCode, Json<ErrorBody>) {
    match &err {
        UploadError::Storage(source) => tracing::error!(error = %source, "upload to blob store failed"),
        UploadError::InvalidMultipart(detail) => tracing::warn!(%detail, "rejected multipart body"),
        _ => {}
    }
    (upload_error_to_status(&err), Json(ErrorBody { error: err.to_string() }))
}

fn multipart_error(err: MultipartError) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge
    } else {
        UploadError::InvalidMultipart(err.body_text())
    }
}

/// A file pulled out of the multipart body.
struct IncomingFile {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// Read fields until the `file` field turns up; other fields are skipped.
async fn read_file_field(multipart: &mut Multipart) -> Result<IncomingFile, UploadError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_owned();
        let content_type = field.content_type().unwrap_or(DEFAULT_CONTENT_TYPE).to_owned();
        let bytes = field.bytes().await.map_err(multipart_error)?;
        if bytes.is_empty() {
            return Err(UploadError::NoFile);
        }
        return Ok(IncomingFile { name, content_type, bytes: bytes.to_vec() });
    }
    Err(UploadError::NoFile)
}

async fn store_upload(state: &AppState, multipart: &mut Multipart) -> Result<String, UploadError> {
    let Some(store) = state.blob.as_ref() else {
        return Err(UploadError::StorageUnavailable);
    };
    let file = read_file_field(multipart).await?;
    let key = blob::blob_key_now(&file.name);
    let url = store.put(&key, &file.content_type, file.bytes).await?;
    tracing::info!(%key, content_type = %file.content_type, "file uploaded");
    Ok(url)
}

/// `POST /api/upload`: store a multipart `file` and return its public URL.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, (StatusCode, Json<ErrorBody>)> {
    let mut multipart = multipart
        .map_err(|rejection| error_response(UploadError::InvalidMultipart(rejection.body_text())))?;

    store_upload(&state, &mut multipart)
        .await
        .map(|url| Json(UploadResponse { url }))
        .map_err(error_response)
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
