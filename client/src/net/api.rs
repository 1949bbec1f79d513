//! REST helpers for the TutorMe backend and the local upload endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`/`None` since
//! these endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`: the `Ok` arm is the `{data}`
//! envelope, the `Err` arm the `{error}` one. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::error::ApiError;
use super::resource::Resource;
use super::types::{ListQuery, LoginResponse, Page, User};
#[cfg(any(test, feature = "hydrate"))]
use crate::config;

/// Local server route that streams files into blob storage.
pub const UPLOAD_ENDPOINT: &str = "/api/upload";

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{}/v1/{}", config::api_base_url(), path.trim_start_matches('/'))
}

fn list_path<R: Resource>(query: &ListQuery) -> String {
    format!("{}?{}", R::PATH, query.to_query_string())
}

fn item_path<R: Resource>(id: &str) -> String {
    format!("{}/{id}", R::PATH)
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer};
    use crate::util::storage;

    pub(super) fn with_auth(builder: RequestBuilder) -> RequestBuilder {
        match storage::load_session_token() {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    pub(super) fn network(err: gloo_net::Error) -> ApiError {
        log::error!("request failed: {err}");
        ApiError::Network(err.to_string())
    }

    async fn failure(resp: Response) -> ApiError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        ApiError::from_response(status, &body)
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(failure(resp).await);
        }
        resp.json::<T>().await.map_err(|e| {
            log::error!("response decode failed: {e}");
            ApiError::Decode(e.to_string())
        })
    }

    pub(super) async fn read_empty(resp: Response) -> Result<(), ApiError> {
        if resp.ok() { Ok(()) } else { Err(failure(resp).await) }
    }
}

// =============================================================================
// RESOURCE CRUD
// =============================================================================

/// `GET /v1/{resource}?page&limit&sortBy`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the envelope is malformed.
pub async fn list<R: Resource>(query: &ListQuery) -> Result<Page<R>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&list_path::<R>(query));
        let resp = http::with_auth(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(http::network)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = list_path::<R>(query);
        Err(ApiError::Unavailable)
    }
}

/// `GET /v1/{resource}/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the record is malformed.
pub async fn get<R: Resource>(id: &str) -> Result<R, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&item_path::<R>(id));
        let resp = http::with_auth(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(http::network)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = item_path::<R>(id);
        Err(ApiError::Unavailable)
    }
}

/// `POST /v1/{resource}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the payload or the request fails.
pub async fn create<R: Resource>(payload: &impl Serialize) -> Result<R, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(R::PATH);
        let resp = http::with_auth(gloo_net::http::Request::post(&url))
            .json(payload)
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// `PATCH /v1/{resource}/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the payload or the request fails.
pub async fn update<R: Resource>(id: &str, payload: &impl Serialize) -> Result<R, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&item_path::<R>(id));
        let resp = http::with_auth(gloo_net::http::Request::patch(&url))
            .json(payload)
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (item_path::<R>(id), payload);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /v1/{resource}/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend refuses the delete or the request fails.
pub async fn remove<R: Resource>(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&item_path::<R>(id));
        let resp = http::with_auth(gloo_net::http::Request::delete(&url))
            .send()
            .await
            .map_err(http::network)?;
        http::read_empty(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = item_path::<R>(id);
        Err(ApiError::Unavailable)
    }
}

/// Moderation payload shared by blogs and tutors.
#[derive(Debug, Serialize)]
pub(crate) struct StatusPatch<'a> {
    pub status: &'a str,
}

/// Assignment payload for tutor requests.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssignTutorsPatch<'a> {
    pub assigned_tutors: Vec<&'a str>,
}

/// `PATCH /v1/{resource}/{id}` with `{status}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the status change is rejected.
pub async fn set_status<R: Resource>(id: &str, status: &str) -> Result<R, ApiError> {
    update::<R>(id, &StatusPatch { status }).await
}

/// Replace the assigned tutor of a tutor request.
///
/// # Errors
///
/// Returns an [`ApiError`] if the assignment is rejected.
pub async fn assign_tutor(
    request_id: &str,
    tutor_id: &str,
) -> Result<crate::net::entities::TutorRequest, ApiError> {
    let patch = AssignTutorsPatch { assigned_tutors: vec![tutor_id] };
    update::<crate::net::entities::TutorRequest>(request_id, &patch).await
}

// =============================================================================
// SESSION
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /v1/auth/login`; the caller stores the returned token.
///
/// # Errors
///
/// Returns an [`ApiError`] on bad credentials or transport failure.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url("auth/login");
        let resp = gloo_net::http::Request::post(&url)
            .json(&LoginRequest { email, password })
            .map_err(http::network)?
            .send()
            .await
            .map_err(http::network)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the user behind the stored session token from `/v1/auth/me`.
/// Returns `None` if there is no token, it is rejected, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        crate::util::storage::load_session_token()?;
        let resp = http::with_auth(gloo_net::http::Request::get(&api_url("auth/me")))
            .send()
            .await
            .ok()?;
        http::read_json::<User>(resp).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Best-effort `POST /v1/auth/logout`; the local token is cleared regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = http::with_auth(gloo_net::http::Request::post(&api_url("auth/logout")))
            .send()
            .await;
        crate::util::storage::clear_session_token();
    }
}

// =============================================================================
// UPLOAD
// =============================================================================

/// Upload a file through `POST /api/upload` and return its public URL.
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be built, the request fails,
/// or the server answers with `{error}`.
#[cfg(feature = "hydrate")]
pub async fn upload_file(file: web_sys::File) -> Result<String, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_owned()))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
    let resp = gloo_net::http::Request::post(UPLOAD_ENDPOINT)
        .body(form)
        .map_err(http::network)?
        .send()
        .await
        .map_err(http::network)?;
    let body: crate::net::types::UploadResponse = http::read_json(resp).await?;
    Ok(body.url)
}
