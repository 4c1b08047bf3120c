//! REST API helpers for communicating with the analytics backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, relative to the
//! host, which forwards `/api/*` to the backend.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so backend
//! failures degrade UI behavior (demo data, inline errors) without crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use timerange::StatsQuery;

use super::types::{ChatRequest, DatasetStats, DatasetSummary, LoginOutcome, User};
#[cfg(feature = "hydrate")]
use super::types::{ChatReply, LoginResponse};

#[cfg(any(test, feature = "hydrate"))]
const DATASETS_ENDPOINT: &str = "/api/datasets";

#[cfg(any(test, feature = "hydrate"))]
fn dataset_endpoint(dataset_id: &str) -> String {
    format!("{DATASETS_ENDPOINT}/{dataset_id}")
}

/// Stats endpoint for `query`: the filtered POST route when any bound
/// applies, the plain GET route otherwise.
#[cfg(any(test, feature = "hydrate"))]
fn stats_endpoint(dataset_id: &str, query: &StatsQuery) -> String {
    if query.is_unbounded() {
        format!("/api/analytics/{dataset_id}/stats")
    } else {
        format!("/api/analytics/{dataset_id}/stats/filtered")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_input_missing_message(input_id: &str) -> String {
    format!("no file selected in #{input_id}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Submit email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails or the credentials are
/// rejected.
pub async fn login(email: &str, password: &str) -> Result<LoginOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return LoginResponse::default().outcome();
        }
        if !resp.ok() {
            return Err(request_failed_message("login", resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        body.outcome()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Complete a two-factor login via `POST /api/auth/mfa/verify`.
///
/// `code` must already be normalized to six digits.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the code is rejected.
pub async fn verify_mfa(mfa_token: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "mfa_token": mfa_token, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/mfa/verify")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("verify code", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (mfa_token, code);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }
}

/// List the user's datasets from `GET /api/datasets`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_datasets() -> Result<Vec<DatasetSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DATASETS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("list datasets", resp.status()));
        }
        resp.json::<Vec<DatasetSummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Upload the file chosen in the `<input type="file">` with id `input_id`
/// as multipart field `file` to `POST /api/datasets`.
///
/// # Errors
///
/// Returns an error string if no file is selected, the form cannot be built,
/// or the upload is rejected.
pub async fn upload_dataset(input_id: &str) -> Result<DatasetSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let file = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(input_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .ok_or_else(|| upload_input_missing_message(input_id))?;
        let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
        form.append_with_blob_and_filename("file", &file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
        let resp = gloo_net::http::Request::post(DATASETS_ENDPOINT)
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("upload", resp.status()));
        }
        resp.json::<DatasetSummary>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input_id;
        Err("not available on server".to_owned())
    }
}

/// Delete a dataset via `DELETE /api/datasets/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_dataset(dataset_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&dataset_endpoint(dataset_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete dataset", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dataset_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the analytics overview for a dataset.
///
/// Unbounded queries use `GET /api/analytics/{id}/stats`; bounded ones post
/// the [`StatsQuery`] to `/api/analytics/{id}/stats/filtered`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_stats(dataset_id: &str, query: &StatsQuery) -> Result<DatasetStats, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = stats_endpoint(dataset_id, query);
        let request = if query.is_unbounded() {
            gloo_net::http::Request::get(&url).build().map_err(|e| e.to_string())?
        } else {
            gloo_net::http::Request::post(&url).json(query).map_err(|e| e.to_string())?
        };
        let resp = request.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("stats", resp.status()));
        }
        resp.json::<DatasetStats>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (dataset_id, query);
        Err("not available on server".to_owned())
    }
}

/// Ask the insights assistant a question via `POST /api/chat`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn send_chat(request: &ChatRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/chat")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("chat", resp.status()));
        }
        let body: ChatReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
