//! Game Server API
//!
//! Thin `fetch` wrappers around the game server's JSON endpoints, organized by game.

mod mansion;
mod memory;
mod ranking;

use leptos::logging::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use mansion::*;
pub use memory::*;
pub use ranking::*;

/// Failure of a single request/response round-trip
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid JSON: {0}")]
    Decode(String),
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Request(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Send a request and return the raw response, failing on non-2xx
async fn send(method: &str, url: &str, body: Option<String>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = body.as_deref() {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET url` and decode the JSON body
pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = send("GET", url, None).await?;
    read_json(response).await
}

/// `POST url` with an optional JSON body and decode the JSON response
pub(crate) async fn post_json<B, T>(url: &str, body: Option<&B>) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let payload = body.map(encode).transpose()?;
    let response = send("POST", url, payload).await?;
    read_json(response).await
}

/// Log a failed call with the caller's tag
pub(crate) fn log_failure(tag: &str, what: &str, err: &ApiError) {
    error!("[{}] {}: {}", tag, what, err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "server responded with status 500");
        assert_eq!(
            ApiError::Decode("missing field `cards`".into()).to_string(),
            "invalid JSON: missing field `cards`"
        );
    }

    #[test]
    fn test_encode_body() {
        #[derive(Serialize)]
        struct Body<'a> {
            player_name: &'a str,
        }
        assert_eq!(encode(&Body { player_name: "花子" }).unwrap(), r#"{"player_name":"花子"}"#);
    }
}
