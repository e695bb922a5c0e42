//! HTTP access to the remote student API.
//!
//! Every call returns `Result<_, ApiError>`; non-2xx statuses are errors,
//! and response bodies are decoded into the typed records from `common`, so
//! a malformed payload is rejected here instead of reaching the component.

use common::config::ClientConfig;
use common::model::program::Program;
use common::model::student::{NewStudent, Student};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Path of the runtime configuration served by the backend.
const CONFIG_PATH: &str = "/api/config";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

pub async fn fetch_students(url: &str) -> Result<Vec<Student>, ApiError> {
    get_json(url).await
}

pub async fn fetch_programs(url: &str) -> Result<Vec<Program>, ApiError> {
    get_json(url).await
}

pub async fn fetch_client_config() -> Result<ClientConfig, ApiError> {
    get_json(CONFIG_PATH).await
}

/// Posts the form values and returns whatever the server echoed back.
///
/// The echo is only logged, so it is kept as opaque JSON; an empty body on a
/// successful status decodes to `Value::Null` and a non-JSON body to a string.
pub async fn create_student(url: &str, payload: &NewStudent) -> Result<Value, ApiError> {
    let response = Request::post(url).json(payload)?.send().await?;
    let body = ensure_success(response).await?.text().await?;
    Ok(decode_echo(&body))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url).send().await?;
    let body = ensure_success(response).await?.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

fn decode_echo(body: &str) -> Value {
    if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
    }
}
