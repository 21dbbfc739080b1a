//! Browser client for the gateway's `/api` routes.
//!
//! - Base URL comes from `DASHBOARD_API_BASE` at compile time; empty means
//!   the page's own origin, which is the gateway serving this bundle.
//! - Every call resolves to `Result<T, ApiError>`; transport failures are
//!   also written to the browser console.

use common::api::{ApiError, Endpoints};
use common::model::{ReadyCustomersPage, ReadyUsersPage, UploadResult, UsersPage};
use common::requests::PageQuery;
use common::view::LookupKind;
use gloo_console::error;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

const API_BASE: &str = match option_env!("DASHBOARD_API_BASE") {
    Some(base) => base,
    None => "",
};

pub fn endpoints() -> Endpoints {
    Endpoints::new(API_BASE)
}

pub async fn fetch_users(query: PageQuery) -> Result<UsersPage, ApiError> {
    get_json(&endpoints().users(query)).await
}

pub async fn fetch_ready_users(query: PageQuery) -> Result<ReadyUsersPage, ApiError> {
    get_json(&endpoints().ready_users(query)).await
}

pub async fn fetch_ready_customers(query: PageQuery) -> Result<ReadyCustomersPage, ApiError> {
    get_json(&endpoints().ready_customers(query)).await
}

/// Fetches the record a lookup form asks for; `id` must already be normalized.
pub async fn lookup<T: DeserializeOwned>(kind: LookupKind, id: &str) -> Result<T, ApiError> {
    get_json(&kind.url(&endpoints(), id)).await
}

/// Sends `file` as the single multipart part `file`.
pub async fn upload(file: File) -> Result<UploadResult, ApiError> {
    let url = endpoints().upload();
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(js_error)?;

    let request = Request::post(&url).body(form).map_err(|e| {
        error!(format!("POST {} could not be built: {}", url, e));
        ApiError::Transport(e.to_string())
    })?;
    let response = request.send().await.map_err(|e| {
        error!(format!("POST {} failed: {}", url, e));
        ApiError::Transport(e.to_string())
    })?;
    read(response).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url).send().await.map_err(|e| {
        error!(format!("GET {} failed: {}", url, e));
        ApiError::Transport(e.to_string())
    })?;
    read(response).await
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        error!(format!("{} answered {}", response.url(), status));
        return Err(ApiError::from_response(
            status,
            &response.status_text(),
            &body,
        ));
    }

    serde_json::from_str(&body).map_err(|e| {
        error!(format!("{} returned an unexpected body: {}", response.url(), e));
        ApiError::Decode(e.to_string())
    })
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Transport(
        value
            .as_string()
            .unwrap_or_else(|| "No se pudo preparar la solicitud".to_string()),
    )
}
