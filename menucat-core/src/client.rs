//! HTTP client for the remote menu item collection.
//!
//! The collection lives at a single base URL (for example
//! `http://localhost:8080/api/entities`); individual items are addressed as
//! `<base>/<id>`. All payloads are JSON.

use std::time::Duration;

use reqwest::{Response, StatusCode};

use crate::error::CatalogError;
use crate::models::{MenuItem, MenuItemDraft};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the five collection operations.
///
/// Holds no item state of its own; every call goes to the server.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    /// Creates a client for the collection at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            http: reqwest::Client::new(),
        }
    }

    /// Creates a client whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: normalize_base_url(&base_url.into()),
            http,
        })
    }

    /// Returns the collection URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// `GET <base>`: the full collection.
    pub async fn list_items(&self) -> Result<Vec<MenuItem>, CatalogError> {
        tracing::debug!(url = %self.base_url, "listing menu items");
        let response = self.http.get(&self.base_url).send().await?;
        let response = ensure_success(response)?;
        Ok(response.json().await?)
    }

    /// `GET <base>/<id>`: one item, for populating the edit form.
    pub async fn get_item(&self, id: i64) -> Result<MenuItem, CatalogError> {
        tracing::debug!(id, "fetching menu item");
        let response = self.http.get(self.item_url(id)).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::NotFound(id));
        }
        Ok(response.json().await?)
    }

    /// `POST <base>` with the draft as body.
    pub async fn create_item(&self, draft: &MenuItemDraft) -> Result<(), CatalogError> {
        tracing::debug!(name = %draft.name, "creating menu item");
        let response = self.http.post(&self.base_url).json(draft).send().await?;
        ensure_success(response)?;
        Ok(())
    }

    /// `PUT <base>/<id>` with the draft as body.
    pub async fn update_item(&self, id: i64, draft: &MenuItemDraft) -> Result<(), CatalogError> {
        tracing::debug!(id, "updating menu item");
        let response = self.http.put(self.item_url(id)).json(draft).send().await?;
        ensure_success(response)?;
        Ok(())
    }

    /// `DELETE <base>/<id>`.
    pub async fn delete_item(&self, id: i64) -> Result<(), CatalogError> {
        tracing::debug!(id, "deleting menu item");
        let response = self.http.delete(self.item_url(id)).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}

fn ensure_success(response: Response) -> Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(status_error(status))
    }
}

fn status_error(status: StatusCode) -> CatalogError {
    CatalogError::Status(status.as_u16())
}

/// Adds a scheme to bare hosts and drops trailing slashes.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}
