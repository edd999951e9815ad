//! Catalog client error types.

use thiserror::Error;

/// Errors that can occur while talking to the catalog collection.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request never completed (unreachable host, timeout, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Fetch of a single item returned a non-success status
    #[error("Menu item not found: {0}")]
    NotFound(i64),

    /// Request completed with a non-success status
    #[error("Server returned status {0}")]
    Status(u16),

    /// Input rejected before any request was sent
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Update submitted while no item is open for editing
    #[error("No menu item is open for editing")]
    NotEditing,
}

impl CatalogError {
    /// True for failures where the server never produced a usable response.
    pub fn is_transport(&self) -> bool {
        matches!(self, CatalogError::Network(_) | CatalogError::Decode(_))
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CatalogError::Decode(e.to_string())
        } else {
            CatalogError::Network(e.to_string())
        }
    }
}
