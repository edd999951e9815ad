//! Business rules for the catalog server.
//!
//! Every call is timed and logged: entry at debug, completion or failure at
//! info/warn with the elapsed milliseconds.

use menucat_core::{MenuItem, MenuItemDraft};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use super::repository::MenuItemRepository;

/// Errors returned by service operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Price is negative or not a finite number.
    InvalidPrice(f64),
    /// Name is empty or only whitespace.
    EmptyName,
    /// No item with this id.
    NotFound(i64),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::InvalidPrice(price) => {
                write!(f, "Price cannot be negative: {}", price)
            }
            ServiceError::EmptyName => write!(f, "Name cannot be empty"),
            ServiceError::NotFound(id) => write!(f, "MenuItem with id {} not found", id),
        }
    }
}

impl std::error::Error for ServiceError {}

#[derive(Debug, Clone)]
pub struct MenuItemService {
    repo: Arc<MenuItemRepository>,
}

impl MenuItemService {
    pub fn new(repo: Arc<MenuItemRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, ServiceError> {
        timed("create", async {
            validate(&draft)?;
            Ok(self.repo.insert(draft).await)
        })
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<MenuItem>, ServiceError> {
        timed("get_all", async { Ok(self.repo.find_all().await) }).await
    }

    pub async fn get(&self, id: i64) -> Result<MenuItem, ServiceError> {
        timed("get", async {
            self.repo
                .find_by_id(id)
                .await
                .ok_or(ServiceError::NotFound(id))
        })
        .await
    }

    pub async fn update(&self, id: i64, draft: MenuItemDraft) -> Result<MenuItem, ServiceError> {
        timed("update", async {
            if !self.repo.exists(id).await {
                return Err(ServiceError::NotFound(id));
            }
            validate(&draft)?;
            self.repo
                .replace(id, draft)
                .await
                .ok_or(ServiceError::NotFound(id))
        })
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        timed("delete", async {
            if self.repo.remove(id).await {
                Ok(())
            } else {
                Err(ServiceError::NotFound(id))
            }
        })
        .await
    }
}

fn validate(draft: &MenuItemDraft) -> Result<(), ServiceError> {
    if draft.name.trim().is_empty() {
        return Err(ServiceError::EmptyName);
    }
    if !draft.price.is_finite() || draft.price < 0.0 {
        return Err(ServiceError::InvalidPrice(draft.price));
    }
    Ok(())
}

async fn timed<T, F>(method: &'static str, call: F) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>>,
{
    tracing::debug!(method, "entering service call");
    let start = Instant::now();
    let result = call.await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(_) => tracing::info!(method, elapsed_ms, "service call completed"),
        Err(e) => tracing::warn!(method, elapsed_ms, error = %e, "service call failed"),
    }

    result
}
