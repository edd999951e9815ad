//! Server-side modules for the menucat catalog server.

pub mod repository;
pub mod routes;
pub mod service;

pub use repository::MenuItemRepository;
pub use routes::{router, AppState, COLLECTION_PATH};
pub use service::{MenuItemService, ServiceError};
