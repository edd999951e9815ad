//! Menucat Core Library
//!
//! Menu item models, the HTTP client for the remote catalog collection and
//! the session that keeps the rendered view in step with it.

pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod view;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use models::{parse_price, MenuItem, MenuItemDraft, MenuItemForm};
pub use session::CatalogSession;
pub use view::{EditView, ListView, Notice, NoticeKind, Theme, NOTICE_DURATION};
