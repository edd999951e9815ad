//! Catalog session: keeps the rendered view in step with the remote collection.
//!
//! Every mutation follows the same shape: send the request, and on success
//! throw away the current list and load the whole collection again. The list
//! is never patched locally, so what is shown is always a fresh server read.
//!
//! Failures never escape as panics and never touch the current list. Each one
//! is logged and turned into an error [`Notice`]; the error is also returned
//! so callers can decide on an exit status.

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::models::{MenuItem, MenuItemForm};
use crate::view::{EditView, ListView, Notice};

/// View state for one catalog screen.
#[derive(Debug)]
pub struct CatalogSession {
    client: CatalogClient,
    /// `None` until the first successful load.
    list: Option<ListView>,
    edit: EditView,
    notice: Option<Notice>,
}

impl CatalogSession {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            list: None,
            edit: EditView::Closed,
            notice: None,
        }
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// The list from the most recent successful load.
    pub fn list(&self) -> Option<&ListView> {
        self.list.as_ref()
    }

    pub fn edit_view(&self) -> &EditView {
        &self.edit
    }

    /// The current notice, if it has not yet auto-dismissed.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible())
    }

    /// Removes and returns the current notice regardless of its age.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    fn post(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Re-lists the collection and replaces the list view.
    pub async fn load(&mut self) -> Result<&ListView, CatalogError> {
        match self.client.list_items().await {
            Ok(items) => Ok(&*self.list.insert(ListView::from_items(items))),
            Err(e) => {
                tracing::error!("Error loading menu items: {}", e);
                self.post(Notice::error("Error loading menu items!"));
                Err(e)
            }
        }
    }

    /// Manual refresh: re-list and confirm.
    pub async fn refresh(&mut self) -> Result<(), CatalogError> {
        self.load().await?;
        self.post(Notice::success("Menu refreshed!"));
        Ok(())
    }

    /// Fetches one item without touching the edit view.
    pub async fn inspect(&mut self, id: i64) -> Result<MenuItem, CatalogError> {
        match self.client.get_item(id).await {
            Ok(item) => Ok(item),
            Err(e) => {
                tracing::error!("Error loading menu item {}: {}", id, e);
                self.post(Notice::error("Error loading menu item!"));
                Err(e)
            }
        }
    }

    /// Fetches `id` and opens the edit view populated with it.
    ///
    /// On failure the edit view keeps whatever state it had.
    pub async fn open_edit(&mut self, id: i64) -> Result<MenuItemForm, CatalogError> {
        let item = self.inspect(id).await?;
        let form = MenuItemForm::from_item(&item);
        self.edit.open(item);
        Ok(form)
    }

    /// Closes the edit view without submitting. In-flight work is not affected.
    pub fn cancel_edit(&mut self) {
        self.edit.close();
    }

    /// Submits the add form, then re-lists.
    pub async fn create(&mut self, form: MenuItemForm) -> Result<(), CatalogError> {
        let result = match form.into_draft() {
            Ok(draft) => self.client.create_item(&draft).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                self.post(Notice::success("Menu item added successfully!"));
                self.reload_after_mutation().await;
                Ok(())
            }
            Err(e) if e.is_transport() => {
                tracing::error!("Error adding menu item: {}", e);
                self.post(Notice::error("Error adding menu item!"));
                Err(e)
            }
            Err(e) => {
                tracing::warn!("Menu item rejected: {}", e);
                self.post(Notice::error(
                    "Failed to add menu item. Check if price is valid.",
                ));
                Err(e)
            }
        }
    }

    /// Submits the edit form for the open item, closes the edit view and re-lists.
    pub async fn update(&mut self, form: MenuItemForm) -> Result<(), CatalogError> {
        let id = match self.edit.item() {
            Some(item) => item.id,
            None => return Err(CatalogError::NotEditing),
        };

        let result = match form.into_draft() {
            Ok(draft) => self.client.update_item(id, &draft).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                self.post(Notice::success("Menu item updated successfully!"));
                self.edit.close();
                self.reload_after_mutation().await;
                Ok(())
            }
            Err(e) if e.is_transport() => {
                tracing::error!("Error updating menu item {}: {}", id, e);
                self.post(Notice::error("Error updating menu item!"));
                Err(e)
            }
            Err(e) => {
                tracing::warn!("Update of menu item {} rejected: {}", id, e);
                self.post(Notice::error("Failed to update menu item!"));
                Err(e)
            }
        }
    }

    /// Deletes `id` once `confirm` agrees, then re-lists.
    ///
    /// Returns `Ok(false)` without sending anything when confirmation is
    /// declined.
    pub async fn delete<F>(&mut self, id: i64, confirm: F) -> Result<bool, CatalogError>
    where
        F: FnOnce(i64) -> bool,
    {
        if !confirm(id) {
            return Ok(false);
        }

        match self.client.delete_item(id).await {
            Ok(()) => {
                self.post(Notice::success("Menu item deleted successfully!"));
                self.reload_after_mutation().await;
                Ok(true)
            }
            Err(e) if e.is_transport() => {
                tracing::error!("Error deleting menu item {}: {}", id, e);
                self.post(Notice::error("Error deleting menu item!"));
                Err(e)
            }
            Err(e) => {
                tracing::warn!("Delete of menu item {} rejected: {}", id, e);
                self.post(Notice::error("Failed to delete menu item!"));
                Err(e)
            }
        }
    }

    /// The mutation itself succeeded; a failed re-list only leaves the view stale.
    async fn reload_after_mutation(&mut self) {
        let _ = self.load().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItemDraft;
    use crate::view::NoticeKind;
    use axum::{
        http::StatusCode,
        response::IntoResponse,
        routing::{get, put},
        Json, Router,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn sample() -> MenuItem {
        MenuItem::from_draft(
            1,
            MenuItemDraft::new("Caesar Salad", 8.99).with_category("Appetizer"),
        )
    }

    fn form(price: &str) -> MenuItemForm {
        MenuItemForm {
            name: "Pizza".into(),
            description: "Cheesy".into(),
            price: price.into(),
            category: "Mains".into(),
        }
    }

    async fn serve(app: Router) -> CatalogSession {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        CatalogSession::new(CatalogClient::new(format!("http://{}/api/entities", addr)))
    }

    /// Lists one item, rejects every write with 400 and counts writes.
    fn rejecting_server(writes: Arc<AtomicUsize>) -> Router {
        let post_writes = writes.clone();
        let put_writes = writes.clone();
        Router::new()
            .route(
                "/api/entities",
                get(|| async { Json(vec![sample()]) }).post(move || {
                    post_writes.fetch_add(1, Ordering::SeqCst);
                    async { StatusCode::BAD_REQUEST }
                }),
            )
            .route(
                "/api/entities/{id}",
                get(|| async { Json(sample()) })
                    .put(move || {
                        put_writes.fetch_add(1, Ordering::SeqCst);
                        async { StatusCode::BAD_REQUEST }
                    })
                    .delete(move || {
                        writes.fetch_add(1, Ordering::SeqCst);
                        async { StatusCode::NOT_FOUND }
                    }),
            )
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_list() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = Router::new().route(
            "/api/entities",
            get(move || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        serde_json::to_string(&vec![sample()]).unwrap()
                    } else {
                        "not json".to_string()
                    }
                }
            }),
        );
        let mut session = serve(app).await;

        session.load().await.unwrap();
        let before = session.list().cloned();

        let err = session.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)), "{err:?}");
        assert_eq!(session.list().cloned(), before);
        let notice = session.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Error loading menu items!");
    }

    #[tokio::test]
    async fn test_create_rejected_posts_failure_notice() {
        let writes = Arc::new(AtomicUsize::new(0));
        let mut session = serve(rejecting_server(writes.clone())).await;
        session.load().await.unwrap();

        let err = session.create(form("-3")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Status(400)));
        assert_eq!(writes.load(Ordering::SeqCst), 1);
        assert_eq!(
            session.notice().unwrap().message,
            "Failed to add menu item. Check if price is valid."
        );
        assert_eq!(session.list().unwrap().items(), &[sample()]);
    }

    #[tokio::test]
    async fn test_create_with_unparsable_price_sends_nothing() {
        let writes = Arc::new(AtomicUsize::new(0));
        let mut session = serve(rejecting_server(writes.clone())).await;

        let err = session.create(form("nine")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(writes.load(Ordering::SeqCst), 0);
        assert!(session.notice().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_update_requires_open_edit_view() {
        let writes = Arc::new(AtomicUsize::new(0));
        let mut session = serve(rejecting_server(writes.clone())).await;

        let err = session.update(form("1")).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotEditing));
        assert_eq!(writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_edit_view_open() {
        let writes = Arc::new(AtomicUsize::new(0));
        let mut session = serve(rejecting_server(writes.clone())).await;

        let form = session.open_edit(1).await.unwrap();
        assert_eq!(form.name, "Caesar Salad");
        assert!(session.edit_view().is_open());

        session.update(form).await.unwrap_err();
        assert!(session.edit_view().is_open());
        assert_eq!(session.notice().unwrap().message, "Failed to update menu item!");

        session.cancel_edit();
        assert!(!session.edit_view().is_open());
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let writes = Arc::new(AtomicUsize::new(0));
        let mut session = serve(rejecting_server(writes.clone())).await;

        let deleted = session.delete(1, |_| false).await.unwrap();
        assert!(!deleted);
        assert_eq!(writes.load(Ordering::SeqCst), 0);
        assert!(session.notice().is_none());
    }

    #[tokio::test]
    async fn test_failed_delete_posts_notice() {
        let writes = Arc::new(AtomicUsize::new(0));
        let mut session = serve(rejecting_server(writes.clone())).await;

        let err = session.delete(9, |_| true).await.unwrap_err();
        assert!(matches!(err, CatalogError::Status(404)));
        assert_eq!(session.notice().unwrap().message, "Failed to delete menu item!");
    }

    #[tokio::test]
    async fn test_update_success_closes_edit_view() {
        let app = Router::new()
            .route("/api/entities", get(|| async { Json(vec![sample()]) }))
            .route(
                "/api/entities/{id}",
                put(|| async { StatusCode::OK }).get(|| async { Json(sample()) }),
            );
        let mut session = serve(app).await;

        let form = session.open_edit(1).await.unwrap();
        session.update(form).await.unwrap();

        assert!(!session.edit_view().is_open());
        assert!(session.list().is_some());
        assert_eq!(
            session.notice().unwrap().message,
            "Menu item updated successfully!"
        );
    }

    #[tokio::test]
    async fn test_load_error_status_keeps_previous_list() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = Router::new().route(
            "/api/entities",
            get(move || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Json(vec![sample()]).into_response()
                    } else {
                        StatusCode::INTERNAL_SERVER_ERROR.into_response()
                    }
                }
            }),
        );
        let mut session = serve(app).await;
        session.load().await.unwrap();

        let err = session.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status(500)), "{err:?}");
        assert_eq!(session.list().unwrap().items(), &[sample()]);
        assert_eq!(
            session.notice().unwrap().message,
            "Error loading menu items!"
        );
    }

    #[tokio::test]
    async fn test_load_accepts_null_text_fields() {
        let app = Router::new().route(
            "/api/entities",
            get(|| async {
                r#"[{"id":1,"name":"Tea","description":null,"price":2.0,"category":null}]"#
            }),
        );
        let mut session = serve(app).await;

        let view = session.load().await.unwrap();
        let items = view.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Tea");
        assert_eq!(items[0].description, "");
        assert_eq!(items[0].category, "");
        assert!(session.notice().is_none());
    }

    #[tokio::test]
    async fn test_update_after_server_stops_is_transport_error() {
        let app = Router::new()
            .route("/api/entities", get(|| async { Json(vec![sample()]) }))
            .route("/api/entities/{id}", get(|| async { Json(sample()) }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = stop_rx.await;
                })
                .await
                .unwrap()
        });
        let mut session =
            CatalogSession::new(CatalogClient::new(format!("http://{}/api/entities", addr)));

        let form = session.open_edit(1).await.unwrap();
        stop_tx.send(()).unwrap();
        server.await.unwrap();

        let err = session.update(form).await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert!(session.edit_view().is_open());
        assert_eq!(session.notice().unwrap().message, "Error updating menu item!");
    }

    #[tokio::test]
    async fn test_delete_unreachable_posts_transport_notice() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let mut session =
            CatalogSession::new(CatalogClient::new(format!("http://{}/api/entities", addr)));

        let err = session.delete(1, |_| true).await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(session.notice().unwrap().message, "Error deleting menu item!");
    }
}
