//! In-memory menu item storage for the catalog server.
//!
//! Items live in an ordered map keyed by id, so listings come back in
//! creation order. Ids come from a counter starting at 1 and are never
//! reused.

use menucat_core::{MenuItem, MenuItemDraft};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

#[derive(Debug)]
pub struct MenuItemRepository {
    items: RwLock<BTreeMap<i64, MenuItem>>,
    next_id: AtomicI64,
}

impl MenuItemRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Creates a repository holding the three sample dishes.
    pub async fn seeded() -> Self {
        let repo = Self::new();
        for draft in sample_items() {
            repo.insert(draft).await;
        }
        repo
    }

    /// Stores a new item under a fresh id.
    pub async fn insert(&self, draft: MenuItemDraft) -> MenuItem {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = MenuItem::from_draft(id, draft);
        self.items.write().await.insert(id, item.clone());
        item
    }

    /// Overwrites the fields of an existing item. Returns `None` if `id` is unknown.
    pub async fn replace(&self, id: i64, draft: MenuItemDraft) -> Option<MenuItem> {
        let mut items = self.items.write().await;
        let slot = items.get_mut(&id)?;
        *slot = MenuItem::from_draft(id, draft);
        Some(slot.clone())
    }

    pub async fn find_by_id(&self, id: i64) -> Option<MenuItem> {
        self.items.read().await.get(&id).cloned()
    }

    pub async fn find_all(&self) -> Vec<MenuItem> {
        self.items.read().await.values().cloned().collect()
    }

    pub async fn exists(&self, id: i64) -> bool {
        self.items.read().await.contains_key(&id)
    }

    /// Removes an item. Returns whether it existed.
    pub async fn remove(&self, id: i64) -> bool {
        self.items.write().await.remove(&id).is_some()
    }
}

impl Default for MenuItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_items() -> Vec<MenuItemDraft> {
    vec![
        MenuItemDraft::new("Margherita Pizza", 12.99)
            .with_description("Classic pizza with tomato sauce, mozzarella, and fresh basil")
            .with_category("Main Course"),
        MenuItemDraft::new("Caesar Salad", 8.99)
            .with_description("Crisp romaine lettuce with parmesan cheese and croutons")
            .with_category("Appetizer"),
        MenuItemDraft::new("Grilled Salmon", 18.99)
            .with_description("Fresh Atlantic salmon with lemon butter sauce and vegetables")
            .with_category("Main Course"),
    ]
}
