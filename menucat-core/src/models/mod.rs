mod menu_item;

pub use menu_item::{parse_price, MenuItem, MenuItemDraft, MenuItemForm};
