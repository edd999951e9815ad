//! Text rendering for the catalog views.

use menucat_core::{ListView, MenuItem, Notice, Theme};

const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 16;

/// Shown instead of a table when the collection is empty.
pub const EMPTY_STATE: &str = "🍽️  No menu items yet. Add your first delicious item with `menucat item create`!";

pub fn render_header(theme: Theme) -> String {
    format!("Menu Catalog  [{} {}]", theme.icon(), theme)
}

/// Renders the list view: a table of items, or the empty-state line.
pub fn render_list(view: &ListView) -> String {
    let items = match view {
        ListView::Empty => return EMPTY_STATE.to_string(),
        ListView::Items(items) => items,
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{:>5}  {:<name$}  {:<cat$}  {:>10}\n",
        "ID",
        "NAME",
        "CATEGORY",
        "PRICE",
        name = NAME_WIDTH,
        cat = CATEGORY_WIDTH
    ));
    out.push_str(&"-".repeat(5 + 2 + NAME_WIDTH + 2 + CATEGORY_WIDTH + 2 + 10));
    out.push('\n');
    for item in items {
        out.push_str(&render_row(item));
        out.push('\n');
    }
    out.push_str(&format!("\nTotal: {} item(s)", items.len()));
    out
}

fn render_row(item: &MenuItem) -> String {
    format!(
        "{:>5}  {:<name$}  {:<cat$}  {:>10}",
        item.id,
        truncate(&item.name, NAME_WIDTH),
        truncate(&item.category, CATEGORY_WIDTH),
        item.display_price(),
        name = NAME_WIDTH,
        cat = CATEGORY_WIDTH
    )
}

pub fn render_notice(notice: &Notice) -> String {
    notice.to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width - 3).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
