use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// A catalog record as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
}

impl MenuItem {
    pub fn from_draft(id: i64, draft: MenuItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
        }
    }

    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.chars().count()))?;
        writeln!(f, "ID: {}", self.id)?;

        if !self.category.is_empty() {
            writeln!(f, "Category: {}", self.category)?;
        }
        writeln!(f, "Price: {}", self.display_price())?;

        if !self.description.is_empty() {
            writeln!(f, "\n{}", self.description)?;
        }

        Ok(())
    }
}

/// Body of a create or update request. Carries no id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItemDraft {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
}

impl MenuItemDraft {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            category: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Raw user input for the add and edit forms. The price is still text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

impl MenuItemForm {
    /// Populates a form from a fetched item, as the edit view does.
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            category: item.category.clone(),
        }
    }

    pub fn into_draft(self) -> Result<MenuItemDraft, CatalogError> {
        let price = parse_price(&self.price)?;
        Ok(MenuItemDraft {
            name: self.name,
            description: self.description,
            price,
            category: self.category,
        })
    }
}

/// Reads an absent or `null` text field as the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses a price typed by the user.
///
/// Anything that is not a finite number is rejected before a request is
/// built. Negative values pass; the server decides whether they are valid.
pub fn parse_price(text: &str) -> Result<f64, CatalogError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(CatalogError::Validation(format!(
            "price '{}' is not a number",
            trimmed
        ))),
    }
}
