//! View-layer state: list view, edit view, notices and theme.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::models::MenuItem;

/// How long a notice stays visible.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// What the item list shows after a successful load.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// The collection is empty; render the empty-state indicator.
    Empty,
    Items(Vec<MenuItem>),
}

impl ListView {
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        if items.is_empty() {
            ListView::Empty
        } else {
            ListView::Items(items)
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        match self {
            ListView::Empty => &[],
            ListView::Items(items) => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty)
    }
}

/// Edit view state. Only `Open` carries the item being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditView {
    #[default]
    Closed,
    Open(MenuItem),
}

impl EditView {
    pub fn is_open(&self) -> bool {
        matches!(self, EditView::Open(_))
    }

    pub fn item(&self) -> Option<&MenuItem> {
        match self {
            EditView::Open(item) => Some(item),
            EditView::Closed => None,
        }
    }

    pub fn open(&mut self, item: MenuItem) {
        *self = EditView::Open(item);
    }

    pub fn close(&mut self) {
        *self = EditView::Closed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message reporting the outcome of an operation.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    shown_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Error)
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    /// Whether the notice is still showing at `now`.
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < NOTICE_DURATION
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.kind {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "✗",
        };
        write!(f, "{} {}", mark, self.message)
    }
}

/// Light/dark display preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon of the toggle control: offers the sun while dark, the moon while light.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}
