//! Domain types representing transaction categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// Icon identifier applied when a category does not specify one.
pub const DEFAULT_ICON: &str = "category";

/// Color applied when a category does not specify one.
pub const DEFAULT_COLOR: &str = "#1976d2";

/// Labels ledger activity for grouping and reporting.
///
/// The icon is an opaque semantic identifier resolved by the presentation
/// layer; the color is a `#RRGGBB` hex string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Category {
    /// Creates an unassigned category carrying the default icon and color.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            icon: DEFAULT_ICON.into(),
            color: DEFAULT_COLOR.into(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl Identifiable for Category {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.icon)
    }
}
