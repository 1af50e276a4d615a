//! Document model: columns, items, and the board snapshot that owns them.
//!
//! Items live in a single global sequence rather than one list per column.
//! A column's displayed order is the global order filtered by `column_id`.
//! Every change replaces a collection wholesale and bumps its revision, so a
//! renderer can compare revisions to decide whether to redraw.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier shared by columns and items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for Id {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// A named column on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique across all columns.
    pub id: Id,
    /// Heading shown above the column.
    pub title: String,
}

impl Column {
    #[must_use]
    pub fn new(id: impl Into<Id>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into() }
    }
}

/// A unit of work placed in a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique across all items.
    pub id: Id,
    /// The column this item is displayed in.
    #[serde(alias = "column_id")]
    pub column_id: Id,
    /// Free-form card text.
    pub content: String,
}

impl Item {
    #[must_use]
    pub fn new(id: impl Into<Id>, column_id: impl Into<Id>, content: impl Into<String>) -> Self {
        Self { id: id.into(), column_id: column_id.into(), content: content.into() }
    }

    /// A copy of this item reassigned to `column_id`; `self` is left untouched.
    #[must_use]
    pub fn in_column(&self, column_id: &Id) -> Self {
        Self { column_id: column_id.clone(), ..self.clone() }
    }
}

/// Snapshot of both ordered collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
    items: Vec<Item>,
    #[serde(skip)]
    columns_revision: u64,
    #[serde(skip)]
    items_revision: u64,
}

impl Board {
    /// Build a board from caller-supplied data. Use [`crate::seed::validate`]
    /// when the data comes from an untrusted source.
    #[must_use]
    pub fn new(columns: Vec<Column>, items: Vec<Item>) -> Self {
        Self { columns, items, columns_revision: 0, items_revision: 0 }
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Incremented each time the column sequence is replaced.
    #[must_use]
    pub fn columns_revision(&self) -> u64 {
        self.columns_revision
    }

    /// Incremented each time the item sequence is replaced.
    #[must_use]
    pub fn items_revision(&self) -> u64 {
        self.items_revision
    }

    /// Column ids in display order.
    #[must_use]
    pub fn column_ids(&self) -> Vec<&Id> {
        self.columns.iter().map(|c| &c.id).collect()
    }

    #[must_use]
    pub fn column(&self, id: &Id) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    #[must_use]
    pub fn item(&self, id: &Id) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    #[must_use]
    pub fn column_position(&self, id: &Id) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    #[must_use]
    pub fn item_position(&self, id: &Id) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }

    /// The items displayed in `column_id`, in board order.
    #[must_use]
    pub fn items_in(&self, column_id: &Id) -> Vec<&Item> {
        self.items.iter().filter(|i| &i.column_id == column_id).collect()
    }

    /// A new board with `columns` installed and the column revision bumped.
    #[must_use]
    pub fn with_columns(&self, columns: Vec<Column>) -> Self {
        Self {
            columns,
            items: self.items.clone(),
            columns_revision: self.columns_revision.wrapping_add(1),
            items_revision: self.items_revision,
        }
    }

    /// A new board with `items` installed and the item revision bumped.
    #[must_use]
    pub fn with_items(&self, items: Vec<Item>) -> Self {
        Self {
            columns: self.columns.clone(),
            items,
            columns_revision: self.columns_revision,
            items_revision: self.items_revision.wrapping_add(1),
        }
    }
}
