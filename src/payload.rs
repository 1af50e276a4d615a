//! Drag descriptors and the draggable-data guard.
//!
//! A host attaches a JSON payload to every drag source and drop target. The
//! payload stays raw inside [`Draggable`] until [`draggable_data`] checks it,
//! so a descriptor coming from an unrelated widget (or a half-built one) is
//! representable and rejected at the boundary rather than at deserialization.
//!
//! Accepted shapes:
//!
//! ```json
//! { "type": "Column", "column": { "id": "todo", "title": "Todo" } }
//! { "type": "Item", "item": { "id": "t1", "columnId": "todo", "content": "..." } }
//! ```
//!
//! `"Task"` / `"task"` are accepted in place of `"Item"` / `"item"`.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::doc::{Column, Id, Item};
use crate::error::PayloadError;

/// Which kind of entity a payload carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragKind {
    Column,
    Item,
}

/// A validated payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DragData {
    Column { column: Column },
    Item { item: Item },
}

impl DragData {
    #[must_use]
    pub fn kind(&self) -> DragKind {
        match self {
            Self::Column { .. } => DragKind::Column,
            Self::Item { .. } => DragKind::Item,
        }
    }

    /// Id of the carried entity.
    #[must_use]
    pub fn id(&self) -> &Id {
        match self {
            Self::Column { column } => &column.id,
            Self::Item { item } => &item.id,
        }
    }
}

/// A drag source or drop target as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draggable {
    /// Sortable id of the element; equal to the carried entity's id.
    pub id: Id,
    /// Raw payload attached by the host, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Draggable {
    /// Descriptor for a column element.
    #[must_use]
    pub fn column(column: &Column) -> Self {
        Self {
            id: column.id.clone(),
            data: Some(serde_json::json!({ "type": "Column", "column": column })),
        }
    }

    /// Descriptor for an item card.
    #[must_use]
    pub fn item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            data: Some(serde_json::json!({ "type": "Item", "item": item })),
        }
    }

    /// Descriptor with no payload attached.
    #[must_use]
    pub fn bare(id: impl Into<Id>) -> Self {
        Self { id: id.into(), data: None }
    }
}

/// Check `entry` and return its payload.
///
/// # Errors
///
/// - [`PayloadError::Missing`] when no data is attached.
/// - [`PayloadError::UnknownKind`] when the `type` tag is absent or unrecognized.
/// - [`PayloadError::Malformed`] when the entity field does not parse.
pub fn draggable_data(entry: &Draggable) -> Result<DragData, PayloadError> {
    let Some(data) = entry.data.as_ref() else {
        return Err(PayloadError::Missing { id: entry.id.clone() });
    };

    let tag = data.get("type").and_then(Value::as_str);
    let malformed = |source| PayloadError::Malformed { id: entry.id.clone(), source };

    match tag {
        Some("Column") => {
            let raw = data.get("column").cloned().unwrap_or(Value::Null);
            let column = serde_json::from_value::<Column>(raw).map_err(malformed)?;
            Ok(DragData::Column { column })
        }
        Some("Item" | "Task") => {
            let raw = data
                .get("item")
                .or_else(|| data.get("task"))
                .cloned()
                .unwrap_or(Value::Null);
            let item = serde_json::from_value::<Item>(raw).map_err(malformed)?;
            Ok(DragData::Item { item })
        }
        other => Err(PayloadError::UnknownKind {
            id: entry.id.clone(),
            tag: other.unwrap_or("<none>").to_owned(),
        }),
    }
}

/// Whether `entry` is present and carries a well-formed payload.
#[must_use]
pub fn has_draggable_data(entry: Option<&Draggable>) -> bool {
    entry.is_some_and(|e| draggable_data(e).is_ok())
}
