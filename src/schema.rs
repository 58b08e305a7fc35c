//! Schema document model.
//!
//! Describes what a table card shows: the table's identity and its ordered
//! field rows. The geometry side of the diagram (card positions, connector
//! curves) lives in [`crate::registry`] and [`crate::path`]; this module is
//! the data those cards render.

use serde::{Deserialize, Serialize};

/// One field row of a table card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    /// Column type label shown next to the name (e.g. "uuid", "varchar").
    pub column_type: String,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub foreign_key: bool,
    /// Description shown in the inspector panel when the row is selected.
    pub description: String,
}

impl FieldSpec {
    pub fn new(
        name: impl Into<String>,
        column_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            primary_key: false,
            foreign_key: false,
            description: description.into(),
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn foreign_key(mut self) -> Self {
        self.foreign_key = true;
        self
    }
}

/// A table definition: stable id, display title, ordered fields.
///
/// Field order is the row order on the card, which is what the hit-test
/// row arithmetic and anchor row offsets refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub id: String,
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

impl TableSchema {
    pub fn new(id: impl Into<String>, title: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields,
        }
    }

    /// Row index of a field by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Field lookup by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
