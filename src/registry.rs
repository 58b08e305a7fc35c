//! Table card registry and position state.
//!
//! The registry is the single owner of diagram card state: which table
//! cards exist, where they started, and where they currently sit. All
//! position mutation goes through [`TableRegistry::apply_drag_offset`];
//! everything else only reads.

use crate::path::AnchorRole;
use log::debug;
use std::collections::HashMap;

/// Errors raised by diagram state operations.
///
/// Both variants indicate an integration bug in the calling application
/// (a reused id at setup time, or a stale id at event time) and should be
/// surfaced immediately rather than swallowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    #[error("table \"{id}\" is already registered")]
    DuplicateTable { id: String },
    #[error("unknown table \"{id}\"")]
    UnknownTable { id: String },
}

pub type Result<T> = std::result::Result<T, DiagramError>;

/// One rectangular table card in the diagram.
///
/// The initial position is fixed at registration; the current position is
/// always `initial + the most recent drag offset`, so replaying a drag
/// event is harmless and positions never accumulate drift.
#[derive(Debug, Clone, PartialEq)]
pub struct TableNode {
    pub id: String,
    /// Display name shown in the card header (e.g. "public.users").
    pub title: String,
    pub width: f32,
    pub height: f32,
    initial_x: f32,
    initial_y: f32,
    x: f32,
    y: f32,
}

impl TableNode {
    /// Create a card at its initial position. Current position starts at
    /// the initial position.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        position: (f32, f32),
        size: (f32, f32),
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            width: size.0,
            height: size.1,
            initial_x: position.0,
            initial_y: position.1,
            x: position.0,
            y: position.1,
        }
    }

    /// Current top-left corner.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Top-left corner at registration time.
    pub fn initial_position(&self) -> (f32, f32) {
        (self.initial_x, self.initial_y)
    }

    /// Current bounding rectangle as (x, y, width, height).
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Connector attachment point for the given role.
    ///
    /// Source anchors sit on the right edge, target anchors on the left
    /// edge; `row_offset` is the vertical distance from the card top to
    /// the connected field's row.
    pub fn anchor(&self, role: AnchorRole, row_offset: f32) -> (f32, f32) {
        match role {
            AnchorRole::Source => (self.x + self.width, self.y + row_offset),
            AnchorRole::Target => (self.x, self.y + row_offset),
        }
    }
}

/// Owned collection of table cards, keyed by id.
///
/// Populated once at diagram setup; cards are never removed during a
/// session.
#[derive(Default)]
pub struct TableRegistry {
    nodes: HashMap<String, TableNode>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card. Fails if the id is already taken.
    pub fn register(&mut self, node: TableNode) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(DiagramError::DuplicateTable {
                id: node.id.clone(),
            });
        }
        debug!(
            "registered table {:?} at ({}, {})",
            node.id, node.initial_x, node.initial_y
        );
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Look up a card by id.
    pub fn table(&self, id: &str) -> Result<&TableNode> {
        self.nodes.get(id).ok_or_else(|| DiagramError::UnknownTable {
            id: id.to_string(),
        })
    }

    /// Move a card to `initial + offset`.
    ///
    /// Offsets are cumulative from drag start, not incremental deltas, so
    /// applying the same offset twice leaves the card where the first
    /// application put it.
    pub fn apply_drag_offset(&mut self, id: &str, offset: (f32, f32)) -> Result<()> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| DiagramError::UnknownTable {
                id: id.to_string(),
            })?;
        node.x = node.initial_x + offset.0;
        node.y = node.initial_y + offset.1;
        debug!("table {:?} moved to ({}, {})", id, node.x, node.y);
        Ok(())
    }

    /// Current position of a card. Pure read.
    pub fn current_position(&self, id: &str) -> Result<(f32, f32)> {
        Ok(self.table(id)?.position())
    }

    /// Anchor point of a card for the given role and row offset.
    pub fn anchor(&self, id: &str, role: AnchorRole, row_offset: f32) -> Result<(f32, f32)> {
        Ok(self.table(id)?.anchor(role, row_offset))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterator over all cards, in no particular order.
    pub fn tables(&self) -> impl Iterator<Item = &TableNode> {
        self.nodes.values()
    }
}
