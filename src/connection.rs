//! Relation management for the schema diagram.
//!
//! This module provides [`ConnectionManager`], which keeps the logical
//! foreign-key relations and their rendered connector paths in sync with
//! current card positions.
//!
//! # Example
//!
//! ```ignore
//! use slint_schema_diagram::{ConnectionManager, DragTracker, SimpleRelation};
//!
//! // Set up position tracking
//! let tracker = DragTracker::new();
//! window.on_card_drag_moved(tracker.drag_moved_callback());
//!
//! // Set up relation management
//! let mut connections = ConnectionManager::new(tracker.registry());
//! connections.add(SimpleRelation::with_default_color(1, "users", 55.0, "posts", 90.0));
//!
//! // Bind to Slint once - auto-syncs on every update_paths call
//! let model = Rc::new(VecModel::<ConnectorData>::default());
//! connections.bind_model(model.clone(), |id, commands, color| ConnectorData {
//!     id,
//!     commands,
//!     color,
//! });
//! window.set_connectors(ModelRc::from(model));
//!
//! // Recompute whenever a card moves
//! connections.update_paths();
//! ```

use crate::path::{build_connector_path, AnchorRole, ConnectorPath};
use crate::registry::TableRegistry;
use log::{error, trace};
use slint::{Color, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

/// Trait for relation data used by [`ConnectionManager`].
///
/// Implement this for your relation type if it carries extra fields; use
/// [`SimpleRelation`] otherwise.
///
/// The row offsets are design constants naming which field row the curve
/// attaches to, measured from the card top. They are configuration per
/// relation, not derived from rendered field layout.
pub trait RelationModel {
    /// Unique identifier for the relation
    fn id(&self) -> i32;
    /// Table the curve departs from (the referenced table)
    fn source_table(&self) -> &str;
    /// Table the curve arrives at (the referencing table)
    fn target_table(&self) -> &str;
    /// Vertical offset of the referenced field's row on the source card
    fn source_row_offset(&self) -> f32;
    /// Vertical offset of the referencing field's row on the target card
    fn target_row_offset(&self) -> f32;
    /// Color for rendering the curve (default: white)
    fn color(&self) -> Color {
        Color::from_rgb_u8(255, 255, 255)
    }
}

/// Simple relation data structure implementing [`RelationModel`].
#[derive(Clone, Debug)]
pub struct SimpleRelation {
    pub id: i32,
    pub source_table: String,
    pub source_row_offset: f32,
    pub target_table: String,
    pub target_row_offset: f32,
    pub color: Color,
}

impl SimpleRelation {
    /// Create a new relation with the specified endpoints and color.
    pub fn new(
        id: i32,
        source_table: impl Into<String>,
        source_row_offset: f32,
        target_table: impl Into<String>,
        target_row_offset: f32,
        color: Color,
    ) -> Self {
        Self {
            id,
            source_table: source_table.into(),
            source_row_offset,
            target_table: target_table.into(),
            target_row_offset,
            color,
        }
    }

    /// Create a new relation with default white color.
    pub fn with_default_color(
        id: i32,
        source_table: impl Into<String>,
        source_row_offset: f32,
        target_table: impl Into<String>,
        target_row_offset: f32,
    ) -> Self {
        Self::new(
            id,
            source_table,
            source_row_offset,
            target_table,
            target_row_offset,
            Color::from_rgb_u8(255, 255, 255),
        )
    }
}

impl RelationModel for SimpleRelation {
    fn id(&self) -> i32 {
        self.id
    }
    fn source_table(&self) -> &str {
        &self.source_table
    }
    fn target_table(&self) -> &str {
        &self.target_table
    }
    fn source_row_offset(&self) -> f32 {
        self.source_row_offset
    }
    fn target_row_offset(&self) -> f32 {
        self.target_row_offset
    }
    fn color(&self) -> Color {
        self.color
    }
}

/// Internal trait for auto-syncing to Slint models.
trait ModelSyncer {
    fn sync(&self, paths: &[ConnectorPathData]);
}

/// Concrete implementation of ModelSyncer for a specific item type.
struct ConcreteModelSyncer<P, F> {
    model: Rc<VecModel<P>>,
    constructor: F,
}

impl<P, F> ModelSyncer for ConcreteModelSyncer<P, F>
where
    P: Clone + 'static,
    F: Fn(i32, SharedString, Color) -> P,
{
    fn sync(&self, paths: &[ConnectorPathData]) {
        use slint::Model;

        // Update existing rows or add new ones
        for (i, path) in paths.iter().enumerate() {
            let item = (self.constructor)(
                path.id,
                SharedString::from(path.path_commands.as_str()),
                path.color,
            );
            if i < self.model.row_count() {
                self.model.set_row_data(i, item);
            } else {
                self.model.push(item);
            }
        }
        // Remove excess rows
        while self.model.row_count() > paths.len() {
            self.model.remove(self.model.row_count() - 1);
        }
    }
}

/// Internal representation of a computed connector.
#[derive(Clone)]
struct ConnectorPathData {
    id: i32,
    path_commands: String,
    color: Color,
}

/// Manages relations and their rendered connector paths.
///
/// `ConnectionManager` keeps a collection of relations and recomputes each
/// one's bezier path from the current card positions in the shared
/// registry. The path of a relation is a pure function of its two anchor
/// points; the manager only caches the most recent result for rendering.
///
/// # Type Parameters
///
/// - `R`: The relation data type, must implement [`RelationModel`]
pub struct ConnectionManager<R> {
    /// The logical relation data
    relations: Vec<R>,
    /// Reference to the registry for anchor lookups
    registry: Rc<RefCell<TableRegistry>>,
    /// The computed paths for Slint binding
    paths: Rc<RefCell<Vec<ConnectorPathData>>>,
    /// Optional auto-sync to a Slint model
    syncer: Option<Box<dyn ModelSyncer>>,
}

impl<R> ConnectionManager<R>
where
    R: RelationModel,
{
    /// Create a new ConnectionManager over the given registry.
    pub fn new(registry: Rc<RefCell<TableRegistry>>) -> Self {
        Self {
            relations: Vec::new(),
            registry,
            paths: Rc::new(RefCell::new(Vec::new())),
            syncer: None,
        }
    }

    /// Bind to a Slint model for automatic synchronization.
    ///
    /// After binding, every call to [`update_paths`](Self::update_paths)
    /// automatically updates the Slint model.
    ///
    /// # Arguments
    ///
    /// * `model` - The VecModel to sync to
    /// * `constructor` - Function creating items from (id, path_commands, color)
    pub fn bind_model<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(i32, SharedString, Color) -> P + 'static,
    {
        self.syncer = Some(Box::new(ConcreteModelSyncer { model, constructor }));
    }

    /// Add a relation to the manager.
    ///
    /// Its visual path is computed on the next call to [`update_paths`](Self::update_paths).
    pub fn add(&mut self, relation: R) {
        self.relations.push(relation);
    }

    /// Remove a relation by ID.
    ///
    /// Returns `true` if a relation was removed.
    pub fn remove(&mut self, id: i32) -> bool {
        let len_before = self.relations.len();
        self.relations.retain(|r| r.id() != id);
        self.relations.len() != len_before
    }

    /// Remove all relations.
    pub fn clear(&mut self) {
        self.relations.clear();
        self.paths.borrow_mut().clear();
    }

    /// Get the number of relations.
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Check if there are no relations.
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Get a reference to the relations.
    pub fn relations(&self) -> &[R] {
        &self.relations
    }

    /// Get an iterator over relation IDs.
    pub fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.relations.iter().map(|r| r.id())
    }

    /// Find a relation by ID.
    pub fn find(&self, id: i32) -> Option<&R> {
        self.relations.iter().find(|r| r.id() == id)
    }

    /// Compute the connector curve for one relation from current positions.
    ///
    /// Returns `None` if either endpoint table is not registered.
    pub fn connector_path(&self, id: i32) -> Option<ConnectorPath> {
        let relation = self.find(id)?;
        let registry = self.registry.borrow();

        let source = registry
            .anchor(
                relation.source_table(),
                AnchorRole::Source,
                relation.source_row_offset(),
            )
            .ok()?;
        let target = registry
            .anchor(
                relation.target_table(),
                AnchorRole::Target,
                relation.target_row_offset(),
            )
            .ok()?;

        Some(build_connector_path(source, target))
    }

    /// Current curves of all resolvable relations, for hit testing.
    pub fn connector_paths(&self) -> Vec<(i32, ConnectorPath)> {
        self.relations
            .iter()
            .filter_map(|r| Some((r.id(), self.connector_path(r.id())?)))
            .collect()
    }

    /// Recompute all connector paths from current card positions.
    ///
    /// Call this whenever a card moves or relations are added/removed. A
    /// relation whose endpoint table is missing from the registry is an
    /// integration bug: it is logged and produces no path.
    pub fn update_paths(&mut self) {
        let registry = self.registry.borrow();
        let mut paths = self.paths.borrow_mut();
        paths.clear();

        for relation in &self.relations {
            let source = registry.anchor(
                relation.source_table(),
                AnchorRole::Source,
                relation.source_row_offset(),
            );
            let target = registry.anchor(
                relation.target_table(),
                AnchorRole::Target,
                relation.target_row_offset(),
            );

            match (source, target) {
                (Ok(source), Ok(target)) => {
                    let path = build_connector_path(source, target);
                    trace!(
                        "relation {} path {} -> {}",
                        relation.id(),
                        relation.source_table(),
                        relation.target_table()
                    );
                    paths.push(ConnectorPathData {
                        id: relation.id(),
                        path_commands: path.to_svg_commands(),
                        color: relation.color(),
                    });
                }
                (Err(err), _) | (_, Err(err)) => {
                    error!("relation {} skipped: {}", relation.id(), err);
                }
            }
        }

        // Auto-sync to bound model if present
        if let Some(syncer) = &self.syncer {
            syncer.sync(&paths);
        }
    }

    /// The most recently computed path commands, as (id, commands) pairs.
    pub fn path_commands(&self) -> Vec<(i32, String)> {
        self.paths
            .borrow()
            .iter()
            .map(|p| (p.id, p.path_commands.clone()))
            .collect()
    }
}
