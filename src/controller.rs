//! High-level controller for schema diagram applications.
//!
//! The [`SchemaDiagramController`] reduces boilerplate by managing the
//! table registry, connector recomputation, and inspector state in one
//! place.
//!
//! # Example
//!
//! ```ignore
//! use slint_schema_diagram::{SchemaDiagramController, SimpleRelation, TableSchema};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = SchemaDiagramController::new();
//!
//!     ctrl.add_table(users_schema(), (40.0, 40.0), (224.0, 180.0)).unwrap();
//!     ctrl.add_table(posts_schema(), (320.0, 160.0), (224.0, 180.0)).unwrap();
//!     ctrl.add_relation(SimpleRelation::with_default_color(1, "users", 55.0, "posts", 90.0));
//!
//!     // Core callbacks - controller handles the logic
//!     window.on_card_drag_started(ctrl.drag_started_callback());
//!     window.on_card_drag_moved(ctrl.drag_moved_callback());
//!     window.on_card_drag_ended(ctrl.drag_ended_callback());
//!     window.on_compute_connector_path(ctrl.connection_path_callback());
//!
//!     // Inspector panel
//!     window.on_field_clicked(ctrl.field_clicked_callback());
//!     window.on_sidebar_closed(ctrl.sidebar_closed_callback());
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::connection::{ConnectionManager, SimpleRelation};
use crate::hit_test::{find_card_at, find_connector_at, find_field_row_at, RowMetrics};
use crate::inspector::{FieldInspector, FieldRef};
use crate::registry::{DiagramError, Result, TableNode, TableRegistry};
use crate::schema::{FieldSpec, TableSchema};
use log::{debug, error};
use slint::SharedString;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Controller that owns diagram state and provides callback implementations.
///
/// This provides a high-level API that handles:
/// - Table registration (geometry + schema in one step)
/// - Drag tracking with offset-from-initial position updates
/// - Connector path recomputation on every move
/// - Field inspector state for the side panel
/// - Hit-testing facades for the input layer
///
/// Clone this controller to share it across callbacks.
#[derive(Clone)]
pub struct SchemaDiagramController {
    registry: Rc<RefCell<TableRegistry>>,
    schemas: Rc<RefCell<HashMap<String, TableSchema>>>,
    connections: Rc<RefCell<ConnectionManager<SimpleRelation>>>,
    inspector: Rc<RefCell<FieldInspector>>,
    row_metrics: Rc<RefCell<RowMetrics>>,
    dragged_table: Rc<RefCell<Option<String>>>,
}

impl Default for SchemaDiagramController {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaDiagramController {
    /// Create a new controller with an empty diagram.
    pub fn new() -> Self {
        let registry = Rc::new(RefCell::new(TableRegistry::new()));
        Self {
            connections: Rc::new(RefCell::new(ConnectionManager::new(registry.clone()))),
            registry,
            schemas: Rc::new(RefCell::new(HashMap::new())),
            inspector: Rc::new(RefCell::new(FieldInspector::new())),
            row_metrics: Rc::new(RefCell::new(RowMetrics::default())),
            dragged_table: Rc::new(RefCell::new(None)),
        }
    }

    /// Register a table: its card geometry and its schema.
    ///
    /// The card id and header title come from the schema.
    pub fn add_table(
        &self,
        schema: TableSchema,
        position: (f32, f32),
        size: (f32, f32),
    ) -> Result<()> {
        let node = TableNode::new(schema.id.clone(), schema.title.clone(), position, size);
        self.registry.borrow_mut().register(node)?;
        self.schemas.borrow_mut().insert(schema.id.clone(), schema);
        Ok(())
    }

    /// Add a relation and compute its initial path.
    pub fn add_relation(&self, relation: SimpleRelation) {
        let mut connections = self.connections.borrow_mut();
        connections.add(relation);
        connections.update_paths();
    }

    /// Get access to the table registry.
    pub fn registry(&self) -> Rc<RefCell<TableRegistry>> {
        self.registry.clone()
    }

    /// Get access to the connection manager.
    pub fn connections(&self) -> Rc<RefCell<ConnectionManager<SimpleRelation>>> {
        self.connections.clone()
    }

    /// Schema of a registered table.
    pub fn schema(&self, id: &str) -> Option<TableSchema> {
        self.schemas.borrow().get(id).cloned()
    }

    /// Set the card row layout used for field hit testing (default: 40px
    /// header, 35px rows).
    pub fn set_row_metrics(&self, metrics: RowMetrics) {
        *self.row_metrics.borrow_mut() = metrics;
    }

    /// The table currently being dragged, if any.
    pub fn dragged_table(&self) -> Option<String> {
        self.dragged_table.borrow().clone()
    }

    // === Direct handlers ===

    /// Handle drag start: remember which card the gesture owns.
    pub fn handle_drag_started(&self, table_id: &str) {
        debug!("drag started on {:?}", table_id);
        *self.dragged_table.borrow_mut() = Some(table_id.to_string());
    }

    /// Handle a drag-move notification.
    ///
    /// `offset` is cumulative from drag start. Moves the card to
    /// `initial + offset` and recomputes every connector path.
    pub fn handle_drag_moved(&self, table_id: &str, offset: (f32, f32)) -> Result<()> {
        self.registry.borrow_mut().apply_drag_offset(table_id, offset)?;
        self.connections.borrow_mut().update_paths();
        Ok(())
    }

    /// Handle drag end.
    ///
    /// Has no geometric effect: the offset was already final at the last
    /// drag-move. Only releases the gesture.
    pub fn handle_drag_ended(&self) {
        debug!("drag ended");
        *self.dragged_table.borrow_mut() = None;
    }

    /// Handle a click on a field row: open the inspector on that field.
    ///
    /// Fails on an unknown table id. A row index past the table's fields
    /// is ignored.
    pub fn handle_field_clicked(&self, table_id: &str, row: usize) -> Result<()> {
        let schemas = self.schemas.borrow();
        let schema = schemas
            .get(table_id)
            .ok_or_else(|| DiagramError::UnknownTable {
                id: table_id.to_string(),
            })?;

        if let Some(field) = schema.fields.get(row) {
            self.inspector
                .borrow_mut()
                .select(table_id, field.name.clone());
        }
        Ok(())
    }

    /// Close the inspector panel.
    pub fn handle_sidebar_closed(&self) {
        self.inspector.borrow_mut().clear();
    }

    /// The field row the inspector is showing, if open.
    pub fn selected_field_ref(&self) -> Option<FieldRef> {
        self.inspector.borrow().selected().cloned()
    }

    /// The full field spec the inspector is showing, if open.
    pub fn selected_field(&self) -> Option<FieldSpec> {
        let selected = self.selected_field_ref()?;
        let schemas = self.schemas.borrow();
        schemas.get(&selected.table)?.field(&selected.field).cloned()
    }

    /// Current position of a card.
    pub fn current_position(&self, table_id: &str) -> Result<(f32, f32)> {
        self.registry.borrow().current_position(table_id)
    }

    /// Rendered path commands for one relation.
    ///
    /// Returns an empty string if the relation or one of its tables is
    /// missing; the integration error was already logged when the path was
    /// recomputed.
    pub fn connection_path(&self, relation_id: i32) -> SharedString {
        self.connections
            .borrow()
            .connector_path(relation_id)
            .map(|path| path.to_svg_commands())
            .unwrap_or_default()
            .into()
    }

    // === Hit-testing facades ===

    /// Find the field row under a point: `(table_id, row_index)`.
    pub fn find_field_at(&self, x: f32, y: f32) -> Option<(String, usize)> {
        let registry = self.registry.borrow();
        let metrics = *self.row_metrics.borrow();
        let schemas = self.schemas.borrow();

        let card = find_card_at(x, y, registry.tables())?;
        let field_count = schemas.get(&card.id).map(|s| s.fields.len()).unwrap_or(0);
        let row = find_field_row_at(x, y, card, metrics, field_count)?;
        Some((card.id.clone(), row))
    }

    /// Find the connector nearest a point, within `hover_distance`.
    pub fn find_connector_at(&self, x: f32, y: f32, hover_distance: f32) -> Option<i32> {
        let paths = self.connections.borrow().connector_paths();
        find_connector_at(x, y, paths, hover_distance, 20)
    }

    // === Callback factories ===

    /// Returns a callback for `card-drag-started`.
    pub fn drag_started_callback(&self) -> impl Fn(SharedString) {
        let ctrl = self.clone();
        move |table_id| ctrl.handle_drag_started(&table_id)
    }

    /// Returns a callback for `card-drag-moved`.
    ///
    /// The signature is `(table_id, offset_x, offset_y)` with the offset
    /// cumulative from drag start. Unknown ids are logged and leave every
    /// position unchanged.
    pub fn drag_moved_callback(&self) -> impl Fn(SharedString, f32, f32) {
        let ctrl = self.clone();
        move |table_id, dx, dy| {
            if let Err(err) = ctrl.handle_drag_moved(&table_id, (dx, dy)) {
                error!("drag-moved dropped: {}", err);
            }
        }
    }

    /// Returns a callback for `card-drag-ended`.
    pub fn drag_ended_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.handle_drag_ended()
    }

    /// Returns a callback for `compute-connector-path`.
    pub fn connection_path_callback(&self) -> impl Fn(i32) -> SharedString {
        let ctrl = self.clone();
        move |relation_id| ctrl.connection_path(relation_id)
    }

    /// Returns a callback for `field-clicked`.
    pub fn field_clicked_callback(&self) -> impl Fn(SharedString, i32) {
        let ctrl = self.clone();
        move |table_id, row| {
            if row < 0 {
                return;
            }
            if let Err(err) = ctrl.handle_field_clicked(&table_id, row as usize) {
                error!("field-clicked dropped: {}", err);
            }
        }
    }

    /// Returns a callback for `sidebar-closed`.
    pub fn sidebar_closed_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.handle_sidebar_closed()
    }
}
