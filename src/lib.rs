//! # Slint Schema Diagram Library
//!
//! A Slint component library for building interactive database schema
//! diagrams: draggable table cards connected by foreign-key curves, with a
//! field inspector side panel.
//!
//! ## Features
//!
//! - **Owned Diagram State** - Card positions and inspector state live in
//!   explicit objects, not in the UI tree
//! - **Drift-Free Dragging** - Drag offsets are cumulative from drag start,
//!   so replayed move events are idempotent
//! - **Recompute-On-Demand Connectors** - Every curve is a pure function of
//!   the two current anchor points
//! - **Callback-Based Wiring** - Controller hands ready-made closures to
//!   the Slint UI; the UI never owns geometry
//!
//! ## Quick Start
//!
//! ```ignore
//! use slint_schema_diagram::{SchemaDiagramController, SimpleRelation};
//!
//! let ctrl = SchemaDiagramController::new();
//! ctrl.add_table(users_schema(), (40.0, 40.0), (224.0, 180.0))?;
//! ctrl.add_table(posts_schema(), (320.0, 160.0), (224.0, 180.0))?;
//! ctrl.add_relation(SimpleRelation::with_default_color(1, "users", 55.0, "posts", 90.0));
//!
//! window.on_card_drag_moved(ctrl.drag_moved_callback());
//! window.on_compute_connector_path(ctrl.connection_path_callback());
//! ```
//!
//! ## Core Components
//!
//! - [`SchemaDiagramController`] - Main diagram controller
//! - [`TableRegistry`] / [`TableNode`] - Card geometry and position state
//! - [`ConnectionManager`] - Relation bookkeeping and path sync
//! - [`FieldInspector`] - Side panel selection state
//!
//! ## Rust Helpers
//!
//! This crate provides helper functions for common operations:
//!
//! - [`build_connector_path`] - Compute the bezier curve between two anchors
//! - [`distance_to_connector`] - Point-to-curve distance for hit testing
//! - [`find_card_at`] / [`find_field_row_at`] / [`find_connector_at`] -
//!   Pointer hit testing
//! - [`DragTracker`] - Ready-to-wire drag callbacks over a shared registry

pub mod connection;
pub mod controller;
pub mod inspector;
pub mod path;
pub mod registry;
pub mod schema;
pub mod tracker;

// Re-export traits and functions
pub use connection::{ConnectionManager, RelationModel, SimpleRelation};
pub use controller::SchemaDiagramController;
pub use hit_test::{find_card_at, find_connector_at, find_field_row_at, RowMetrics};
pub use inspector::{FieldInspector, FieldRef};
pub use path::{build_connector_path, distance_to_connector, AnchorRole, ConnectorPath};
pub use registry::{DiagramError, TableNode, TableRegistry};
pub use schema::{FieldSpec, TableSchema};
pub use tracker::DragTracker;
