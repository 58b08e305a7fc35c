//! Convenience helpers for drag tracking setup.
//!
//! This module provides [`DragTracker`], a wrapper around [`TableRegistry`]
//! that simplifies wiring up Slint callbacks for card position updates.
//!
//! # Example
//!
//! ```ignore
//! use slint_schema_diagram::DragTracker;
//!
//! let tracker = DragTracker::new();
//!
//! // Wire up the drag callback (one-time setup)
//! window.on_card_drag_moved(tracker.drag_moved_callback());
//!
//! // Get the registry for use elsewhere
//! let registry = tracker.registry();
//! ```

use crate::registry::TableRegistry;
use log::error;
use slint::SharedString;
use std::cell::RefCell;
use std::rc::Rc;

/// Wrapper for a shared [`TableRegistry`] that provides ready-to-use Slint
/// callbacks.
///
/// This eliminates the boilerplate of creating a registry, wrapping it in
/// `Rc<RefCell<_>>`, and manually wiring up the drag callback.
pub struct DragTracker {
    registry: Rc<RefCell<TableRegistry>>,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DragTracker {
    /// Create a new tracker with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(TableRegistry::new())),
        }
    }

    /// Create a tracker wrapping an existing registry.
    ///
    /// Useful when the registry is populated before callbacks are
    /// connected.
    pub fn with_registry(registry: Rc<RefCell<TableRegistry>>) -> Self {
        Self { registry }
    }

    /// Get a clone of the internal registry reference.
    pub fn registry(&self) -> Rc<RefCell<TableRegistry>> {
        self.registry.clone()
    }

    /// Get a callback for drag-move notifications.
    ///
    /// Wire this to the Slint `drag-moved` callback:
    ///
    /// ```ignore
    /// window.on_card_drag_moved(tracker.drag_moved_callback());
    /// ```
    ///
    /// The callback signature is `(table_id, offset_x, offset_y)` where the
    /// offset is cumulative from drag start, matching free-drag input. An
    /// unknown table id is an integration bug; it is logged and leaves all
    /// positions unchanged.
    pub fn drag_moved_callback(&self) -> impl Fn(SharedString, f32, f32) + Clone {
        let registry = self.registry.clone();
        move |table_id, dx, dy| {
            if let Err(err) = registry.borrow_mut().apply_drag_offset(&table_id, (dx, dy)) {
                error!("drag-moved dropped: {}", err);
            }
        }
    }
}
