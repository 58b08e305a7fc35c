//! Test harness for the schema diagram controller.
//!
//! Provides a complete setup mirroring a typical application wiring, with
//! callback tracking and helper methods for simulating user interactions.
//! The fixture is the canonical two-table diagram: "users" at (40, 40) and
//! "posts" at (320, 160), both 224x180, joined by a foreign-key relation
//! anchored 55px down the source card and 90px down the target card.

#![allow(dead_code)]

use super::CallbackTracker;
use slint::{Color, SharedString};
use slint_schema_diagram::{
    FieldSpec, SchemaDiagramController, SimpleRelation, TableSchema,
};

pub const USERS_POSITION: (f32, f32) = (40.0, 40.0);
pub const POSTS_POSITION: (f32, f32) = (320.0, 160.0);
pub const CARD_SIZE: (f32, f32) = (224.0, 180.0);
pub const SOURCE_ROW_OFFSET: f32 = 55.0;
pub const TARGET_ROW_OFFSET: f32 = 90.0;
pub const RELATION_ID: i32 = 1;

pub fn users_schema() -> TableSchema {
    TableSchema::new(
        "users",
        "public.users",
        vec![
            FieldSpec::new(
                "id",
                "uuid",
                "Unique identifier for the user. Automatically generated.",
            )
            .primary_key(),
            FieldSpec::new("email", "varchar", "User email address. Must be unique."),
            FieldSpec::new(
                "full_name",
                "text",
                "Full name of the user as displayed in profile.",
            ),
            FieldSpec::new(
                "created_at",
                "timestamptz",
                "Timestamp when the user account was created.",
            ),
        ],
    )
}

pub fn posts_schema() -> TableSchema {
    TableSchema::new(
        "posts",
        "public.posts",
        vec![
            FieldSpec::new("id", "uuid", "Unique identifier for the post.").primary_key(),
            FieldSpec::new(
                "user_id",
                "uuid",
                "Foreign key referencing public.users(id).",
            )
            .foreign_key(),
            FieldSpec::new("title", "text", "Title of the post."),
            FieldSpec::new("content", "text", "Main content body of the post."),
        ],
    )
}

/// Test harness for the schema diagram.
///
/// Sets up the two-table fixture and routes simulated interactions through
/// the controller's real callback factories, recording each call.
pub struct DiagramTestHarness {
    pub ctrl: SchemaDiagramController,
    pub tracker: CallbackTracker,
    drag_started_cb: Box<dyn Fn(SharedString)>,
    drag_moved_cb: Box<dyn Fn(SharedString, f32, f32)>,
    drag_ended_cb: Box<dyn Fn()>,
    field_clicked_cb: Box<dyn Fn(SharedString, i32)>,
    sidebar_closed_cb: Box<dyn Fn()>,
}

impl DiagramTestHarness {
    /// Create a harness with the default users/posts fixture.
    pub fn new() -> Self {
        let ctrl = SchemaDiagramController::new();
        ctrl.add_table(users_schema(), USERS_POSITION, CARD_SIZE)
            .unwrap();
        ctrl.add_table(posts_schema(), POSTS_POSITION, CARD_SIZE)
            .unwrap();
        ctrl.add_relation(SimpleRelation::new(
            RELATION_ID,
            "users",
            SOURCE_ROW_OFFSET,
            "posts",
            TARGET_ROW_OFFSET,
            Color::from_rgb_u8(100, 180, 255),
        ));

        Self::with_controller(ctrl)
    }

    /// Create a harness around an already-populated controller.
    pub fn with_controller(ctrl: SchemaDiagramController) -> Self {
        let tracker = CallbackTracker::new();

        let drag_started_cb: Box<dyn Fn(SharedString)> = {
            let inner = ctrl.drag_started_callback();
            let tracker = tracker.clone();
            Box::new(move |id: SharedString| {
                tracker.drag_started.borrow_mut().push(id.to_string());
                inner(id);
            })
        };

        let drag_moved_cb: Box<dyn Fn(SharedString, f32, f32)> = {
            let inner = ctrl.drag_moved_callback();
            let tracker = tracker.clone();
            Box::new(move |id: SharedString, dx, dy| {
                tracker
                    .drag_moved
                    .borrow_mut()
                    .push((id.to_string(), dx, dy));
                inner(id, dx, dy);
            })
        };

        let drag_ended_cb: Box<dyn Fn()> = {
            let inner = ctrl.drag_ended_callback();
            let tracker = tracker.clone();
            Box::new(move || {
                *tracker.drag_ended.borrow_mut() += 1;
                inner();
            })
        };

        let field_clicked_cb: Box<dyn Fn(SharedString, i32)> = {
            let inner = ctrl.field_clicked_callback();
            let tracker = tracker.clone();
            Box::new(move |id: SharedString, row| {
                tracker
                    .field_clicked
                    .borrow_mut()
                    .push((id.to_string(), row));
                inner(id, row);
            })
        };

        let sidebar_closed_cb: Box<dyn Fn()> = {
            let inner = ctrl.sidebar_closed_callback();
            let tracker = tracker.clone();
            Box::new(move || {
                *tracker.sidebar_closed.borrow_mut() += 1;
                inner();
            })
        };

        Self {
            ctrl,
            tracker,
            drag_started_cb,
            drag_moved_cb,
            drag_ended_cb,
            field_clicked_cb,
            sidebar_closed_cb,
        }
    }

    /// Simulate the start of a drag gesture on a card.
    pub fn drag_start(&self, table_id: &str) {
        (self.drag_started_cb)(SharedString::from(table_id));
    }

    /// Simulate one drag-move notification.
    ///
    /// The offset is cumulative from drag start, as the input layer
    /// reports it.
    pub fn drag_move(&self, table_id: &str, offset_x: f32, offset_y: f32) {
        (self.drag_moved_cb)(SharedString::from(table_id), offset_x, offset_y);
    }

    /// Simulate the end of a drag gesture.
    pub fn drag_end(&self) {
        (self.drag_ended_cb)();
    }

    /// Simulate a full drag gesture through intermediate offsets.
    pub fn drag(&self, table_id: &str, offsets: &[(f32, f32)]) {
        self.drag_start(table_id);
        for &(dx, dy) in offsets {
            self.drag_move(table_id, dx, dy);
        }
        self.drag_end();
    }

    /// Simulate a click on a field row by table and row index.
    pub fn click_field(&self, table_id: &str, row: i32) {
        (self.field_clicked_cb)(SharedString::from(table_id), row);
    }

    /// Simulate a click at canvas coordinates: hit-test for a field row
    /// and forward it. Returns true if a row was hit.
    pub fn click_at(&self, x: f32, y: f32) -> bool {
        match self.ctrl.find_field_at(x, y) {
            Some((table_id, row)) => {
                self.click_field(&table_id, row as i32);
                true
            }
            None => false,
        }
    }

    /// Simulate closing the inspector panel.
    pub fn close_sidebar(&self) {
        (self.sidebar_closed_cb)();
    }

    /// Rendered path commands for the fixture relation.
    pub fn connector_commands(&self) -> String {
        self.ctrl.connection_path(RELATION_ID).to_string()
    }
}
