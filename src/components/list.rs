use crate::components::item::{DragPayload, ItemView, ProjectItem, DRAG_MIME};
use crate::components::Component;
use crate::domain::{Column, Project, ProjectId, ProjectStatus};
use crate::state::{filter_by_status, ProjectState};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Render-ready view of one board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub element_id: String,
    pub list_id: String,
    pub heading: String,
    pub droppable: bool,
    pub items: Vec<ItemView>,
}

/// One board column: shows the projects in its status and accepts drops
#[derive(Debug)]
pub struct ProjectList {
    column: Column,
    projects: Rc<RefCell<Vec<Project>>>,
    droppable: bool,
}

impl ProjectList {
    pub fn new(column: Column) -> Self {
        Self {
            column,
            projects: Rc::new(RefCell::new(Vec::new())),
            droppable: false,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.column.status
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    /// Projects shown as of the last notification
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Drag-over: highlights the column and returns `true` when the drag
    /// carries a project
    pub fn on_drag_over(&mut self, mime: &str) -> bool {
        let accepted = mime == DRAG_MIME;
        if accepted {
            self.droppable = true;
        }
        accepted
    }

    pub fn on_drag_leave(&mut self) {
        self.droppable = false;
    }

    /// Moves the dragged project into this column.
    ///
    /// Payloads that do not name a project are ignored.
    pub fn on_drop(&mut self, state: &mut ProjectState, payload: &DragPayload) {
        self.droppable = false;

        if payload.mime != DRAG_MIME {
            debug!(mime = %payload.mime, "drop ignored, unsupported payload");
            return;
        }

        match payload.data.parse::<ProjectId>() {
            Ok(id) => state.move_project(&id, self.column.status),
            Err(err) => debug!(error = %err, "drop ignored"),
        }
    }
}

impl Component for ProjectList {
    type View = ListView;

    fn configure(&mut self, state: &mut ProjectState) {
        let status = self.column.status;
        let projects = Rc::clone(&self.projects);
        state.add_listener(move |snapshot: &[Project]| {
            *projects.borrow_mut() = filter_by_status(snapshot, status);
        });
    }

    fn render(&self) -> ListView {
        ListView {
            element_id: self.column.element_id(),
            list_id: self.column.list_id(),
            heading: self.column.heading(),
            droppable: self.droppable,
            items: self
                .projects
                .borrow()
                .iter()
                .map(|project| ProjectItem::new(project.clone()).render())
                .collect(),
        }
    }
}
