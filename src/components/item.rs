use crate::components::Component;
use crate::domain::{Project, ProjectId};
use serde::Serialize;

/// MIME type carried by project drags
pub const DRAG_MIME: &str = "text/plain";

/// Data attached to a drag started on a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub mime: String,
    pub data: String,
}

impl DragPayload {
    pub fn for_project(id: &ProjectId) -> Self {
        Self {
            mime: DRAG_MIME.to_string(),
            data: id.to_string(),
        }
    }
}

/// Render-ready view of one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub assigned: String,
    pub description: String,
}

/// A single draggable project entry
#[derive(Debug, Clone)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Payload to attach when the user starts dragging this item
    pub fn drag_payload(&self) -> DragPayload {
        DragPayload::for_project(&self.project.id)
    }
}

impl Component for ProjectItem {
    type View = ItemView;

    fn render(&self) -> ItemView {
        ItemView {
            id: self.project.id.to_string(),
            title: self.project.title.clone(),
            assigned: self.project.assigned_label(),
            description: self.project.description.clone(),
        }
    }
}
