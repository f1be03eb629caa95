//! The observable project store.
//!
//! [`ProjectState`] owns the only authoritative list of projects. Every
//! mutation goes through it, and every mutation that changes something is
//! followed by a synchronous broadcast of the full project list to all
//! registered listeners, in registration order.
//!
//! The store is constructed explicitly and handed around by `&mut`. Because a
//! mutation holds the exclusive borrow while listeners run, a listener cannot
//! reach back into the store during notification.

use crate::{
    domain::{Project, ProjectId, ProjectInfo, ProjectStatus},
    error::{BoardError, Result},
};
use tracing::debug;

pub mod listeners;

pub use listeners::{Listener, Listeners};

/// Result of a status change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The project changed columns and listeners were notified
    Moved,
    /// The project was already in the requested column
    Unchanged,
}

/// In-memory store of projects with snapshot listeners
#[derive(Debug, Default)]
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Listeners<Project>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for the lifetime of the store.
    ///
    /// The listener is not called on registration; it first fires on the
    /// next mutation.
    pub fn add_listener(&mut self, listener: impl FnMut(&[Project]) + 'static) {
        self.listeners.add(listener);
    }

    /// Creates an active project, appends it and notifies listeners
    pub fn add_project(&mut self, info: ProjectInfo) -> ProjectId {
        let project = Project::new(ProjectId::new(), info);
        let id = project.id;
        debug!(project_id = %id, title = %project.title, "project added");

        self.projects.push(project);
        self.notify_listeners();
        id
    }

    /// Moves a project to `status`.
    ///
    /// Unknown ids and moves to the current status are ignored without
    /// notifying anyone.
    pub fn move_project(&mut self, id: &ProjectId, status: ProjectStatus) {
        // Unknown ids are ignored here; callers wanting to know use try_move_project
        let _ = self.try_move_project(id, status);
    }

    /// Like [`move_project`](Self::move_project), but reports what happened
    pub fn try_move_project(&mut self, id: &ProjectId, status: ProjectStatus) -> Result<MoveOutcome> {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) else {
            debug!(project_id = %id, "move ignored, project not found");
            return Err(BoardError::ProjectNotFound(id.to_string()));
        };

        let from = project.status;
        if !project.set_status(status) {
            debug!(project_id = %id, %status, "move ignored, status unchanged");
            return Ok(MoveOutcome::Unchanged);
        }

        debug!(project_id = %id, %from, to = %status, "project moved");
        self.notify_listeners();
        Ok(MoveOutcome::Moved)
    }

    /// All projects in creation order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Copies of the projects currently in `status`, in creation order
    pub fn by_status(&self, status: ProjectStatus) -> Vec<Project> {
        filter_by_status(&self.projects, status)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify_listeners(&mut self) {
        debug!(
            listeners = self.listeners.len(),
            projects = self.projects.len(),
            "notifying listeners"
        );
        let snapshot = self.projects.clone();
        self.listeners.notify(&snapshot);
    }
}

/// Projects of `snapshot` in `status`, preserving order
pub fn filter_by_status(snapshot: &[Project], status: ProjectStatus) -> Vec<Project> {
    snapshot
        .iter()
        .filter(|p| p.status == status)
        .cloned()
        .collect()
}
