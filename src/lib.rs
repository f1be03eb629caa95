//! # Project Board Core
//!
//! State and validation logic for a drag-and-drop project board with
//! active, in-progress and finished columns.
//!
//! The crate owns the authoritative project list ([`ProjectState`]),
//! validates form input against declarative rules ([`validation`]), and
//! offers headless components that turn submits and drops into store
//! mutations and render-ready views. Drawing those views is left to the
//! embedder.
//!
//! ```
//! use project_board::{ProjectInfo, ProjectState, ProjectStatus};
//!
//! let mut state = ProjectState::new();
//! state.add_listener(|projects| println!("{} projects", projects.len()));
//!
//! let id = state.add_project(ProjectInfo::new("Board", "Drag and drop", 2));
//! state.move_project(&id, ProjectStatus::Finished);
//!
//! assert_eq!(state.get(&id).unwrap().status, ProjectStatus::Finished);
//! ```

pub mod components;
pub mod domain;
pub mod error;
pub mod state;
pub mod validation;

// Re-export commonly used types
pub use components::{App, Component, ProjectForm, ProjectItem, ProjectList};
pub use domain::{BoardConfig, Column, Project, ProjectId, ProjectInfo, ProjectStatus};
pub use error::{BoardError, Result};
pub use state::{MoveOutcome, ProjectState};
pub use validation::{validate, FieldRule, FieldValue, FormRules, FormValues};
