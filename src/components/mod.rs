//! Headless presentation components.
//!
//! Components produce plain view structs instead of touching a document
//! tree. Each one is wired to the store once through [`Component::configure`]
//! and turned into a view with [`Component::render`].

use crate::domain::{BoardConfig, ProjectStatus};
use crate::state::ProjectState;

pub mod form;
pub mod item;
pub mod list;

pub use form::{FormFields, FormView, ProjectForm};
pub use item::{DragPayload, ItemView, ProjectItem, DRAG_MIME};
pub use list::{ListView, ProjectList};

pub trait Component {
    type View;

    /// Registers whatever listeners the component needs
    fn configure(&mut self, _state: &mut ProjectState) {}

    fn render(&self) -> Self::View;
}

/// The form and one list per configured column, wired to a store
#[derive(Debug)]
pub struct App {
    pub form: ProjectForm,
    pub lists: Vec<ProjectList>,
}

impl App {
    pub fn new(config: &BoardConfig, state: &mut ProjectState) -> Self {
        let mut form = ProjectForm::new(config.form_rules.clone());
        form.configure(state);

        let lists = config
            .columns
            .iter()
            .cloned()
            .map(|column| {
                let mut list = ProjectList::new(column);
                list.configure(state);
                list
            })
            .collect();

        Self { form, lists }
    }

    pub fn list(&self, status: ProjectStatus) -> Option<&ProjectList> {
        self.lists.iter().find(|list| list.status() == status)
    }

    pub fn list_mut(&mut self, status: ProjectStatus) -> Option<&mut ProjectList> {
        self.lists.iter_mut().find(|list| list.status() == status)
    }

    pub fn render_lists(&self) -> Vec<ListView> {
        self.lists.iter().map(|list| list.render()).collect()
    }
}
