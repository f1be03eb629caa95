use crate::components::Component;
use crate::domain::{ProjectId, ProjectInfo};
use crate::error::{BoardError, Result};
use crate::state::ProjectState;
use crate::validation::{self, FormRules, FormValues, Violation, ViolationKind};
use serde::Serialize;
use tracing::debug;

/// Element id of the rendered form
pub const FORM_ELEMENT_ID: &str = "user-input";

/// Raw input values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl FormFields {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub element_id: String,
    pub fields: FormFields,
}

/// The new-project form
#[derive(Debug, Clone)]
pub struct ProjectForm {
    rules: FormRules,
    fields: FormFields,
}

impl ProjectForm {
    pub fn new(rules: FormRules) -> Self {
        Self {
            rules,
            fields: FormFields::default(),
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    /// Turns raw input into a validated [`ProjectInfo`].
    ///
    /// An empty people field counts as `0`; text that is not a number
    /// fails every numeric bound.
    pub fn read_info(&self, fields: &FormFields) -> Result<ProjectInfo> {
        let title = fields.title.trim();
        let description = fields.description.trim();
        let people = parse_people(&fields.people);

        let values = FormValues::new()
            .with("title", title)
            .with("description", description)
            .with("people", people);

        let mut violations = validation::check(&values, &self.rules);

        // The entity stores a head count, so fractions and negatives never fit
        let count = if people.fract() == 0.0 && people >= 0.0 && people <= f64::from(u32::MAX) {
            Some(people as u32)
        } else {
            None
        };
        if count.is_none() && !violations.iter().any(|v| v.field == "people") {
            violations.push(Violation {
                field: "people".to_string(),
                kind: ViolationKind::NotWholeNumber,
            });
        }

        match count {
            Some(count) if violations.is_empty() => {
                Ok(ProjectInfo::new(title, description, count))
            }
            _ => {
                debug!(violations = violations.len(), "form input rejected");
                Err(BoardError::ValidationFailed { violations })
            }
        }
    }

    /// Validates the current fields and adds the project.
    ///
    /// On success the fields are cleared; on failure the store is untouched
    /// and the fields keep what the user typed.
    pub fn submit(&mut self, state: &mut ProjectState) -> Result<ProjectId> {
        let info = self.read_info(&self.fields)?;
        let id = state.add_project(info);
        self.fields = FormFields::default();
        Ok(id)
    }
}

impl Component for ProjectForm {
    type View = FormView;

    fn render(&self) -> FormView {
        FormView {
            element_id: FORM_ELEMENT_ID.to_string(),
            fields: self.fields.clone(),
        }
    }
}

fn parse_people(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        0.0
    } else {
        raw.parse().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_form_rules, Project, ProjectStatus};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn form() -> ProjectForm {
        ProjectForm::new(default_form_rules())
    }

    fn violated_fields(err: BoardError) -> Vec<String> {
        match err {
            BoardError::ValidationFailed { violations } => {
                let mut fields: Vec<String> = violations.into_iter().map(|v| v.field).collect();
                fields.dedup();
                fields
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_read_info_trims_and_parses() {
        let info = form()
            .read_info(&FormFields::new("  Board ", " Drag things\n", " 3 "))
            .unwrap();
        assert_eq!(info, ProjectInfo::new("Board", "Drag things", 3));
    }

    #[test]
    fn test_read_info_rejects_blank_fields() {
        let err = form()
            .read_info(&FormFields::new("   ", "", "2"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Data is invalid, please check fields!");
        assert_eq!(violated_fields(err), vec!["title", "description"]);
    }

    #[test]
    fn test_read_info_people_bounds() {
        let f = form();
        assert!(f.read_info(&FormFields::new("T", "D", "1")).is_ok());
        assert!(f.read_info(&FormFields::new("T", "D", "7")).is_ok());

        for people in ["0", "", "8", "abc", "-1"] {
            let err = f.read_info(&FormFields::new("T", "D", people)).unwrap_err();
            assert_eq!(violated_fields(err), vec!["people"], "people = {:?}", people);
        }
    }

    #[test]
    fn test_read_info_rejects_fractional_people() {
        let err = form()
            .read_info(&FormFields::new("T", "D", "2.5"))
            .unwrap_err();
        assert_eq!(violated_fields(err), vec!["people"]);
    }

    #[test]
    fn test_read_info_without_bounds_still_needs_whole_count() {
        let f = ProjectForm::new(FormRules::new());
        assert!(f.read_info(&FormFields::new("", "", "12")).is_ok());
        assert!(f.read_info(&FormFields::new("", "", "-3")).is_err());
    }

    #[test]
    fn test_submit_adds_project_and_resets() {
        let mut state = ProjectState::new();
        let seen = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&seen);
        state.add_listener(move |_: &[Project]| *counter.borrow_mut() += 1);

        let mut f = form();
        *f.fields_mut() = FormFields::new("Board", "Drag things", "4");
        let id = f.submit(&mut state).unwrap();

        let project = state.get(&id).unwrap();
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.people, 4);
        assert_eq!(*seen.borrow(), 1);
        assert_eq!(f.fields(), &FormFields::default());
        assert_eq!(f.render().element_id, FORM_ELEMENT_ID);
    }

    #[test]
    fn test_failed_submit_leaves_state_untouched() {
        let mut state = ProjectState::new();
        let seen = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&seen);
        state.add_listener(move |_: &[Project]| *counter.borrow_mut() += 1);

        let mut f = form();
        let typed = FormFields::new("Board", "", "4");
        *f.fields_mut() = typed.clone();

        assert!(f.submit(&mut state).is_err());
        assert!(state.is_empty());
        assert_eq!(*seen.borrow(), 0);
        assert_eq!(f.fields(), &typed);
    }
}
