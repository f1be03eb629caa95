use crate::domain::project::ProjectStatus;
use crate::error::{BoardError, Result};
use crate::validation::{FieldRule, FormRules};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Configuration for a board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Column {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Column heading, e.g. "ACTIVE PROJECTS" unless a title is configured
    pub fn heading(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("{} PROJECTS", self.status.as_str().to_uppercase()),
        }
    }

    /// Id of the column element, e.g. "active-projects"
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status)
    }

    /// Id of the list inside the column, e.g. "active-project-list"
    pub fn list_id(&self) -> String {
        format!("{}-project-list", self.status)
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
    pub form_rules: FormRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Projects".to_string(),
            columns: ProjectStatus::ALL.into_iter().map(Column::new).collect(),
            form_rules: default_form_rules(),
        }
    }
}

/// Rules applied to the new-project form
pub fn default_form_rules() -> FormRules {
    FormRules::new()
        .with("title", FieldRule::required())
        .with("description", FieldRule::required())
        .with("people", FieldRule::required().with_min(1.0).with_max(7.0))
}

impl BoardConfig {
    /// Parses a JSON configuration; omitted sections keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Rejects configurations that show the same status in two columns
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(BoardError::ConfigError(
                "board must have at least one column".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.status) {
                return Err(BoardError::ConfigError(format!(
                    "duplicate column for status '{}'",
                    column.status
                )));
            }
        }
        Ok(())
    }

    /// Gets the column configuration for a status
    pub fn column_for_status(&self, status: ProjectStatus) -> Option<&Column> {
        self.columns.iter().find(|col| col.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.columns.len(), 3);

        let statuses: Vec<ProjectStatus> = config.columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, ProjectStatus::ALL.to_vec());

        assert_eq!(config.form_rules.len(), 3);
        assert_eq!(
            config.form_rules.get("people"),
            Some(&FieldRule::required().with_min(1.0).with_max(7.0))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_column_naming() {
        let column = Column::new(ProjectStatus::InProgress);
        assert_eq!(column.heading(), "INPROGRESS PROJECTS");
        assert_eq!(column.element_id(), "inprogress-projects");
        assert_eq!(column.list_id(), "inprogress-project-list");

        let titled = Column::new(ProjectStatus::Finished).with_title("Done");
        assert_eq!(titled.heading(), "Done");
    }

    #[test]
    fn test_column_for_status() {
        let config = BoardConfig::default();
        let column = config.column_for_status(ProjectStatus::Finished).unwrap();
        assert_eq!(column.heading(), "FINISHED PROJECTS");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BoardConfig::from_json(r#"{ "name": "Sprint" }"#).unwrap();
        assert_eq!(config.name, "Sprint");
        assert_eq!(config.columns.len(), 3);
        assert_eq!(config.form_rules, default_form_rules());
    }

    #[test]
    fn test_json_overrides_columns_and_rules() {
        let json = r#"{
            "columns": [
                { "status": "active", "title": "Backlog" },
                { "status": "finished" }
            ],
            "form_rules": {
                "title": { "required": true },
                "people": { "min": 2, "max": 4 }
            }
        }"#;
        let config = BoardConfig::from_json(json).unwrap();

        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.columns[0].heading(), "Backlog");
        assert!(config.column_for_status(ProjectStatus::InProgress).is_none());
        assert_eq!(
            config.form_rules.get("people"),
            Some(&FieldRule::default().with_min(2.0).with_max(4.0))
        );
        assert!(config.form_rules.get("description").is_none());
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let json = r#"{ "columns": [ { "status": "active" }, { "status": "active" } ] }"#;
        assert!(matches!(
            BoardConfig::from_json(json),
            Err(BoardError::ConfigError(_))
        ));
    }

    #[test]
    fn test_empty_columns_rejected() {
        assert!(matches!(
            BoardConfig::from_json(r#"{ "columns": [] }"#),
            Err(BoardError::ConfigError(_))
        ));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let json = r#"{ "columns": [ { "status": "done" } ] }"#;
        assert!(matches!(
            BoardConfig::from_json(json),
            Err(BoardError::SerializationError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "name": "From disk" }}"#).unwrap();

        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.name, "From disk");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = BoardConfig::load(dir.path().join("board.json"));
        assert!(matches!(result, Err(BoardError::IoError(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = BoardConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored = BoardConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }
}
