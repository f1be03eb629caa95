use crate::error::BoardError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a project, generated once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Creates a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ProjectId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| BoardError::InvalidProjectId(s.to_string()))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Column a project currently sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    InProgress,
    Finished,
}

impl ProjectStatus {
    /// All statuses in board order
    pub const ALL: [ProjectStatus; 3] = [Self::Active, Self::InProgress, Self::Finished];

    /// Name used in serialized data, element ids and drag targets
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::InProgress => "inprogress",
            Self::Finished => "finished",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| BoardError::InvalidStatus(s.to_string()))
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-supplied fields of a new project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectInfo {
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people,
        }
    }
}

/// A project on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates an active project from the submitted info
    pub fn new(id: ProjectId, info: ProjectInfo) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: info.title,
            description: info.description,
            people: info.people,
            status: ProjectStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the project to another column.
    ///
    /// Returns `false` and leaves the project untouched when it is already
    /// in `status`.
    pub fn set_status(&mut self, status: ProjectStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.updated_at = Utc::now();
        true
    }

    /// "1 Person" or "N Persons"
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 Person".to_string()
        } else {
            format!("{} Persons", self.people)
        }
    }

    pub fn assigned_label(&self) -> String {
        format!("{} assigned", self.people_label())
    }
}
