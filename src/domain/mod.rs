pub mod board;
pub mod project;

pub use board::{default_form_rules, BoardConfig, Column};
pub use project::{Project, ProjectId, ProjectInfo, ProjectStatus};
