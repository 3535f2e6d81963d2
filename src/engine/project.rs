use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type ProjectId = Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Create a new active project with a fresh id
    pub fn new(title: String, description: String, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_is_active() {
        let project = Project::new("Build API".into(), "Design and implement".into(), 3);
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(project.is_active());
        assert_eq!(project.people, 3);
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = Project::new("A".into(), "first one".into(), 1);
        let b = Project::new("A".into(), "first one".into(), 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_status_serializes_by_name() {
        let json = serde_json::to_string(&ProjectStatus::Finished).unwrap();
        assert_eq!(json, "\"Finished\"");
        assert_eq!(ProjectStatus::Active.to_string(), "active");
    }
}
