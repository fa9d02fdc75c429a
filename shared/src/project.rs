use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProjectStatus::Active),
            "finished" => Ok(ProjectStatus::Finished),
            other => Err(anyhow::anyhow!("unknown project status: '{}'", other)),
        }
    }
}

/// A submitted project. Only the store creates these, and nothing edits them
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: String,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
}

impl Project {
    pub(crate) fn new(title: String, description: String, people: u32) -> Self {
        Project {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }
}

/// Keeps the projects of one status, preserving submission order.
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| p.status == status)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_projects_are_active_with_fresh_ids() {
        let a = Project::new("a".into(), "first one".into(), 2);
        let b = Project::new("b".into(), "second one".into(), 2);

        assert_eq!(a.status(), ProjectStatus::Active);
        assert!(!a.id().is_empty());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn status_parses_its_display_form() {
        for status in [ProjectStatus::Active, ProjectStatus::Finished].iter() {
            assert_eq!(status.to_string().parse::<ProjectStatus>().unwrap(), *status);
        }
        assert!("done".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ProjectStatus::Finished).unwrap();
        assert_eq!(json, "\"finished\"");
    }

    #[test]
    fn filtering_keeps_order_and_drops_other_statuses() {
        let projects = vec![
            Project::new("one".into(), "the first".into(), 2),
            Project::new("two".into(), "the second".into(), 3),
        ];

        let active = filter_by_status(&projects, ProjectStatus::Active);
        assert_eq!(active, projects);
        assert!(filter_by_status(&projects, ProjectStatus::Finished).is_empty());
    }
}
