use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default status for a freshly created or appended milestone.
pub const DEFAULT_MILESTONE_STATUS: &str = "Pending";

/// Sub-task record attached to a project. No independent lifecycle is
/// enforced; the status is a plain string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Milestone {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    DEFAULT_MILESTONE_STATUS.to_string()
}

impl Milestone {
    /// Milestone stamped on every new project when the caller supplies none.
    pub fn initial() -> Self {
        Self::pending("Project Initiated")
    }

    /// New milestone with the default "Pending" status.
    pub fn pending(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: default_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending_when_absent() {
        let milestone: Milestone =
            serde_json::from_str(r#"{"title": "Earthworks complete"}"#).unwrap();
        assert_eq!(milestone.status, DEFAULT_MILESTONE_STATUS);
        assert_eq!(milestone.description, None);
    }

    #[test]
    fn initial_milestone_shape() {
        let milestone = Milestone::initial();
        assert_eq!(milestone.title, "Project Initiated");
        assert_eq!(milestone.status, DEFAULT_MILESTONE_STATUS);
    }
}
