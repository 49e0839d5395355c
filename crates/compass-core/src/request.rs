//! The structured roadmap generation request.
//!
//! A `RoadmapRequest` is ephemeral: it is built from an HTTP body or CLI
//! arguments, rendered into a prompt, and handed unchanged to the template
//! generator whenever the language model path fails.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Branch name used when the caller supplies neither a branch nor a course.
pub const DEFAULT_BRANCH: &str = "General Studies";

/// Interests as they arrive on the wire: a JSON array or one comma-separated string.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum InterestsInput {
    List(Vec<String>),
    Text(String),
}

impl InterestsInput {
    /// Normalize into trimmed, non-empty entries.
    ///
    /// A single string is split on commas.
    #[must_use]
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::List(items) => items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
            Self::Text(text) => split_interests(&text),
        }
    }
}

/// Split a comma-separated interest string into trimmed, non-empty entries.
#[must_use]
pub fn split_interests(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub role: Role,
    /// Branch or course name the roadmap is for.
    pub branch: String,
    pub interests: Vec<String>,
    pub focus: String,
}

impl RoadmapRequest {
    /// Build a request, falling back to [`DEFAULT_BRANCH`] for a blank branch.
    pub fn new(
        role: Role,
        branch: impl Into<String>,
        interests: Vec<String>,
        focus: impl Into<String>,
    ) -> Self {
        let branch = branch.into();
        let branch = if branch.trim().is_empty() {
            DEFAULT_BRANCH.to_string()
        } else {
            branch.trim().to_string()
        };
        Self {
            role,
            branch,
            interests,
            focus: focus.into().trim().to_string(),
        }
    }

    /// The first interest, if any.
    #[must_use]
    pub fn primary_interest(&self) -> Option<&str> {
        self.interests.first().map(String::as_str)
    }

    /// The second interest, if any.
    #[must_use]
    pub fn secondary_interest(&self) -> Option<&str> {
        self.interests.get(1).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn interests_accept_array_or_string() {
        let list: InterestsInput = serde_json::from_str(r#"["AI", " web "]"#).unwrap();
        assert_eq!(list.into_list(), vec!["AI", "web"]);

        let text: InterestsInput = serde_json::from_str(r#""AI, web,, robotics""#).unwrap();
        assert_eq!(text.into_list(), vec!["AI", "web", "robotics"]);
    }

    #[test]
    fn blank_interests_normalize_to_empty() {
        assert!(InterestsInput::Text("  , ".into()).into_list().is_empty());
        assert!(InterestsInput::List(vec![" ".into()]).into_list().is_empty());
    }

    #[test]
    fn blank_branch_uses_default() {
        let request = RoadmapRequest::new(Role::Undergraduate, "  ", vec![], "jobs");
        assert_eq!(request.branch, DEFAULT_BRANCH);
    }

    #[test]
    fn interest_accessors() {
        let request = RoadmapRequest::new(
            Role::PreUniversity,
            "Mechanical",
            vec!["CAD".into()],
            "design",
        );
        assert_eq!(request.primary_interest(), Some("CAD"));
        assert_eq!(request.secondary_interest(), None);
    }
}
