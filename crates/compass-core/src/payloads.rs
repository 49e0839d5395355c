//! HTTP request bodies and JSON response shapes for the roadmap API.
//!
//! Bodies keep every field optional so that a missing field produces a
//! field-specific validation message instead of a generic decode failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RoadmapSource, Role};
use crate::errors::CoreError;
use crate::request::{DEFAULT_BRANCH, InterestsInput, RoadmapRequest};
use crate::roadmap::{GeneratedRoadmap, NewRoadmap, Phase};

/// Body of `POST /api/v1/roadmaps/generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapBody {
    pub branch: Option<String>,
    pub course_id: Option<String>,
    pub interests: Option<InterestsInput>,
    pub focus: Option<String>,
    pub role: Option<Role>,
}

impl GenerateRoadmapBody {
    /// Validate the body and build the structured request.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when interests or focus are missing
    /// or blank.
    pub fn into_request(self) -> Result<RoadmapRequest, CoreError> {
        let interests = self.interests.map(InterestsInput::into_list).unwrap_or_default();
        let focus = self.focus.filter(|focus| !focus.trim().is_empty());

        let Some(focus) = focus.filter(|_| !interests.is_empty()) else {
            return Err(CoreError::Validation(
                "Interests and focus required".to_string(),
            ));
        };

        let branch = non_blank(self.branch)
            .or_else(|| non_blank(self.course_id))
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string());

        Ok(RoadmapRequest::new(
            self.role.unwrap_or_default(),
            branch,
            interests,
            focus,
        ))
    }
}

/// Response of `POST /api/v1/roadmaps/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GenerateRoadmapResponse {
    pub title: String,
    pub phases: Vec<Phase>,
    pub branch: String,
    pub interests: Vec<String>,
    pub focus: String,
    /// Always `true`: the roadmap was generated and not yet saved.
    pub generated: bool,
    pub source: RoadmapSource,
}

impl GenerateRoadmapResponse {
    /// Combine the request echo with a generated roadmap.
    ///
    /// An empty title falls back to `"{branch} Roadmap"`.
    #[must_use]
    pub fn new(request: RoadmapRequest, generated: GeneratedRoadmap) -> Self {
        let GeneratedRoadmap { source, roadmap } = generated;
        let title = if roadmap.title.trim().is_empty() {
            format!("{} Roadmap", request.branch)
        } else {
            roadmap.title
        };
        Self {
            title,
            phases: roadmap.phases,
            branch: request.branch,
            interests: request.interests,
            focus: request.focus,
            generated: true,
            source,
        }
    }
}

/// Body of `POST /api/v1/roadmaps/save`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SaveRoadmapBody {
    pub title: Option<String>,
    pub phases: Option<Vec<Phase>>,
    pub branch: Option<String>,
    pub interests: Option<InterestsInput>,
    pub focus: Option<String>,
}

impl SaveRoadmapBody {
    /// Validate the body into a roadmap ready for persistence.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the title is missing or blank,
    /// or when phases are absent.
    pub fn into_new_roadmap(self) -> Result<NewRoadmap, CoreError> {
        let title = non_blank(self.title);
        let (Some(title), Some(phases)) = (title, self.phases) else {
            return Err(CoreError::Validation(
                "Title and phases are required".to_string(),
            ));
        };

        Ok(NewRoadmap {
            title,
            phases,
            branch: non_blank(self.branch),
            interests: self.interests.map(InterestsInput::into_list).unwrap_or_default(),
            focus: non_blank(self.focus),
        })
    }
}

/// Plain `{ "message": ... }` response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Plain `{ "error": ... }` response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response of `GET /api/v1/health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    /// `llm` when a provider is configured, `mock` otherwise.
    pub llm: RoadmapSource,
    pub timestamp: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::Roadmap;
    use pretty_assertions::assert_eq;

    fn body(json: &str) -> GenerateRoadmapBody {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn generate_body_builds_request() {
        let request = body(
            r#"{"branch": "Computer Science and Engineering", "interests": ["AI", "web"],
                "focus": "career change", "role": "undergraduate"}"#,
        )
        .into_request()
        .unwrap();

        assert_eq!(request.branch, "Computer Science and Engineering");
        assert_eq!(request.interests, vec!["AI", "web"]);
        assert_eq!(request.focus, "career change");
        assert_eq!(request.role, Role::Undergraduate);
    }

    #[test]
    fn course_id_used_when_branch_missing() {
        let request = body(r#"{"courseId": "BSc Physics", "interests": "optics", "focus": "research"}"#)
            .into_request()
            .unwrap();
        assert_eq!(request.branch, "BSc Physics");
        assert_eq!(request.interests, vec!["optics"]);
    }

    #[test]
    fn branch_defaults_to_general_studies() {
        let request = body(r#"{"interests": "x", "focus": "y"}"#)
            .into_request()
            .unwrap();
        assert_eq!(request.branch, DEFAULT_BRANCH);
    }

    #[test]
    fn missing_interests_or_focus_rejected() {
        for json in [
            r#"{"focus": "y"}"#,
            r#"{"interests": "x"}"#,
            r#"{"interests": [], "focus": "y"}"#,
            r#"{"interests": "x", "focus": "   "}"#,
        ] {
            let err = body(json).into_request().unwrap_err();
            assert_eq!(err.to_string(), "Interests and focus required", "{json}");
        }
    }

    #[test]
    fn response_title_falls_back_to_branch() {
        let request = RoadmapRequest::new(Role::Undergraduate, "Civil", vec!["bridges".into()], "site work");
        let response = GenerateRoadmapResponse::new(
            request,
            GeneratedRoadmap::llm(Roadmap {
                title: String::new(),
                phases: vec![Phase::default()],
            }),
        );
        assert_eq!(response.title, "Civil Roadmap");
        assert!(response.generated);
        assert_eq!(response.source, RoadmapSource::Llm);
    }

    #[test]
    fn save_body_requires_title_and_phases() {
        let missing_phases: SaveRoadmapBody = serde_json::from_str(r#"{"title": "t"}"#).unwrap();
        assert!(missing_phases.into_new_roadmap().is_err());

        let missing_title: SaveRoadmapBody = serde_json::from_str(r#"{"phases": []}"#).unwrap();
        assert!(missing_title.into_new_roadmap().is_err());

        let ok: SaveRoadmapBody = serde_json::from_str(
            r#"{"title": "t", "phases": [], "interests": "a, b", "branch": ""}"#,
        )
        .unwrap();
        let new = ok.into_new_roadmap().unwrap();
        assert_eq!(new.interests, vec!["a", "b"]);
        assert_eq!(new.branch, None);
    }
}
