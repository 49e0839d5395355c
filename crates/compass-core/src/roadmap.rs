//! Roadmap, phase, and resource structs.
//!
//! Fields deserialize with defaults so that a partially-shaped object coming
//! back from a language model still parses; completeness is checked by
//! [`Roadmap::is_complete`] before such a roadmap is accepted.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RoadmapSource;

/// A learning resource attached to a phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Resource {
    /// Free-text category label (e.g. `YouTube Course`, `Book`).
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: String,
}

impl Resource {
    pub fn new(kind: impl Into<String>, name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            link: link.into(),
        }
    }
}

/// One milestone of a roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Phase {
    #[serde(default)]
    pub milestone: String,
    /// Free-text duration band (e.g. `6-9 months`).
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// A generated learning plan: a title and an ordered list of phases.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Roadmap {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl Roadmap {
    /// A roadmap is usable only if it carries at least one phase.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.phases.is_empty()
    }
}

/// A roadmap tagged with the path that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GeneratedRoadmap {
    pub source: RoadmapSource,
    pub roadmap: Roadmap,
}

impl GeneratedRoadmap {
    #[must_use]
    pub const fn llm(roadmap: Roadmap) -> Self {
        Self {
            source: RoadmapSource::Llm,
            roadmap,
        }
    }

    #[must_use]
    pub const fn mock(roadmap: Roadmap) -> Self {
        Self {
            source: RoadmapSource::Mock,
            roadmap,
        }
    }
}

/// Fields of a roadmap about to be persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRoadmap {
    pub title: String,
    pub phases: Vec<Phase>,
    pub branch: Option<String>,
    pub interests: Vec<String>,
    pub focus: Option<String>,
}

/// A roadmap persisted on behalf of a user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedRoadmap {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub phases: Vec<Phase>,
    pub branch: Option<String>,
    pub interests: Vec<String>,
    pub focus: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
