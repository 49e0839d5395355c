//! Requester role and roadmap provenance enums.
//!
//! `Role` uses kebab-case on the wire (`pre-university`), matching the values
//! the frontend sends. `RoadmapSource` uses `snake_case`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Academic stage of the student a roadmap is generated for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Student who has not yet entered a degree programme.
    PreUniversity,
    /// Student enrolled in a degree programme.
    #[default]
    Undergraduate,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreUniversity => "pre-university",
            Self::Undergraduate => "undergraduate",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre-university" | "pre_university" | "preuniversity" => Ok(Self::PreUniversity),
            "undergraduate" => Ok(Self::Undergraduate),
            other => Err(format!(
                "unknown role '{other}' (expected 'pre-university' or 'undergraduate')"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// RoadmapSource
// ---------------------------------------------------------------------------

/// Which generation path produced a roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapSource {
    /// Parsed from a language model response.
    Llm,
    /// Produced by the deterministic template generator.
    Mock,
}

impl RoadmapSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Llm => "llm",
            Self::Mock => "mock",
        }
    }
}

impl fmt::Display for RoadmapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
