//! ID prefix constants.
//!
//! Persisted entities carry IDs of the form `{prefix}-{8 hex chars}`.

/// Prefix for saved roadmaps (`rmp-a3f8b2c1`).
pub const PREFIX_ROADMAP: &str = "rmp";
