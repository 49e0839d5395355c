//! # compass-core
//!
//! Core types and error types for Compass.
//!
//! This crate provides the foundational types shared across all Compass crates:
//! - Roadmap structs (`Roadmap`, `Phase`, `Resource`, `SavedRoadmap`)
//! - The structured generation request (`RoadmapRequest`) and its wire forms
//! - Enums for requester role and roadmap provenance
//! - HTTP payload and response shapes
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod ids;
pub mod payloads;
pub mod request;
pub mod roadmap;
