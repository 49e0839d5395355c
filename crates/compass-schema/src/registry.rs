//! Central schema registry for Compass roadmap types.
//!
//! The `SchemaRegistry` builds JSON Schemas from compass-core types at
//! construction time using [`schemars::schema_for!`] and validates with
//! `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Store of every JSON Schema Compass exposes or validates against.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry with all roadmap, request, and response schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated
    /// schema, which does not happen for derived schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Roadmap types (5) ---
        register!(schemas, "roadmap", compass_core::roadmap::Roadmap);
        register!(schemas, "phase", compass_core::roadmap::Phase);
        register!(schemas, "resource", compass_core::roadmap::Resource);
        register!(
            schemas,
            "generated_roadmap",
            compass_core::roadmap::GeneratedRoadmap
        );
        register!(schemas, "saved_roadmap", compass_core::roadmap::SavedRoadmap);

        // --- Requests (3) ---
        register!(
            schemas,
            "roadmap_request",
            compass_core::request::RoadmapRequest
        );
        register!(
            schemas,
            "generate_roadmap_body",
            compass_core::payloads::GenerateRoadmapBody
        );
        register!(
            schemas,
            "save_roadmap_body",
            compass_core::payloads::SaveRoadmapBody
        );

        // --- Responses (2) ---
        register!(
            schemas,
            "generate_roadmap_response",
            compass_core::payloads::GenerateRoadmapResponse
        );
        register!(
            schemas,
            "health_response",
            compass_core::payloads::HealthResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
