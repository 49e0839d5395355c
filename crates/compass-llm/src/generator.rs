//! Roadmap generation with guaranteed fallback.
//!
//! [`RoadmapGenerator::generate`] never fails: a missing provider, transport
//! error, timeout, malformed envelope, or unusable JSON all end in the
//! template roadmap, tagged [`RoadmapSource::Mock`].

use std::time::Duration;

use compass_config::LlmConfig;
use compass_core::enums::RoadmapSource;
use compass_core::request::RoadmapRequest;
use compass_core::roadmap::{GeneratedRoadmap, Roadmap};
use compass_schema::SchemaRegistry;

use crate::error::LlmError;
use crate::extract::parse_roadmap;
use crate::mock::mock_roadmap_for;
use crate::prompt::build_prompt;
use crate::provider::{LlmProvider, provider_from_config};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct RoadmapGenerator {
    provider: Option<Box<dyn LlmProvider>>,
    schemas: SchemaRegistry,
    timeout: Duration,
}

impl RoadmapGenerator {
    /// Build from configuration.
    ///
    /// A misconfigured provider is logged and replaced by the template
    /// generator, so startup never fails on LLM settings.
    #[must_use]
    pub fn from_config(config: &LlmConfig) -> Self {
        let provider = match provider_from_config(config) {
            Ok(provider) => provider,
            Err(e) => {
                tracing::warn!(provider = %config.provider, %e, "LLM provider unusable, using template roadmaps");
                None
            }
        };
        if let Some(p) = &provider {
            tracing::info!(provider = p.name(), model = config.model_or_default(), "LLM provider enabled");
        } else {
            tracing::info!("no LLM provider configured, using template roadmaps");
        }
        Self {
            provider,
            schemas: SchemaRegistry::new(),
            timeout: Duration::from_secs(config.timeout_secs.max(1)),
        }
    }

    /// Use a specific provider.
    #[must_use]
    pub fn with_provider(provider: Box<dyn LlmProvider>, timeout: Duration) -> Self {
        Self {
            provider: Some(provider),
            schemas: SchemaRegistry::new(),
            timeout,
        }
    }

    /// Template roadmaps only; no outbound calls.
    #[must_use]
    pub fn mock_only() -> Self {
        Self {
            provider: None,
            schemas: SchemaRegistry::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Name of the active provider, `mock` when none.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.as_ref().map_or("mock", |p| p.name())
    }

    /// What `generate` reports when its provider path succeeds.
    #[must_use]
    pub fn source(&self) -> RoadmapSource {
        if self.is_configured() {
            RoadmapSource::Llm
        } else {
            RoadmapSource::Mock
        }
    }

    /// Generate a roadmap, falling back to the template on any failure.
    pub async fn generate(&self, request: &RoadmapRequest) -> GeneratedRoadmap {
        let Some(provider) = &self.provider else {
            tracing::debug!(branch = %request.branch, "generating template roadmap");
            return GeneratedRoadmap::mock(mock_roadmap_for(request));
        };

        match self.generate_with(provider.as_ref(), request).await {
            Ok(roadmap) => {
                tracing::info!(
                    provider = provider.name(),
                    phases = roadmap.phases.len(),
                    "roadmap generated"
                );
                GeneratedRoadmap::llm(roadmap)
            }
            Err(e) => {
                tracing::warn!(provider = provider.name(), %e, "LLM generation failed, using template roadmap");
                GeneratedRoadmap::mock(mock_roadmap_for(request))
            }
        }
    }

    async fn generate_with(
        &self,
        provider: &dyn LlmProvider,
        request: &RoadmapRequest,
    ) -> Result<Roadmap, LlmError> {
        let prompt = build_prompt(request);
        let raw = tokio::time::timeout(self.timeout, provider.complete(&prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.timeout.as_secs()))??;
        tracing::debug!(chars = raw.len(), "received provider response");
        parse_roadmap(&raw, &self.schemas)
    }
}
