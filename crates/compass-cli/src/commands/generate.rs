use compass_config::CompassConfig;
use compass_core::request::{RoadmapRequest, split_interests};
use compass_llm::RoadmapGenerator;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::output::output;

/// Handle `compass generate`.
pub async fn handle(
    args: &GenerateArgs,
    config: &CompassConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = build_request(args)?;
    let generator = RoadmapGenerator::from_config(&config.llm);
    let generated = generator.generate(&request).await;
    output(&generated, flags.format)
}

fn build_request(args: &GenerateArgs) -> anyhow::Result<RoadmapRequest> {
    let interests = split_interests(&args.interests);
    if interests.is_empty() || args.focus.trim().is_empty() {
        anyhow::bail!("Interests and focus required");
    }
    Ok(RoadmapRequest::new(
        args.role,
        args.branch.clone().unwrap_or_default(),
        interests,
        &args.focus,
    ))
}
