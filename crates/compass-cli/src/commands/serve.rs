use anyhow::Context;
use compass_config::CompassConfig;
use compass_db::CompassDb;
use compass_llm::RoadmapGenerator;
use compass_server::AppState;

use crate::cli::root_commands::ServeArgs;

/// Handle `compass serve`.
pub async fn handle(args: &ServeArgs, mut config: CompassConfig) -> anyhow::Result<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = &args.database {
        config.database.path.clone_from(path);
    }

    if config.database.is_in_memory() {
        tracing::warn!("using an in-memory database, saved roadmaps are lost on exit");
    }

    let db = CompassDb::open_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database at '{}'", config.database.path))?;
    let generator = RoadmapGenerator::from_config(&config.llm);

    let address = config.server.bind_address();
    tracing::info!(
        %address,
        database = %config.database.path,
        llm = generator.provider_name(),
        "starting compass server"
    );

    compass_server::serve(AppState::new(generator, db), &address)
        .await
        .with_context(|| format!("server on {address} failed"))
}
