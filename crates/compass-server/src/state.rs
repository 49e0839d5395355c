use std::sync::Arc;

use compass_db::CompassDb;
use compass_llm::RoadmapGenerator;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<RoadmapGenerator>,
    pub db: Arc<CompassDb>,
}

impl AppState {
    #[must_use]
    pub fn new(generator: RoadmapGenerator, db: CompassDb) -> Self {
        Self {
            generator: Arc::new(generator),
            db: Arc::new(db),
        }
    }
}
