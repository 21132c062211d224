mod search_orchestrator;

pub use search_orchestrator::{SearchOrchestrator, SearchOutcome};
