pub mod blocking;
pub mod events;
pub mod image;
pub mod metrics;
pub mod orchestrator;
pub mod phase;
pub mod state;

pub use blocking::run_blocking;
pub use events::PipelineEvent;
pub use orchestrator::PipelineOrchestrator;
pub use state::{PhaseName, PipelineConfig, PipelineOutcome};
