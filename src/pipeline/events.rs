use super::state::PhaseName;

/// Progress notifications streamed to the CLI spinner.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    PhaseStarted {
        phase: PhaseName,
        display_name: String,
    },
    PhaseCompleted {
        phase: PhaseName,
        duration_ms: u64,
    },
}
