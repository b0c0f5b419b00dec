use super::state::PhaseName;

pub struct PhaseDefinition {
    pub name: PhaseName,
    pub display_name: &'static str,
}

pub static PHASES: &[PhaseDefinition] = &[
    PhaseDefinition {
        name: PhaseName::Extraction,
        display_name: "Extracting content",
    },
    PhaseDefinition {
        name: PhaseName::Validation,
        display_name: "Validating content",
    },
    PhaseDefinition {
        name: PhaseName::Scoring,
        display_name: "Scoring",
    },
];

pub fn display_name(phase: PhaseName) -> &'static str {
    PHASES
        .iter()
        .find(|p| p.name == phase)
        .map(|p| p.display_name)
        .unwrap_or("Unknown")
}
