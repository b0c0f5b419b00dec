pub mod loader;

pub use loader::{PromptLoader, PromptVariables, TRANSCRIBE, VALIDATE};
