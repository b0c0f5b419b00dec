pub mod commands;
pub mod process;
pub mod progress;
pub mod render;
pub mod score;
pub mod serve;

pub use commands::{Cli, Commands};
