pub mod parser;
pub mod schema;
pub mod types;
pub mod security;
pub mod credentials;

pub use types::*;
pub use parser::{parse_config, parse_config_str};
