pub mod comparison;
pub mod score;
pub mod export;

pub use comparison::*;
pub use score::*;
pub use export::*;
