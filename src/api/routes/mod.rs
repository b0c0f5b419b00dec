pub mod compare;
pub mod health;
pub mod process;
pub mod score;
