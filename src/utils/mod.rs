pub mod formatting;
pub mod lines;
pub mod similarity;
pub mod truncation;
