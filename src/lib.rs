pub mod display;
pub mod errors;
pub mod parse;
pub mod plot;
pub mod types;
