// Plancraft - AI-assisted planning from the command line
// Library exports

pub mod cli;
pub mod config;
pub mod errors;
pub mod locale;
pub mod planning;
pub mod prompts;
pub mod providers;

pub use errors::PlanError;
