pub mod assess;
pub mod commands;
pub mod discover;
pub mod keywords;
pub mod progress;
pub mod setup;

pub use commands::{Cli, Commands};
