pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod nlp;
pub mod pipeline;
pub mod reporting;
pub mod scoring;
pub mod search;
