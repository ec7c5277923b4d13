pub mod entities;
pub mod sentiment;

pub use entities::{EntityExtractor, HeuristicEntityExtractor};
pub use sentiment::{LexiconAnalyzer, SentimentAnalyzer};
