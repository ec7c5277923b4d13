pub mod diffbot;
pub mod extractor;
pub mod router;

pub use extractor::{NullExtractor, TextExtractor};
pub use router::create_extractor;
