pub mod google;
pub mod provider;
pub mod router;
pub mod serpapi;
pub mod types;

pub use provider::SearchProvider;
pub use router::create_search_provider;
pub use types::SearchHit;
