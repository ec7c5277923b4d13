pub mod types;

pub use types::EsgriskError;
