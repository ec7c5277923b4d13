pub mod aggregate;
pub mod article;
pub mod rank;
pub mod taxonomy;
pub mod weights;

pub use aggregate::{SupplierAggregator, SupplierSummary};
pub use article::{score, ArticleInput, ArticleScore};
pub use rank::{rank, RiskBand};
pub use taxonomy::{RiskCategory, Taxonomy};
pub use weights::WeightConfig;
