pub mod events;
pub mod orchestrator;
pub mod request;

pub use events::PipelineEvent;
pub use orchestrator::{AssessmentReport, DiscoveryReport, Pipeline};
pub use request::AssessmentRequest;
