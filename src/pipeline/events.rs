/// Progress events streamed to the CLI (or any other consumer) while a
/// batch runs.
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    SearchCompleted { query: String, hits: usize },
    ArticleAssessed { title: String, weighted_score: f64 },
    ArticleSkipped { url: String, reason: String },
}
