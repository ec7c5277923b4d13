use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{info, warn};
use crate::errors::EsgriskError;
use crate::extract::TextExtractor;
use crate::nlp::{EntityExtractor, SentimentAnalyzer};
use crate::scoring::{
    rank, score, ArticleInput, ArticleScore, SupplierAggregator, SupplierSummary, Taxonomy,
    WeightConfig,
};
use crate::search::{SearchHit, SearchProvider};
use super::events::PipelineEvent;
use super::request::AssessmentRequest;

/// Result of the single-supplier flow: every scoring article plus the
/// supplier roll-up (absent when no article scored above zero).
#[derive(Debug, Serialize)]
pub struct AssessmentReport {
    pub supplier: String,
    pub query: String,
    pub weights: WeightConfig,
    pub articles: Vec<ArticleScore>,
    pub summary: Option<SupplierSummary>,
    pub articles_searched: usize,
}

/// Result of the material-only flow: suppliers ranked ascending by
/// weighted average, lowest risk first.
#[derive(Debug, Serialize)]
pub struct DiscoveryReport {
    pub material: String,
    pub query: String,
    pub weights: WeightConfig,
    pub suppliers: Vec<SupplierSummary>,
    pub articles_searched: usize,
    pub articles_assessed: usize,
}

impl DiscoveryReport {
    /// Lowest-risk supplier, if any were identified.
    pub fn recommended(&self) -> Option<&SupplierSummary> {
        self.suppliers.first()
    }
}

/// Drives one assessment batch: search, per-article extraction and
/// scoring, supplier aggregation. Collaborators are injected so search
/// and extraction backends stay pluggable; articles are processed
/// sequentially, one hit at a time.
pub struct Pipeline {
    search: Box<dyn SearchProvider>,
    extractor: Box<dyn TextExtractor>,
    entities: Box<dyn EntityExtractor>,
    sentiment: Box<dyn SentimentAnalyzer>,
    taxonomy: Taxonomy,
    event_tx: Option<mpsc::UnboundedSender<PipelineEvent>>,
}

impl Pipeline {
    pub fn new(
        search: Box<dyn SearchProvider>,
        extractor: Box<dyn TextExtractor>,
        entities: Box<dyn EntityExtractor>,
        sentiment: Box<dyn SentimentAnalyzer>,
        taxonomy: Taxonomy,
    ) -> Self {
        Self {
            search,
            extractor,
            entities,
            sentiment,
            taxonomy,
            event_tx: None,
        }
    }

    /// Attach an event channel for streaming progress to a consumer.
    pub fn with_event_channel(mut self, tx: mpsc::UnboundedSender<PipelineEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn emit(&self, event: PipelineEvent) {
        if let Some(ref tx) = self.event_tx {
            let _ = tx.send(event);
        }
    }

    /// Assess one named supplier. Articles whose composite score stays at
    /// zero are dropped from the report, matching the assessment table the
    /// tool has always shown.
    pub async fn assess_supplier(
        &self,
        request: &AssessmentRequest,
    ) -> Result<AssessmentReport, EsgriskError> {
        request.weights.validate()?;
        let supplier = request
            .supplier
            .as_deref()
            .ok_or_else(|| EsgriskError::InvalidInput("Supplier name is required".into()))?;

        let query = request.query();
        info!(supplier = %supplier, query = %query, "Assessing supplier");
        let hits = self.run_search(&query).await;

        let mut aggregator = SupplierAggregator::new();
        let mut articles = Vec::new();
        for hit in &hits {
            let scored = self.assess_hit(hit, &request.weights).await;
            self.emit(PipelineEvent::ArticleAssessed {
                title: scored.title.clone(),
                weighted_score: scored.weighted_score,
            });
            if scored.weighted_score > 0.0 {
                aggregator.record(supplier, scored.clone());
                articles.push(scored);
            }
        }

        let summary = aggregator.summarize().into_iter().next();
        if summary.is_none() {
            info!(supplier = %supplier, "No scoring articles found");
        }

        Ok(AssessmentReport {
            supplier: supplier.to_string(),
            query,
            weights: request.weights,
            articles,
            summary,
            articles_searched: hits.len(),
        })
    }

    /// Discover suppliers for a material. Each article's score is
    /// attributed to every organization mentioned in its full text;
    /// articles without full text or without organizations are skipped.
    pub async fn discover_suppliers(
        &self,
        request: &AssessmentRequest,
    ) -> Result<DiscoveryReport, EsgriskError> {
        request.weights.validate()?;

        let query = request.query();
        info!(material = %request.material, query = %query, "Discovering suppliers");
        let hits = self.run_search(&query).await;

        let mut aggregator = SupplierAggregator::new();
        let mut assessed = 0usize;
        for hit in &hits {
            let full_text = self.extractor.extract(&hit.link).await;
            if full_text.trim().is_empty() {
                self.emit(PipelineEvent::ArticleSkipped {
                    url: hit.link.clone(),
                    reason: "no article text".to_string(),
                });
                continue;
            }
            let orgs = self.entities.organizations(&full_text);
            if orgs.is_empty() {
                self.emit(PipelineEvent::ArticleSkipped {
                    url: hit.link.clone(),
                    reason: "no organizations identified".to_string(),
                });
                continue;
            }

            let scored = self.score_article(hit, full_text, &request.weights);
            self.emit(PipelineEvent::ArticleAssessed {
                title: scored.title.clone(),
                weighted_score: scored.weighted_score,
            });
            assessed += 1;
            for org in orgs {
                aggregator.record(&org, scored.clone());
            }
        }

        let suppliers = rank(aggregator.summarize());
        if suppliers.is_empty() {
            info!(material = %request.material, "No suppliers identified in articles");
        }

        Ok(DiscoveryReport {
            material: request.material.clone(),
            query,
            weights: request.weights,
            suppliers,
            articles_searched: hits.len(),
            articles_assessed: assessed,
        })
    }

    /// Search failures degrade to an empty hit list; the batch completes
    /// with an empty report instead of aborting.
    async fn run_search(&self, query: &str) -> Vec<SearchHit> {
        let hits = match self.search.search(query).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(provider = %self.search.provider_name(), error = %e, "Search failed, continuing with empty result set");
                Vec::new()
            }
        };
        self.emit(PipelineEvent::SearchCompleted {
            query: query.to_string(),
            hits: hits.len(),
        });
        hits
    }

    async fn assess_hit(&self, hit: &SearchHit, weights: &WeightConfig) -> ArticleScore {
        let full_text = self.extractor.extract(&hit.link).await;
        self.score_article(hit, full_text, weights)
    }

    fn score_article(
        &self,
        hit: &SearchHit,
        full_text: String,
        weights: &WeightConfig,
    ) -> ArticleScore {
        let input = ArticleInput {
            title: hit.title.clone(),
            snippet: hit.snippet.clone(),
            url: hit.link.clone(),
            full_text,
        };
        let sentiment = self.sentiment.polarity(&input.combined_text());
        score(&input, &self.taxonomy, weights, sentiment)
    }
}
