use crate::pipeline::{AssessmentReport, DiscoveryReport};
use crate::scoring::{ArticleScore, RiskBand, RiskCategory, SupplierSummary};

/// Markdown table of assessed articles, highest composite score first,
/// the order the assessment table has always been displayed in.
pub fn format_article_table(articles: &[ArticleScore]) -> String {
    let mut rows: Vec<&ArticleScore> = articles.iter().collect();
    rows.sort_by(|a, b| {
        b.weighted_score
            .partial_cmp(&a.weighted_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut out = String::from(
        "| Title | Labor | Environment | Governance | Sentiment | Weighted Score | URL |\n|---|---|---|---|---|---|---|\n",
    );
    for article in rows {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {:.2} | {:.2} | {} |\n",
            article.title,
            article.category_score(RiskCategory::Labor),
            article.category_score(RiskCategory::Environment),
            article.category_score(RiskCategory::Governance),
            article.sentiment,
            article.weighted_score,
            article.url,
        ));
    }
    out
}

/// Final per-supplier block. Averages are rendered against "/ 10" even
/// though the composite is unbounded above; the display scale predates
/// the formula and is kept as-is.
pub fn format_supplier_summary(summary: &SupplierSummary) -> String {
    let band = RiskBand::from_score(summary.weighted_average);
    let mut out = format!("### Final Risk Summary for {}\n\n", summary.supplier);
    for category in RiskCategory::ALL {
        let average = summary.category_averages.get(&category).copied().unwrap_or(0.0);
        out.push_str(&format!("- {} (avg): {:.2} / 10\n", category.display_name(), average));
    }
    out.push_str(&format!(
        "- Articles analyzed: {} (weighted score range {:.2}..{:.2})\n",
        summary.article_count, summary.min_weighted, summary.max_weighted,
    ));
    out.push_str(&format!(
        "- Total Weighted Risk Score: {:.2} / 10 {}\n",
        summary.weighted_average,
        band.emoji(),
    ));
    out
}

/// Ranked supplier table, lowest risk first.
pub fn format_ranking_table(suppliers: &[SupplierSummary]) -> String {
    let mut out = String::from(
        "| Rank | Supplier | Average Risk Score | Band | Articles |\n|---|---|---|---|---|\n",
    );
    for (i, summary) in suppliers.iter().enumerate() {
        let band = RiskBand::from_score(summary.weighted_average);
        out.push_str(&format!(
            "| {} | {} | {:.2} | {} {} | {} |\n",
            i + 1,
            summary.supplier,
            summary.weighted_average,
            band.emoji(),
            band,
            summary.article_count,
        ));
    }
    out
}

pub fn format_recommendation(summary: &SupplierSummary) -> String {
    format!(
        "🥇 Recommended Supplier: {}\n- Avg Risk Score: {:.2} / 10 {}\n- Articles Analyzed: {}\n",
        summary.supplier,
        summary.weighted_average,
        RiskBand::from_score(summary.weighted_average).emoji(),
        summary.article_count,
    )
}

pub fn format_assessment_report(report: &AssessmentReport) -> String {
    let mut out = format!("## Supplier Risk Assessment: {}\n\n", report.supplier);
    if report.articles.is_empty() {
        out.push_str(&format!(
            "No scoring articles found for {} ({} search results examined).\n",
            report.supplier, report.articles_searched,
        ));
        return out;
    }
    out.push_str("### Assessed Articles\n\n");
    out.push_str(&format_article_table(&report.articles));
    out.push('\n');
    if let Some(summary) = &report.summary {
        out.push_str(&format_supplier_summary(summary));
    }
    out
}

pub fn format_discovery_report(report: &DiscoveryReport) -> String {
    let mut out = format!("## Supplier Risk Ranking: {}\n\n", report.material);
    if report.suppliers.is_empty() {
        out.push_str(&format!(
            "No suppliers identified in articles ({} search results examined).\n",
            report.articles_searched,
        ));
        return out;
    }
    out.push_str(&format!(
        "{} suppliers identified across {} assessed articles.\n\n",
        report.suppliers.len(),
        report.articles_assessed,
    ));
    out.push_str(&format_ranking_table(&report.suppliers));
    out.push('\n');
    if let Some(top) = report.recommended() {
        out.push_str(&format_recommendation(top));
    }
    out
}
