use std::path::{Path, PathBuf};
use tracing::info;
use crate::errors::EsgriskError;
use super::metadata::RunMetadata;

/// Write a finished markdown report under the output directory, named by
/// run id.
pub async fn write_report(
    output_dir: &Path,
    metadata: &RunMetadata,
    body: &str,
) -> Result<PathBuf, EsgriskError> {
    tokio::fs::create_dir_all(output_dir).await?;

    let mut report = String::from("# ESG Risk Report\n\n");
    report.push_str(&metadata.header_markdown());
    report.push('\n');
    report.push_str(body);

    let path = output_dir.join(format!("esg_report_{}.md", metadata.run_id));
    tokio::fs::write(&path, &report).await?;
    info!(path = %path.display(), "Wrote report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::WeightConfig;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_report_creates_file() {
        let dir = TempDir::new().unwrap();
        let metadata = RunMetadata::new("cobalt", WeightConfig::default());
        let path = write_report(dir.path(), &metadata, "## Body\n").await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# ESG Risk Report"));
        assert!(content.contains("## Body"));
        assert!(path.file_name().unwrap().to_str().unwrap().contains(&metadata.run_id));
    }

    #[tokio::test]
    async fn test_write_report_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("reports/2026");
        let metadata = RunMetadata::new("lithium", WeightConfig::default());
        let path = write_report(&nested, &metadata, "body").await.unwrap();
        assert!(path.exists());
    }
}
