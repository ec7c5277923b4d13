use std::time::Duration;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::pipeline::PipelineEvent;

/// Busy indicator covering the whole synchronous batch.
pub fn batch_spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg}").expect("static template"));
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_message("Searching for articles...");
    bar
}

/// Drain pipeline events onto the spinner until the sender side closes.
pub fn spawn_event_renderer(
    mut rx: mpsc::UnboundedReceiver<PipelineEvent>,
    bar: ProgressBar,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                PipelineEvent::SearchCompleted { hits, .. } => {
                    bar.set_message(format!("Assessing {} articles...", hits));
                }
                PipelineEvent::ArticleAssessed { title, weighted_score } => {
                    bar.set_message(format!("Scored {:.2}: {}", weighted_score, clip(&title)));
                }
                PipelineEvent::ArticleSkipped { url, reason } => {
                    bar.set_message(format!("Skipped ({}): {}", reason, clip(&url)));
                }
            }
        }
    })
}

fn clip(text: &str) -> String {
    const MAX: usize = 48;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(MAX).collect();
        format!("{}...", clipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_text_unchanged() {
        assert_eq!(clip("short"), "short");
    }

    #[test]
    fn test_clip_long_text() {
        let long = "x".repeat(100);
        let clipped = clip(&long);
        assert!(clipped.ends_with("..."));
        assert_eq!(clipped.chars().count(), 51);
    }
}
