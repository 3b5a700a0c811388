use crate::config::Config;
use crate::extractor::{BatchReport, ClipExtractor};
use crate::media::MediaHandle;
use crate::planner::ClipPlanner;
use crate::slots::SlotBoard;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Run context for one processing pass.
///
/// Owns the configuration and drives open -> plan -> extract -> report.
/// The media handle lives only inside `run`, so a run can never leak it
/// or share it with a second concurrent batch.
pub struct ClipRun {
    config: Config,
}

impl ClipRun {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute one batch against `video_path`.
    ///
    /// Failure to open the source is the only fatal error; everything
    /// after that degrades per slot or per job and ends in the report.
    pub async fn run(&self, video_path: &Path, board: &SlotBoard) -> Result<BatchReport> {
        // Output directory first: once the handle is open, nothing between
        // open and close may fail the run, or close would be skipped.
        tokio::fs::create_dir_all(&self.config.output.dir)
            .await
            .with_context(|| {
                format!(
                    "failed to create output directory {}",
                    self.config.output.dir.display()
                )
            })?;

        let handle = MediaHandle::open(video_path, &self.config.engine)
            .await
            .with_context(|| format!("failed to open source media {}", video_path.display()))?;

        let planner = ClipPlanner::new(&self.config.output);
        let plan = planner.plan(board, handle.duration());

        info!(
            "📋 Planned {} clips ({} slots skipped)",
            plan.jobs.len(),
            plan.skipped()
        );

        let extractor = ClipExtractor::new(&self.config.output.dir);
        let report = extractor.run(handle, &plan.jobs).await;

        if self.config.output.write_report {
            let report_path = self.config.output.dir.join("clip_results.json");
            match serde_json::to_string_pretty(&report) {
                Ok(json_data) => {
                    if let Err(e) = tokio::fs::write(&report_path, json_data).await {
                        warn!("Failed to save report to {}: {}", report_path.display(), e);
                    } else {
                        info!("💾 Results saved to: {}", report_path.display());
                    }
                }
                Err(e) => warn!("Failed to serialize batch report: {}", e),
            }
        }

        info!(
            "🎬 Batch finished: {} written, {} failed",
            report.written, report.failed
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_unopenable_media_is_fatal_before_any_job() {
        let mut config = Config::default();
        config.engine.ffprobe = "/nonexistent/ffprobe-for-test".to_string();

        let run = ClipRun::new(config);
        let board = SlotBoard::new(3);

        let result = run.run(Path::new("missing.mp4"), &board).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_output_dir_failure_happens_before_media_open() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut config = Config::default();
        // A path under a regular file cannot be created
        config.output.dir = blocker.join("clips");
        config.engine.ffprobe = "/nonexistent/ffprobe-for-test".to_string();

        let run = ClipRun::new(config);
        let board = SlotBoard::new(3);

        let err = run.run(Path::new("missing.mp4"), &board).await.unwrap_err();
        // The directory error surfaces, so no handle was opened yet
        assert!(err.to_string().contains("failed to create output directory"));
    }
}
