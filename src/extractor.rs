use crate::media::MediaHandle;
use crate::planner::ClipJob;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Outcome of one extraction job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobStatus {
    Written,
    Failed,
}

/// Per-job extraction result
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub index: usize,
    pub output_name: String,
    pub status: JobStatus,
    pub output_path: Option<PathBuf>,
    pub error_message: Option<String>,
    pub elapsed: Duration,
}

/// Results for a whole batch run.
///
/// Partial success is the normal steady state: some jobs written, some
/// failed, never the batch as a whole erroring out.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub written: usize,
    pub failed: usize,
    pub total_time: Duration,
    pub jobs: Vec<JobReport>,
}

/// Executes planned jobs against the open media handle, one at a time
pub struct ClipExtractor {
    output_dir: PathBuf,
}

impl ClipExtractor {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Run every job in order against `handle`.
    ///
    /// Jobs run strictly sequentially: the handle owns the only decode
    /// context and the engine is not reentrant against it. A failed job is
    /// recorded and the batch moves on; after the last job the handle is
    /// released, however the jobs went.
    pub async fn run(&self, handle: MediaHandle, jobs: &[ClipJob]) -> BatchReport {
        let start_time = Instant::now();
        let mut reports = Vec::with_capacity(jobs.len());

        for job in jobs {
            let output_path = self.output_dir.join(&job.output_name);
            let job_start = Instant::now();

            info!("✂️ Writing {} ({})", job.output_name, job.range);

            match handle.extract_clip(&job.range, &output_path).await {
                Ok(()) => {
                    info!("✅ Wrote {}", output_path.display());
                    reports.push(JobReport {
                        index: job.index,
                        output_name: job.output_name.clone(),
                        status: JobStatus::Written,
                        output_path: Some(output_path),
                        error_message: None,
                        elapsed: job_start.elapsed(),
                    });
                }
                Err(e) => {
                    warn!("❌ Failed to write {}: {}", job.output_name, e);
                    reports.push(JobReport {
                        index: job.index,
                        output_name: job.output_name.clone(),
                        status: JobStatus::Failed,
                        output_path: None,
                        error_message: Some(e.to_string()),
                        elapsed: job_start.elapsed(),
                    });
                }
            }
        }

        handle.close();

        let written = reports
            .iter()
            .filter(|r| r.status == JobStatus::Written)
            .count();

        BatchReport {
            total: reports.len(),
            written,
            failed: reports.len() - written,
            total_time: start_time.elapsed(),
            jobs: reports,
        }
    }
}
