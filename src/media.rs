use crate::config::EngineConfig;
use crate::timecode::TimeRange;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Opening the source media failed; fatal to the whole batch
#[derive(Debug, Error)]
pub enum MediaOpenError {
    #[error("failed to run {probe}: {source}")]
    ProbeLaunch {
        probe: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{} could not read {}", .probe, .path.display())]
    ProbeFailed { probe: String, path: PathBuf },

    #[error("no duration reported for {}", .path.display())]
    MissingDuration { path: PathBuf },
}

/// A single clip write failed; the batch keeps going
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("media engine exited with {status}: {detail}")]
    EngineFailure {
        status: std::process::ExitStatus,
        detail: String,
    },

    #[error("failed to run media engine: {0}")]
    Io(#[from] std::io::Error),
}

/// Exclusive handle to an opened source video.
///
/// Opened once per processing run and consumed by `close` at the end of
/// the run. The underlying engine is not reentrant against the same
/// source, so extraction calls are made one at a time through `&self`
/// on the single handle the run owns.
pub struct MediaHandle {
    path: PathBuf,
    duration: f64,
    engine: EngineConfig,
}

impl MediaHandle {
    /// Probe the source file and capture its duration.
    ///
    /// Any failure here aborts the run before any job starts.
    pub async fn open(path: &Path, engine: &EngineConfig) -> Result<Self, MediaOpenError> {
        let output = tokio::process::Command::new(&engine.ffprobe)
            .args(["-v", "quiet", "-print_format", "json", "-show_format"])
            .arg(path)
            .output()
            .await
            .map_err(|e| MediaOpenError::ProbeLaunch {
                probe: engine.ffprobe.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(MediaOpenError::ProbeFailed {
                probe: engine.ffprobe.clone(),
                path: path.to_path_buf(),
            });
        }

        let probe_data: serde_json::Value =
            serde_json::from_slice(&output.stdout).map_err(|_| MediaOpenError::ProbeFailed {
                probe: engine.ffprobe.clone(),
                path: path.to_path_buf(),
            })?;

        let duration: f64 = probe_data["format"]["duration"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| MediaOpenError::MissingDuration {
                path: path.to_path_buf(),
            })?;

        info!("📹 Opened {} ({:.1}s)", path.display(), duration);

        Ok(Self {
            path: path.to_path_buf(),
            duration,
            engine: engine.clone(),
        })
    }

    /// Source duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-encode the `[start, end)` sub-range of the source into `output`
    pub async fn extract_clip(
        &self,
        range: &TimeRange,
        output: &Path,
    ) -> Result<(), ExtractionError> {
        debug!("Extracting {} -> {}", range, output.display());

        let result = tokio::process::Command::new(&self.engine.ffmpeg)
            .arg("-i")
            .arg(&self.path)
            .args([
                "-ss",
                &range.start_seconds().to_string(),
                "-to",
                &range.end_seconds().to_string(),
                "-c:v",
                &self.engine.video_codec,
                "-c:a",
                &self.engine.audio_codec,
                "-y",
            ])
            .arg(output)
            .output()
            .await?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ExtractionError::EngineFailure {
                status: result.status,
                detail: stderr.lines().last().unwrap_or("").to_string(),
            });
        }

        Ok(())
    }

    /// Release the handle. Called exactly once per run, however many of
    /// the run's jobs failed.
    pub fn close(self) {
        debug!("Closed media handle for {}", self.path.display());
    }

    #[cfg(test)]
    pub(crate) fn stub(path: &Path, duration: f64, engine: EngineConfig) -> Self {
        Self {
            path: path.to_path_buf(),
            duration,
            engine,
        }
    }
}
