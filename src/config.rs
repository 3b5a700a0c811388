use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the clip splitter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Entry slot settings
    pub slots: SlotConfig,

    /// Output file settings
    pub output: OutputConfig,

    /// External media engine settings
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Number of pre-allocated clip entry slots
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory clips are written to
    pub dir: PathBuf,

    /// Output filename prefix ("Clip" -> Clip-1.mp4)
    pub file_prefix: String,

    /// Output container extension
    pub container: String,

    /// Write a JSON batch report next to the clips
    pub write_report: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// ffmpeg binary name or path
    pub ffmpeg: String,

    /// ffprobe binary name or path
    pub ffprobe: String,

    /// Video codec for extracted clips
    pub video_codec: String,

    /// Audio codec for extracted clips
    pub audio_codec: String,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self { capacity: 30 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            file_prefix: "Clip".to_string(),
            container: "mp4".to_string(),
            write_report: true,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the first config file found
    pub fn load() -> Result<Self> {
        let config_paths = [
            "clip-splitter.toml",
            "config/clip-splitter.toml",
            "~/.config/clip-splitter/config.toml",
        ];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        Err(anyhow!("No configuration file found"))
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config = toml::from_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path, config_str)?;
        tracing::info!("💾 Configuration saved to: {}", path);
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.slots.capacity == 0 {
            return Err(anyhow!("slots.capacity must be greater than 0"));
        }
        if self.output.file_prefix.is_empty() {
            return Err(anyhow!("output.file_prefix must not be empty"));
        }
        if self.output.container.is_empty() {
            return Err(anyhow!("output.container must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.slots.capacity, 30);
        assert_eq!(config.output.file_prefix, "Clip");
        assert_eq!(config.output.container, "mp4");
        assert_eq!(config.engine.video_codec, "libx264");
        assert_eq!(config.engine.audio_codec, "aac");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [slots]
            capacity = 5

            [engine]
            ffmpeg = "/usr/local/bin/ffmpeg"
            "#,
        )
        .unwrap();

        assert_eq!(config.slots.capacity, 5);
        assert_eq!(config.engine.ffmpeg, "/usr/local/bin/ffmpeg");
        assert_eq!(config.engine.ffprobe, "ffprobe");
        assert_eq!(config.output.file_prefix, "Clip");
    }

    #[test]
    fn test_zero_capacity_fails_validation() {
        let mut config = Config::default();
        config.slots.capacity = 0;
        assert!(config.validate().is_err());
    }
}
