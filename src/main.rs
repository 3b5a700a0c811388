use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing::{error, info, warn};

use clip_splitter::{ClipRun, Config, SlotBoard, TimeParser};

fn cli() -> Command {
    Command::new("Clip Splitter")
        .version("0.1.0")
        .about("Extracts clips from a video using pasted timestamp lists")
        .arg(
            Arg::new("video")
                .short('i')
                .long("video")
                .value_name("FILE")
                .help("Source video file (.mp4/.mkv)")
                .required(true),
        )
        .arg(
            Arg::new("times")
                .short('t')
                .long("times")
                .value_name("FILE")
                .help("Text file with pasted timestamps, e.g. \") 1:30-2:45\"")
                .required(true),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Directory for extracted clips (default: current directory)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    let verbose = matches.get_flag("verbose");

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(if verbose {
            "clip_splitter=debug,info"
        } else {
            "clip_splitter=info,warn"
        })
        .init();

    if verbose {
        info!("Verbose logging enabled");
    }

    let video_path = PathBuf::from(matches.get_one::<String>("video").unwrap());
    let times_path = PathBuf::from(matches.get_one::<String>("times").unwrap());

    // Load configuration
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::load_from(std::path::Path::new(path))?,
        None => Config::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }),
    };

    if let Some(dir) = matches.get_one::<String>("output-dir") {
        config.output.dir = PathBuf::from(dir);
    }
    config.validate()?;

    if !video_path.exists() {
        error!("Video file does not exist: {}", video_path.display());
        return Err(anyhow::anyhow!("Video file not found"));
    }

    info!("🚀 Clip Splitter starting...");
    info!("📹 Video: {}", video_path.display());
    info!("📂 Output directory: {}", config.output.dir.display());

    // Detect time frames from the pasted text
    let text = tokio::fs::read_to_string(&times_path).await?;
    let parser = TimeParser::new();
    let mut board = SlotBoard::new(config.slots.capacity);
    let detected = board.apply_candidates(parser.parse(&text));

    if detected == 0 {
        warn!("No time frames detected in {}", times_path.display());
    } else {
        info!("🔎 Detected {} time frames", detected);
    }

    // Run the batch
    let run = ClipRun::new(config);
    let report = run.run(&video_path, &board).await?;

    info!(
        "🎉 Processing completed in {:.2}s",
        report.total_time.as_secs_f64()
    );
    info!("✅ Written: {}", report.written);
    info!("❌ Failed: {}", report.failed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_accepts_verbose_flag() {
        let matches = cli()
            .try_get_matches_from(["clip-splitter", "-i", "v.mp4", "-t", "times.txt", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_defaults_to_off() {
        let matches = cli()
            .try_get_matches_from(["clip-splitter", "-i", "v.mp4", "-t", "times.txt"])
            .unwrap();
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_requires_video_and_times() {
        assert!(cli().try_get_matches_from(["clip-splitter"]).is_err());
        assert!(cli()
            .try_get_matches_from(["clip-splitter", "-i", "v.mp4"])
            .is_err());
    }
}
