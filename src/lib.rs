/// Clip Splitter
///
/// Parses pasted timestamp lists into validated time ranges and extracts
/// each range from a source video as an independent clip file.

pub mod config;
pub mod extractor;
pub mod media;
pub mod parser;
pub mod pipeline;
pub mod planner;
pub mod slots;
pub mod timecode;
pub mod validator;

// Re-export main types for easy access
pub use crate::config::Config;
pub use crate::extractor::{BatchReport, ClipExtractor, JobReport, JobStatus};
pub use crate::media::{ExtractionError, MediaHandle, MediaOpenError};
pub use crate::parser::{RangeCandidate, TimeParser};
pub use crate::pipeline::ClipRun;
pub use crate::planner::{ClipJob, ClipPlanner, Plan, SlotOutcome};
pub use crate::slots::{SlotBoard, TimeSlot};
pub use crate::timecode::{TimeCode, TimeRange};
pub use crate::validator::{validate, ValidationError};
