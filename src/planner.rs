use crate::config::OutputConfig;
use crate::slots::SlotBoard;
use crate::timecode::TimeRange;
use crate::validator::{self, ValidationError};
use serde::Serialize;
use tracing::{debug, warn};

/// A planned, validated extraction request.
///
/// `index` is the slot's 1-based position among all slots, not among
/// accepted slots, so `Clip-3` stays `Clip-3` even when slots 1 and 2 are
/// blank. Immutable once planned; the extractor consumes it exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipJob {
    pub index: usize,
    pub range: TimeRange,
    pub output_name: String,
}

/// Per-slot planning outcome, in slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlotOutcome {
    Planned,
    /// At least one field blank: not yet specified, not an error
    SkippedBlank,
    SkippedInvalid(ValidationError),
}

/// Result of one planning pass over the whole board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub jobs: Vec<ClipJob>,
    pub outcomes: Vec<SlotOutcome>,
}

impl Plan {
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.jobs.len()
    }
}

/// Turns the slot board plus the media duration into an ordered job list
pub struct ClipPlanner {
    file_prefix: String,
    container: String,
}

impl ClipPlanner {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            file_prefix: output.file_prefix.clone(),
            container: output.container.clone(),
        }
    }

    /// Plan every slot in board order.
    ///
    /// Blank slots are skipped quietly; slots the validator rejects are
    /// skipped with a diagnostic. Neither halts planning of later slots.
    /// Pure over its inputs: planning the same board twice yields
    /// structurally identical plans.
    pub fn plan(&self, board: &SlotBoard, duration: f64) -> Plan {
        let mut jobs = Vec::new();
        let mut outcomes = Vec::with_capacity(board.len());

        for (i, slot) in board.slots().iter().enumerate() {
            let index = i + 1;

            if slot.has_blank_field() {
                debug!("Slot {} not filled in, skipping", index);
                outcomes.push(SlotOutcome::SkippedBlank);
                continue;
            }

            match validator::validate(slot.start_fields(), slot.end_fields(), duration) {
                Ok(range) => {
                    jobs.push(ClipJob {
                        index,
                        range,
                        output_name: format!("{}-{}.{}", self.file_prefix, index, self.container),
                    });
                    outcomes.push(SlotOutcome::Planned);
                }
                Err(ValidationError::IncompleteRange) => {
                    warn!("Skipping incomplete time frame: Clip-{}", index);
                    outcomes.push(SlotOutcome::SkippedInvalid(ValidationError::IncompleteRange));
                }
                Err(e) => {
                    warn!("Skipping invalid time frame: Clip-{}", index);
                    outcomes.push(SlotOutcome::SkippedInvalid(e));
                }
            }
        }

        Plan { jobs, outcomes }
    }
}
