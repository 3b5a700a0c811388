use crate::parser::RangeCandidate;
use tracing::debug;

/// One clip entry: six text fields for start and end `H:M:S`.
///
/// Fields hold raw text, not parsed numbers, so the board can represent
/// half-filled entries the same way the entry form does. New slots are
/// seeded with `"0"` in both hour fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_h: String,
    pub start_m: String,
    pub start_s: String,
    pub end_h: String,
    pub end_m: String,
    pub end_s: String,
}

impl TimeSlot {
    pub fn new() -> Self {
        Self {
            start_h: "0".to_string(),
            start_m: String::new(),
            start_s: String::new(),
            end_h: "0".to_string(),
            end_m: String::new(),
            end_s: String::new(),
        }
    }

    pub fn start_fields(&self) -> [&str; 3] {
        [&self.start_h, &self.start_m, &self.start_s]
    }

    pub fn end_fields(&self) -> [&str; 3] {
        [&self.end_h, &self.end_m, &self.end_s]
    }

    /// True when any of the six fields is blank ("not yet specified")
    pub fn has_blank_field(&self) -> bool {
        self.start_fields()
            .iter()
            .chain(self.end_fields().iter())
            .any(|f| f.is_empty())
    }

    fn fill(&mut self, candidate: &RangeCandidate) {
        let [sh, sm, ss] = candidate.start.clone();
        let [eh, em, es] = candidate.end.clone();
        self.start_h = sh;
        self.start_m = sm;
        self.start_s = ss;
        self.end_h = eh;
        self.end_m = em;
        self.end_s = es;
    }
}

impl Default for TimeSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered, fixed-capacity collection of clip entry slots.
///
/// Slot order is clip order: slot 1 becomes `Clip-1`, whether or not
/// earlier slots ever get filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBoard {
    slots: Vec<TimeSlot>,
}

impl SlotBoard {
    /// Pre-allocate `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![TimeSlot::new(); capacity],
        }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut TimeSlot> {
        self.slots.get_mut(index)
    }

    /// Write detected candidates into slots in order, starting at slot 0.
    ///
    /// Candidates beyond the board's capacity are dropped. Returns how many
    /// were written.
    pub fn apply_candidates<I>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = RangeCandidate>,
    {
        let mut written = 0;
        for (slot, candidate) in self.slots.iter_mut().zip(candidates) {
            slot.fill(&candidate);
            written += 1;
        }

        debug!("Filled {} of {} slots", written, self.slots.len());
        written
    }
}
