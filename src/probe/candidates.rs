//! Candidate identifier generation
//!
//! A best-effort guess at how account ids are allocated: a handful of
//! three-digit prefixes with a swept six-digit suffix, plus a coarse sweep
//! of absolute nine-digit values.

/// Half-open stepped range `start..end` by `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRange {
    pub start: u64,
    pub end: u64,
    pub step: u64,
}

impl StepRange {
    /// A zero `step` is treated as 1
    pub const fn new(start: u64, end: u64, step: u64) -> Self {
        Self { start, end, step }
    }

    fn effective_step(&self) -> u64 {
        self.step.max(1)
    }

    /// Number of values produced by [`StepRange::values`]
    pub fn len(&self) -> usize {
        if self.start >= self.end {
            return 0;
        }
        let span = self.end - self.start;
        span.div_ceil(self.effective_step()) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(self) -> impl Iterator<Item = u64> {
        (self.start..self.end).step_by(self.effective_step() as usize)
    }
}

/// Parameters of the candidate sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSweep {
    /// Prefixes concatenated with each suffix
    pub bases: Vec<u64>,
    /// Suffix sweep
    pub suffixes: StepRange,
    /// Absolute ids tried as-is
    pub absolute: StepRange,
}

impl Default for CandidateSweep {
    fn default() -> Self {
        Self {
            bases: vec![245, 246, 247, 248, 249, 250],
            suffixes: StepRange::new(100_000, 999_999, 10_000),
            absolute: StepRange::new(245_000_000, 245_999_999, 100_000),
        }
    }
}

impl CandidateSweep {
    /// Total candidates: bases x suffixes + absolute
    pub fn len(&self) -> usize {
        self.bases.len() * self.suffixes.len() + self.absolute.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Prefix/suffix candidates first, then the absolute sweep
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        let suffixes = self.suffixes;
        let concatenated = self
            .bases
            .iter()
            .flat_map(move |base| suffixes.values().map(move |suffix| format!("{}{}", base, suffix)));
        concatenated.chain(self.absolute.values().map(|id| id.to_string()))
    }

    pub fn generate(&self) -> Vec<String> {
        self.iter().collect()
    }
}
