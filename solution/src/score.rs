use std::fmt;

use model::base_types::{Grams, Minutes};

use crate::segment::Segment;

/// The two-objective score of a path plus the accounting that produced it.
///
/// Consecutive pairs without an edge in the network are excluded from both
/// objectives; the lenient policy is kept but made observable through
/// `skipped`. A path with no traversable edge scores (0, 0).
#[derive(Debug, Clone, PartialEq)]
pub struct PathScore {
    time: Minutes,
    co2: Grams,
    mode_changes: u32,
    line_changes: u32,
    walking_time: Minutes,
    penalty: Minutes,
    skipped: Vec<Segment>,
}

// static functions
impl PathScore {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        time: Minutes,
        co2: Grams,
        mode_changes: u32,
        line_changes: u32,
        walking_time: Minutes,
        penalty: Minutes,
        skipped: Vec<Segment>,
    ) -> PathScore {
        PathScore {
            time,
            co2,
            mode_changes,
            line_changes,
            walking_time,
            penalty,
            skipped,
        }
    }

    pub fn zero() -> PathScore {
        PathScore::new(0.0, 0.0, 0, 0, 0.0, 0.0, Vec::new())
    }
}

// methods
impl PathScore {
    /// total travel time in minutes, transition penalties and constraint
    /// surcharge included.
    pub fn time(&self) -> Minutes {
        self.time
    }

    /// total emissions in grams, constraint surcharge included.
    pub fn co2(&self) -> Grams {
        self.co2
    }

    pub fn objectives(&self) -> [f64; 2] {
        [self.time, self.co2]
    }

    /// simple trade-off measure used for the balanced representative.
    pub fn objective_sum(&self) -> f64 {
        self.time + self.co2
    }

    pub fn mode_changes(&self) -> u32 {
        self.mode_changes
    }

    pub fn line_changes(&self) -> u32 {
        self.line_changes
    }

    pub fn walking_time(&self) -> Minutes {
        self.walking_time
    }

    /// the surcharge that was added to both objectives for violated rider
    /// constraints. Zero for a feasible path.
    pub fn penalty(&self) -> Minutes {
        self.penalty
    }

    pub fn skipped(&self) -> &[Segment] {
        &self.skipped
    }

    pub fn is_fully_scored(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl fmt::Display for PathScore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}min / {:.2}g", self.time, self.co2)?;
        if !self.skipped.is_empty() {
            write!(f, " ({} segments unscored)", self.skipped.len())?;
        }
        Ok(())
    }
}
