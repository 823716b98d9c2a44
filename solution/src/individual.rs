use std::fmt;

use crate::path::Path;
use crate::score::PathScore;

/// One member of the population: a path together with its evaluated score.
/// The score is computed once when the path is created or replaced and cached
/// here; replacing an individual means replacing the whole pair.
#[derive(Clone)]
pub struct Individual {
    path: Path,
    score: PathScore,
}

// static functions
impl Individual {
    pub fn new(path: Path, score: PathScore) -> Individual {
        Individual { path, score }
    }
}

// methods
impl Individual {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn score(&self) -> &PathScore {
        &self.score
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [{}]", self.path, self.score)
    }
}
