use std::fmt;

use model::base_types::NodeId;

/// A segment is a consecutive pair of path nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    from: NodeId,
    to: NodeId,
}

// static functions
impl Segment {
    pub fn new(from: NodeId, to: NodeId) -> Segment {
        Segment { from, to }
    }
}

// methods
impl Segment {
    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} -> {}]", self.from, self.to)
    }
}
