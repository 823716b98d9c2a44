use std::fmt;

use crate::base_types::NodeId;
use crate::location::Location;

/// Kind of a network node. `QueryEndpoint` nodes only exist in the augmented
/// network of a single planning query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Stop,
    Hub,
    QueryEndpoint,
}

pub struct Node {
    id: NodeId,
    location: Location,
    kind: NodeKind,
}

// static functions
impl Node {
    pub fn new(id: NodeId, location: Location, kind: NodeKind) -> Node {
        Node { id, location, kind }
    }
}

// methods
impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_hub(&self) -> bool {
        self.kind == NodeKind::Hub
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.id, self.location)
    }
}
