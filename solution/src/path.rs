use itertools::Itertools;
use model::base_types::NodeId;
use model::network::Network;
use std::fmt;

use std::iter::Iterator;

/// A Path is a sequence of node ids where consecutive pairs are meant to be
/// edges of the network the path was produced on.
///
/// Endpoints are fixed for the lifetime of a planning query. A path of fewer
/// than two nodes carries no journey; shortest-path reconstruction returns an
/// empty path for an unreachable target and callers treat it as "no route".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    node_sequence: Vec<NodeId>,
}

// static functions
impl Path {
    /// creates a new Path and asserts that every consecutive pair is an edge
    /// of the given network.
    pub fn new(node_sequence: Vec<NodeId>, network: &Network) -> Result<Path, String> {
        for (&a, &b) in node_sequence.iter().tuple_windows() {
            if network.edge(a, b).is_none() {
                return Err(format!("not a valid path: {} cannot reach {}", a, b));
            }
        }
        Ok(Path::new_trusted(node_sequence))
    }

    /// creates a new Path without checking edge existence. Used where gaps
    /// are an accepted outcome (mutation walks, reconstruction); the
    /// evaluator accounts for missing links instead.
    pub fn new_trusted(node_sequence: Vec<NodeId>) -> Path {
        Path { node_sequence }
    }
}

// methods
impl Path {
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_sequence.iter().copied()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.node_sequence
    }

    pub fn len(&self) -> usize {
        self.node_sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_sequence.is_empty()
    }

    /// first node; must not be called on an empty path.
    pub fn first(&self) -> NodeId {
        self.node_sequence[0]
    }

    /// last node; must not be called on an empty path.
    pub fn last(&self) -> NodeId {
        self.node_sequence[self.node_sequence.len() - 1]
    }

    pub fn consume(self) -> Vec<NodeId> {
        self.node_sequence
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut nodes_iter = self.node_sequence.iter();
        match nodes_iter.next() {
            None => write!(f, "(empty path)")?,
            Some(first) => {
                write!(f, "{}", first)?;
                for node in nodes_iter {
                    write!(f, " - {}", node)?;
                }
            }
        }
        Ok(())
    }
}
