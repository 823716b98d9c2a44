pub mod edges;
pub mod nodes;

use std::collections::HashMap;
use std::fmt;

use edges::Edge;
use nodes::{Node, NodeKind};

use crate::base_types::NodeId;
use crate::config::Config;
use crate::location::Location;
use crate::service_filter::ServiceFilter;

/// Immutable per-query view of the transit network.
///
/// Construction applies the active service filter once and builds the
/// adjacency and edge lookup indices; afterwards the network is read-only.
/// Mode semantics live in the evaluation layer, the network itself is
/// mode-agnostic. Lookups on unknown nodes yield empty results, never errors;
/// endpoint validity of edges is guaranteed by the ingestion side and not
/// re-checked here.
pub struct Network {
    nodes: HashMap<NodeId, Node>,
    edges: Vec<Edge>,

    // indices, built once
    adjacency: HashMap<NodeId, Vec<usize>>,
    edge_lookup: HashMap<(NodeId, NodeId), usize>,
}

// static functions
impl Network {
    /// keeps only the edges the filter allows and indexes them.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>, filter: &ServiceFilter) -> Network {
        let traversable = edges
            .into_iter()
            .filter(|edge| filter.allows(edge))
            .collect();
        Network::from_parts(nodes, traversable)
    }

    fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Network {
        let mut adjacency: HashMap<NodeId, Vec<usize>> = HashMap::new();
        let mut edge_lookup: HashMap<(NodeId, NodeId), usize> = HashMap::new();
        for (idx, edge) in edges.iter().enumerate() {
            adjacency.entry(edge.from()).or_default().push(idx);
            // several departures can share (from, to); the last one wins
            edge_lookup.insert((edge.from(), edge.to()), idx);
        }
        Network {
            nodes: nodes.into_iter().map(|node| (node.id(), node)).collect(),
            edges,
            adjacency,
            edge_lookup,
        }
    }
}

// methods
impl Network {
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// number of nodes in the network.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes_iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    pub fn edges_iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// all outgoing edges of a node together with their index. Empty for an
    /// unknown node.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = (usize, &Edge)> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flatten()
            .map(move |&idx| (idx, &self.edges[idx]))
    }

    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &Edge)> + '_ {
        self.outgoing(node).map(|(_, edge)| (edge.to(), edge))
    }

    /// the edge from `from` to `to`, if any.
    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        self.edge_lookup.get(&(from, to)).map(|&idx| &self.edges[idx])
    }

    pub fn edge_by_index(&self, idx: usize) -> &Edge {
        &self.edges[idx]
    }

    /// A copy of this view augmented with two transient endpoint nodes and
    /// walking edges to / from every stop within the catchment radius.
    /// Returns the augmented network and the ids of the start and end node.
    pub fn extend_for_query(
        &self,
        start: Location,
        end: Location,
        config: &Config,
    ) -> (Network, NodeId, NodeId) {
        let start_id = NodeId::from("@start");
        let end_id = NodeId::from("@end");

        let mut nodes: Vec<Node> = self
            .nodes
            .values()
            .map(|node| Node::new(node.id(), node.location(), node.kind()))
            .collect();
        let mut edges = self.edges.clone();

        for node in self.nodes.values() {
            let dist = start.distance_to(&node.location());
            if dist <= config.walking.max_walk_distance {
                let minutes = dist / config.speeds.walk * 60.0;
                edges.push(Edge::walking(start_id, node.id(), minutes, dist));
            }
            let dist = node.location().distance_to(&end);
            if dist <= config.walking.max_walk_distance {
                let minutes = dist / config.speeds.walk * 60.0;
                edges.push(Edge::walking(node.id(), end_id, minutes, dist));
            }
        }

        nodes.push(Node::new(start_id, start, NodeKind::QueryEndpoint));
        nodes.push(Node::new(end_id, end, NodeKind::QueryEndpoint));

        let network = Network::from_parts(nodes, edges);
        (network, start_id, end_id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "network with {} nodes and {} edges",
            self.size(),
            self.number_of_edges()
        )
    }
}
