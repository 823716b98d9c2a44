use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use model::base_types::{Minutes, NodeId};
use model::network::edges::Edge;
use model::network::Network;
use solution::path::Path;

/// Queue entry of the search. Ordered by (cost, insertion sequence) with the
/// comparison inverted, so the std max-heap pops the cheapest entry and ties
/// resolve in insertion order independent of traversal order.
struct QueueEntry {
    cost: Minutes,
    seq: usize,
    node: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap()
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for QueueEntry {}

/// Dijkstra from `source` to `target` under the given edge-cost selector
/// (non-negative costs assumed).
///
/// The search stops the first time the target is popped with its final cost,
/// not when it is first discovered. Predecessors store the edge index that
/// was used, so per-segment metadata is recoverable via
/// `Network::edge_by_index` without a second lookup pass.
///
/// An unreachable target yields `(Minutes::INFINITY, empty path)`; a target
/// equal to the source yields a zero cost and an empty path as well, since
/// the reconstruction walks predecessor links and the source has none.
pub fn shortest_path(
    network: &Network,
    source: NodeId,
    target: NodeId,
    edge_cost: impl Fn(&Edge) -> Minutes,
) -> (Minutes, Path) {
    let mut dist: HashMap<NodeId, Minutes> = HashMap::new();
    // predecessor edge (by index) over which a node was reached
    let mut prev: HashMap<NodeId, usize> = HashMap::new();

    dist.insert(source, 0.0);

    let mut seq: usize = 0;
    let mut heap: BinaryHeap<QueueEntry> = BinaryHeap::new();
    heap.push(QueueEntry {
        cost: 0.0,
        seq,
        node: source,
    });

    while let Some(entry) = heap.pop() {
        if entry.node == target {
            break;
        }
        // stale entry, a cheaper way to this node was already settled
        if entry.cost > *dist.get(&entry.node).unwrap_or(&Minutes::INFINITY) {
            continue;
        }

        for (edge_idx, edge) in network.outgoing(entry.node) {
            let alt = entry.cost + edge_cost(edge);
            if alt < *dist.get(&edge.to()).unwrap_or(&Minutes::INFINITY) {
                dist.insert(edge.to(), alt);
                prev.insert(edge.to(), edge_idx);
                seq += 1;
                heap.push(QueueEntry {
                    cost: alt,
                    seq,
                    node: edge.to(),
                });
            }
        }
    }

    let total_cost = *dist.get(&target).unwrap_or(&Minutes::INFINITY);

    // walk predecessor edges back from the target, then prepend the source
    let mut nodes: Vec<NodeId> = Vec::new();
    let mut current = target;
    while let Some(&edge_idx) = prev.get(&current) {
        nodes.push(current);
        current = network.edge_by_index(edge_idx).from();
    }
    if !nodes.is_empty() {
        nodes.push(source);
        nodes.reverse();
    }

    (total_cost, Path::new_trusted(nodes))
}
