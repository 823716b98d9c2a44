use std::collections::HashSet;

use crate::base_types::ServiceId;
use crate::network::edges::Edge;

/// The set of service ids operating on the query date. Computed by the
/// calendar collaborator; the core only tests membership.
pub struct ServiceFilter {
    active: HashSet<ServiceId>,
}

// static functions
impl ServiceFilter {
    pub fn new(active: HashSet<ServiceId>) -> ServiceFilter {
        ServiceFilter { active }
    }

    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> ServiceFilter {
        ServiceFilter {
            active: ids.into_iter().map(ServiceId::from).collect(),
        }
    }
}

// methods
impl ServiceFilter {
    /// an edge is traversable iff its mode is always available (walk / link)
    /// or its service id is active. Scheduled edges without a service id are
    /// not traversable.
    pub fn allows(&self, edge: &Edge) -> bool {
        edge.mode().is_always_available()
            || edge
                .service()
                .map_or(false, |service| self.active.contains(&service))
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base_types::{Mode, NodeId};

    fn edge(mode: Mode, service: Option<&str>) -> Edge {
        Edge::new(
            NodeId::from("a"),
            NodeId::from("b"),
            mode,
            None,
            service.map(ServiceId::from),
            None,
            1.0,
            0.1,
        )
    }

    #[test]
    fn walk_and_link_edges_are_always_traversable() {
        let filter = ServiceFilter::new(HashSet::new());

        assert!(filter.allows(&edge(Mode::Walk, None)));
        assert!(filter.allows(&edge(Mode::Link, None)));
    }

    #[test]
    fn scheduled_edges_need_an_active_service() {
        let filter = ServiceFilter::from_ids(["wd1"]);

        assert!(filter.allows(&edge(Mode::Bus, Some("wd1"))));
        assert!(!filter.allows(&edge(Mode::Bus, Some("sun1"))));
        assert!(!filter.allows(&edge(Mode::Metro, None)));
    }
}
