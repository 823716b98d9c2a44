use std::fmt;

use crate::base_types::{KiloMeter, Minutes, Mode, NodeId, RouteId, ServiceId, TripId};

/// A directed weighted edge of the transit network.
///
/// Travel time and distance are precomputed by the ingestion side; the core
/// treats both as opaque costs. Scheduled edges carry the route / service /
/// trip ids of the departure they were derived from; walk and link edges
/// carry none.
#[derive(Clone)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    mode: Mode,
    route: Option<RouteId>,
    service: Option<ServiceId>,
    trip: Option<TripId>,
    travel_time: Minutes,
    distance: KiloMeter,
}

// static functions
impl Edge {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        from: NodeId,
        to: NodeId,
        mode: Mode,
        route: Option<RouteId>,
        service: Option<ServiceId>,
        trip: Option<TripId>,
        travel_time: Minutes,
        distance: KiloMeter,
    ) -> Edge {
        Edge {
            from,
            to,
            mode,
            route,
            service,
            trip,
            travel_time,
            distance,
        }
    }

    /// an untimetabled walking connection; used for hub links and for the
    /// temporary edges attached to query endpoints.
    pub fn walking(from: NodeId, to: NodeId, travel_time: Minutes, distance: KiloMeter) -> Edge {
        Edge::new(from, to, Mode::Walk, None, None, None, travel_time, distance)
    }
}

// methods
impl Edge {
    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn route(&self) -> Option<RouteId> {
        self.route
    }

    pub fn service(&self) -> Option<ServiceId> {
        self.service
    }

    pub fn trip(&self) -> Option<TripId> {
        self.trip
    }

    pub fn travel_time(&self) -> Minutes {
        self.travel_time
    }

    pub fn distance(&self) -> KiloMeter {
        self.distance
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}, {:.1}min, {:.2}km)",
            self.from, self.to, self.mode, self.travel_time, self.distance
        )
    }
}
