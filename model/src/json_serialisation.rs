use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::base_types::{Mode, NodeId, RouteId, ServiceId, TripId};
use crate::config::Config;
use crate::location::Location;
use crate::network::edges::Edge;
use crate::network::nodes::{Node, NodeKind};
use crate::network::Network;
use crate::service_filter::ServiceFilter;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonNode {
    id: String,
    lon: f64,
    lat: f64,
    #[serde(default)]
    hub: bool,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonEdge {
    from: String,
    to: String,
    mode: String,
    route_id: Option<String>,
    service_id: Option<String>,
    trip_id: Option<String>,
    /// scheduled duration in minutes; derived from distance and mode speed
    /// when absent
    scheduled_minutes: Option<f64>,
    /// overrides the haversine distance of the endpoints when present
    distance_km: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonParameters {
    walk_speed_kmh: Option<f64>,
    bus_speed_kmh: Option<f64>,
    metro_speed_kmh: Option<f64>,
    bus_emission_g_per_km: Option<f64>,
    metro_emission_g_per_km: Option<f64>,
    mode_change_penalty_min: Option<f64>,
    line_change_penalty_min: Option<f64>,
    penalty_multiplier: Option<f64>,
    max_walk_distance_km: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInstance {
    nodes: Vec<JsonNode>,
    edges: Vec<JsonEdge>,
    active_services: Vec<String>,
    parameters: Option<JsonParameters>,
}

/// Loads a date-filtered transit instance. The input is the output of the
/// graph-construction collaborator: node universe (hubs already clustered),
/// edge list and the set of service ids active on the query date.
pub fn load_transit_instance_from_json(input: serde_json::Value) -> (Arc<Network>, Arc<Config>) {
    let instance: JsonInstance =
        serde_json::from_value(input).expect("could not parse transit instance");

    let config = Arc::new(create_config(&instance));
    let nodes = create_nodes(&instance);
    let edges = create_edges(&instance, &nodes, &config);
    let filter = ServiceFilter::from_ids(instance.active_services.iter().map(|s| s.as_str()));

    let network = Arc::new(Network::new(nodes, edges, &filter));
    (network, config)
}

fn create_config(instance: &JsonInstance) -> Config {
    let mut config = Config::default();
    if let Some(parameters) = &instance.parameters {
        if let Some(v) = parameters.walk_speed_kmh {
            config.speeds.walk = v;
        }
        if let Some(v) = parameters.bus_speed_kmh {
            config.speeds.bus = v;
        }
        if let Some(v) = parameters.metro_speed_kmh {
            config.speeds.metro = v;
        }
        if let Some(v) = parameters.bus_emission_g_per_km {
            config.emissions.bus = v;
        }
        if let Some(v) = parameters.metro_emission_g_per_km {
            config.emissions.metro = v;
        }
        if let Some(v) = parameters.mode_change_penalty_min {
            config.penalties.mode_change = v;
        }
        if let Some(v) = parameters.line_change_penalty_min {
            config.penalties.line_change = v;
        }
        if let Some(v) = parameters.penalty_multiplier {
            config.penalties.violation_multiplier = v;
        }
        if let Some(v) = parameters.max_walk_distance_km {
            config.walking.max_walk_distance = v;
        }
    }
    config
}

fn create_nodes(instance: &JsonInstance) -> Vec<Node> {
    instance
        .nodes
        .iter()
        .map(|node| {
            let kind = if node.hub { NodeKind::Hub } else { NodeKind::Stop };
            Node::new(
                NodeId::from(&node.id),
                Location::new(node.lon, node.lat),
                kind,
            )
        })
        .collect()
}

fn create_edges(instance: &JsonInstance, nodes: &[Node], config: &Config) -> Vec<Edge> {
    let locations: HashMap<NodeId, Location> = nodes
        .iter()
        .map(|node| (node.id(), node.location()))
        .collect();

    let mut edges = Vec::with_capacity(instance.edges.len());
    for json_edge in &instance.edges {
        let from = NodeId::from(&json_edge.from);
        let to = NodeId::from(&json_edge.to);

        // ingestion-side validation: an edge whose endpoints are not in the
        // node universe is rejected here, the core never re-checks
        let (from_location, to_location) = match (locations.get(&from), locations.get(&to)) {
            (Some(f), Some(t)) => (f, t),
            _ => continue,
        };

        // edges of unknown modes are dropped as untraversable
        let mode = match Mode::parse(&json_edge.mode) {
            Ok(mode) => mode,
            Err(_) => continue,
        };

        let distance = json_edge
            .distance_km
            .unwrap_or_else(|| from_location.distance_to(to_location));
        let travel_time = json_edge
            .scheduled_minutes
            .unwrap_or_else(|| distance / config.speed(mode) * 60.0);

        edges.push(Edge::new(
            from,
            to,
            mode,
            json_edge.route_id.as_deref().map(RouteId::from),
            json_edge.service_id.as_deref().map(ServiceId::from),
            json_edge.trip_id.as_deref().map(TripId::from),
            travel_time,
            distance,
        ));
    }
    edges
}
