use std::sync::Arc;

use model::base_types::NodeId;
use model::config::Config;
use model::json_serialisation::load_transit_instance_from_json;
use model::network::Network;

pub struct TestData {
    pub network: Arc<Network>,
    pub config: Arc<Config>,
    pub stop_a: NodeId,
    pub stop_b: NodeId,
    pub stop_c: NodeId,
    pub stop_d: NodeId,
    pub stop_e: NodeId,
    pub hub: NodeId,
    pub isolated: NodeId,
}

/// A small inner-city instance: five stops on two bus lines and a metro
/// line, one multimodal hub and one stop without any service. Distances and
/// durations are pinned explicitly so tests can assert exact objectives.
///
/// Shortest path from A to D by travel time is A - B - C - D with 12 minutes
/// (5 + 4 bus on line 201, then a 3 minute walk).
pub fn init_test_data() -> TestData {
    let input = serde_json::json!({
        "nodes": [
            {"id": "stopA", "lon": -8.610, "lat": 41.145},
            {"id": "stopB", "lon": -8.620, "lat": 41.150},
            {"id": "stopC", "lon": -8.630, "lat": 41.155},
            {"id": "stopD", "lon": -8.640, "lat": 41.158},
            {"id": "stopE", "lon": -8.625, "lat": 41.147},
            {"id": "hub1", "lon": -8.6301, "lat": 41.1551, "hub": true},
            {"id": "stopZ", "lon": -8.700, "lat": 41.200}
        ],
        "edges": [
            {"from": "stopA", "to": "stopB", "mode": "BUS", "routeId": "201",
             "serviceId": "wd1", "tripId": "t201-1", "scheduledMinutes": 5.0, "distanceKm": 1.0},
            {"from": "stopB", "to": "stopC", "mode": "BUS", "routeId": "201",
             "serviceId": "wd1", "tripId": "t201-1", "scheduledMinutes": 4.0, "distanceKm": 1.0},
            {"from": "stopC", "to": "stopD", "mode": "WALK",
             "scheduledMinutes": 3.0, "distanceKm": 0.25},
            {"from": "stopA", "to": "stopC", "mode": "METRO", "routeId": "mA",
             "serviceId": "wd1", "tripId": "tmA-1", "scheduledMinutes": 12.0, "distanceKm": 2.0},
            {"from": "stopB", "to": "stopD", "mode": "BUS", "routeId": "202",
             "serviceId": "wd1", "tripId": "t202-1", "scheduledMinutes": 9.0, "distanceKm": 1.5},
            {"from": "stopC", "to": "hub1", "mode": "LINK",
             "scheduledMinutes": 0.5, "distanceKm": 0.04},
            {"from": "hub1", "to": "stopC", "mode": "LINK",
             "scheduledMinutes": 0.5, "distanceKm": 0.04},
            {"from": "hub1", "to": "stopD", "mode": "METRO", "routeId": "mB",
             "serviceId": "wd1", "tripId": "tmB-1", "scheduledMinutes": 4.0, "distanceKm": 0.3},
            {"from": "stopB", "to": "stopD", "mode": "BUS", "routeId": "299",
             "serviceId": "sun1", "tripId": "t299-1", "scheduledMinutes": 1.0, "distanceKm": 1.5},
            {"from": "stopD", "to": "stopE", "mode": "WALK",
             "scheduledMinutes": 2.0, "distanceKm": 0.15},
            {"from": "stopE", "to": "stopB", "mode": "BUS", "routeId": "203",
             "serviceId": "wd1", "tripId": "t203-1", "scheduledMinutes": 3.0, "distanceKm": 0.8}
        ],
        "activeServices": ["wd1"],
        "parameters": null
    });

    let (network, config) = load_transit_instance_from_json(input);
    TestData {
        network,
        config,
        stop_a: NodeId::from("stopA"),
        stop_b: NodeId::from("stopB"),
        stop_c: NodeId::from("stopC"),
        stop_d: NodeId::from("stopD"),
        stop_e: NodeId::from("stopE"),
        hub: NodeId::from("hub1"),
        isolated: NodeId::from("stopZ"),
    }
}
