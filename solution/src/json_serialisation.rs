use itertools::Itertools;
use serde_json::{json, Value};

use model::base_types::{Mode, RouteId};
use model::network::Network;

use crate::individual::Individual;
use crate::path::Path;
use crate::population::Representatives;

/// Serialises the three representative journeys of a finished run.
pub fn representatives_to_json(representatives: &Representatives, network: &Network) -> Value {
    json!({
        "fastest": journey_to_json(&representatives.fastest, network),
        "cleanest": journey_to_json(&representatives.cleanest, network),
        "balanced": journey_to_json(&representatives.balanced, network),
    })
}

pub fn journey_to_json(individual: &Individual, network: &Network) -> Value {
    let score = individual.score();
    json!({
        "legs": legs_to_json(individual.path(), network),
        "timeMinutes": score.time(),
        "co2Grams": score.co2(),
        "modeChanges": score.mode_changes(),
        "lineChanges": score.line_changes(),
        "walkingMinutes": score.walking_time(),
    })
}

struct Leg {
    mode: Mode,
    route: Option<RouteId>,
    stops: Vec<String>,
}

impl Leg {
    fn to_json(&self) -> Value {
        json!({
            "mode": self.mode.to_string(),
            "route": self.route.map(|route| route.to_string()),
            "stops": self.stops,
        })
    }
}

/// Collapses consecutive edges sharing mode and route into one leg.
/// A consecutive pair without a network edge becomes an explicit gap entry
/// instead of being dropped silently.
fn legs_to_json(path: &Path, network: &Network) -> Vec<Value> {
    let mut legs: Vec<Value> = Vec::new();
    let mut current: Option<Leg> = None;

    for (&a, &b) in path.nodes().iter().tuple_windows() {
        let edge = match network.edge(a, b) {
            Some(edge) => edge,
            None => {
                if let Some(leg) = current.take() {
                    legs.push(leg.to_json());
                }
                legs.push(json!({
                    "gap": true,
                    "from": a.to_string(),
                    "to": b.to_string(),
                }));
                continue;
            }
        };

        match &mut current {
            Some(leg) if leg.mode == edge.mode() && leg.route == edge.route() => {
                leg.stops.push(b.to_string());
            }
            _ => {
                if let Some(leg) = current.take() {
                    legs.push(leg.to_json());
                }
                current = Some(Leg {
                    mode: edge.mode(),
                    route: edge.route(),
                    stops: vec![a.to_string(), b.to_string()],
                });
            }
        }
    }

    if let Some(leg) = current.take() {
        legs.push(leg.to_json());
    }
    legs
}
