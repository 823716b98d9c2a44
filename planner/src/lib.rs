use serde::Deserialize;

use model::json_serialisation::load_transit_instance_from_json;
use model::location::Location;
use solution::json_serialisation::representatives_to_json;
use solver::{Constraints, MoeadParams, ReplacementScope, TripPlanner, TripQuery};

use std::time as stdtime;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonPoint {
    lon: f64,
    lat: f64,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonConstraints {
    max_mode_changes: Option<u32>,
    max_line_changes: Option<u32>,
    max_walking_minutes: Option<f64>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonQuery {
    start: JsonPoint,
    end: JsonPoint,
    #[serde(default)]
    constraints: JsonConstraints,
    population_size: Option<usize>,
    generations: Option<usize>,
    neighborhood_size: Option<usize>,
    replacement_scope: Option<String>,
    seed: Option<u64>,
}

/// Runs one planning query against one instance. The input value carries the
/// transit instance (nodes / edges / active services / parameters) plus a
/// "query" object; the result holds the three representative journeys and
/// the ideal point.
pub fn run(input: serde_json::Value) -> serde_json::Value {
    let query_value = input
        .get("query")
        .cloned()
        .expect("input is missing the query object");
    let json_query: JsonQuery =
        serde_json::from_value(query_value).expect("could not parse query");

    let (network, config) = load_transit_instance_from_json(input);
    println!("loaded {}", network);

    let query = create_query(&json_query);
    let start_time = stdtime::Instant::now();

    let planner = TripPlanner::new(network, config);
    let result = match planner.plan(&query, true) {
        Ok(result) => result,
        Err(message) => {
            println!("planning failed: {}", message);
            return serde_json::json!({ "error": message });
        }
    };

    let end_time = stdtime::Instant::now();
    let runtime_duration = end_time.duration_since(start_time);

    let representatives = result
        .population
        .representatives()
        .expect("population is never empty after a successful run");

    println!("\nfastest:  {}", representatives.fastest);
    println!("cleanest: {}", representatives.cleanest);
    println!("balanced: {}", representatives.balanced);
    println!("running time: {:0.2}sec", runtime_duration.as_secs_f32());

    serde_json::json!({
        "idealPoint": {
            "timeMinutes": result.ideal_point[0],
            "co2Grams": result.ideal_point[1],
        },
        "seedCostMinutes": result.seed_cost,
        "journeys": representatives_to_json(&representatives, &result.network),
    })
}

fn create_query(json_query: &JsonQuery) -> TripQuery {
    let defaults = MoeadParams::default();
    let replacement_scope = match json_query.replacement_scope.as_deref() {
        Some("mutatedParent") => ReplacementScope::MutatedParent,
        _ => ReplacementScope::SelectingIndex,
    };
    TripQuery {
        start: Location::new(json_query.start.lon, json_query.start.lat),
        end: Location::new(json_query.end.lon, json_query.end.lat),
        constraints: Constraints {
            max_mode_changes: json_query.constraints.max_mode_changes,
            max_line_changes: json_query.constraints.max_line_changes,
            max_walking_minutes: json_query.constraints.max_walking_minutes,
        },
        params: MoeadParams {
            population_size: json_query.population_size.unwrap_or(defaults.population_size),
            generations: json_query.generations.unwrap_or(defaults.generations),
            neighborhood_size: json_query
                .neighborhood_size
                .unwrap_or(defaults.neighborhood_size),
            replacement_scope,
            seed: json_query.seed,
        },
    }
}
