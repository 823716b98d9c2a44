use std::sync::Arc;

use model::base_types::Minutes;
use model::config::Config;
use model::location::Location;
use model::network::Network;
use solution::population::Population;

use crate::evaluation::{Constraints, PathEvaluator};
use crate::moead::{MoeadParams, MoeadSolver};
use crate::mutation::PathMutator;
use crate::shortest_path::shortest_path;

/// One planning request: where from, where to, the rider limits and the
/// solver budget.
#[derive(Debug, Clone, Copy)]
pub struct TripQuery {
    pub start: Location,
    pub end: Location,
    pub constraints: Constraints,
    pub params: MoeadParams,
}

/// Everything a caller needs from a finished run. The network is the
/// augmented per-query view; paths of the population reference its transient
/// endpoint nodes, so it is handed back alongside them.
pub struct PlanResult {
    pub population: Population,
    pub ideal_point: [Minutes; 2],
    pub network: Arc<Network>,
    pub seed_cost: Minutes,
}

impl std::fmt::Debug for PlanResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanResult")
            .field("ideal_point", &self.ideal_point)
            .field("seed_cost", &self.seed_cost)
            .finish_non_exhaustive()
    }
}

/// Runs the full pipeline for single queries: endpoint augmentation, seed
/// search, population initialization and the generational loop. Owns nothing
/// mutable between queries; every call works on its own augmented view and
/// rng stream.
pub struct TripPlanner {
    network: Arc<Network>,
    config: Arc<Config>,
}

// static functions
impl TripPlanner {
    pub fn new(network: Arc<Network>, config: Arc<Config>) -> TripPlanner {
        TripPlanner { network, config }
    }
}

// methods
impl TripPlanner {
    /// Err if no route connects the query endpoints on the filtered network;
    /// an empty seed path is never fed to the mutation operator.
    pub fn plan(&self, query: &TripQuery, verbose: bool) -> Result<PlanResult, String> {
        let (augmented, start_id, end_id) =
            self.network
                .extend_for_query(query.start, query.end, &self.config);
        let augmented = Arc::new(augmented);

        let (seed_cost, seed_path) =
            shortest_path(&augmented, start_id, end_id, |edge| edge.travel_time());
        if seed_path.is_empty() {
            return Err(format!(
                "no route from {} to {} on the filtered network",
                query.start, query.end
            ));
        }
        if verbose {
            println!("seed path ({:.2}min): {}", seed_cost, seed_path);
        }

        let evaluator = PathEvaluator::new(&augmented, &self.config, query.constraints);
        let solver = MoeadSolver::initialize(
            &augmented,
            evaluator,
            PathMutator::default(),
            query.params,
            seed_path,
        );
        let (population, ideal_point) = solver.solve(verbose);

        Ok(PlanResult {
            population,
            ideal_point,
            network: augmented.clone(),
            seed_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moead::ReplacementScope;
    use model::base_types::NodeId;
    use solution::test_utilities::init_test_data;

    fn query(d: &solution::test_utilities::TestData) -> TripQuery {
        // a few hundred meters from stop a and stop d respectively
        let start = d.network.node(d.stop_a).unwrap().location();
        let end = d.network.node(d.stop_d).unwrap().location();
        TripQuery {
            start: Location::new(start.lon() + 0.001, start.lat()),
            end: Location::new(end.lon() - 0.001, end.lat()),
            constraints: Constraints::none(),
            params: MoeadParams {
                population_size: 6,
                generations: 3,
                neighborhood_size: 3,
                replacement_scope: ReplacementScope::SelectingIndex,
                seed: Some(99),
            },
        }
    }

    #[test]
    fn plan_produces_a_population_between_the_query_endpoints() {
        // ARRANGE
        let d = init_test_data();
        let planner = TripPlanner::new(d.network.clone(), d.config.clone());

        // ACT
        let result = planner.plan(&query(&d), false).unwrap();

        // ASSERT
        assert_eq!(result.population.len(), 6);
        assert!(result.seed_cost.is_finite());
        let start_id = NodeId::from("@start");
        let end_id = NodeId::from("@end");
        for individual in result.population.iter() {
            assert_eq!(individual.path().first(), start_id);
            assert_eq!(individual.path().last(), end_id);
        }
        // the augmented view is handed back together with the population
        assert_eq!(result.network.size(), d.network.size() + 2);
        assert!(result.population.representatives().is_some());
    }

    #[test]
    fn plan_is_reproducible_with_a_fixed_seed() {
        let d = init_test_data();
        let planner = TripPlanner::new(d.network.clone(), d.config.clone());

        let first = planner.plan(&query(&d), false).unwrap();
        let second = planner.plan(&query(&d), false).unwrap();

        assert_eq!(first.ideal_point, second.ideal_point);
        for (a, b) in first.population.iter().zip(second.population.iter()) {
            assert_eq!(a.path(), b.path());
        }
    }

    #[test]
    fn unreachable_endpoints_are_an_error_not_a_panic() {
        let d = init_test_data();
        let planner = TripPlanner::new(d.network.clone(), d.config.clone());
        let mut stranded = query(&d);
        // the middle of the atlantic has no stop within walking distance
        stranded.start = Location::new(-30.0, 40.0);

        let result = planner.plan(&stranded, false);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("no route"));
    }

    #[test]
    fn constraints_are_applied_to_the_population_scores() {
        let d = init_test_data();
        let planner = TripPlanner::new(d.network.clone(), d.config.clone());

        let mut unconstrained = query(&d);
        unconstrained.params.generations = 0;
        let mut constrained = unconstrained;
        constrained.constraints = Constraints {
            max_mode_changes: Some(0),
            ..Constraints::default()
        };

        let base = planner.plan(&unconstrained, false).unwrap();
        let penalized = planner.plan(&constrained, false).unwrap();

        // same seed, same paths, never better objectives
        for (a, b) in base.population.iter().zip(penalized.population.iter()) {
            assert_eq!(a.path(), b.path());
            assert!(b.score().time() >= a.score().time());
            assert!(b.score().co2() >= a.score().co2());
        }
    }
}
