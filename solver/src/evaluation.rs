use itertools::Itertools;

use model::base_types::{Minutes, Mode, RouteId};
use model::config::Config;
use model::network::Network;
use solution::path::Path;
use solution::score::PathScore;
use solution::segment::Segment;

/// Rider-experience limits of one planning query. A supplied and exceeded
/// limit turns into a surcharge on both objectives, never into a hard
/// rejection; unset limits are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Constraints {
    pub max_mode_changes: Option<u32>,
    pub max_line_changes: Option<u32>,
    pub max_walking_minutes: Option<Minutes>,
}

impl Constraints {
    pub fn none() -> Constraints {
        Constraints::default()
    }
}

/// Scores a path against the network it was produced on.
///
/// Per edge: the stored travel time goes into the time objective, distance
/// times the mode emission factor into the emission objective. Transitions
/// between edges add penalty minutes (mode change, line change). A
/// consecutive pair without a network edge contributes to neither objective
/// and leaves the transition state untouched; it is recorded on the score.
pub struct PathEvaluator<'a> {
    network: &'a Network,
    config: &'a Config,
    constraints: Constraints,
}

// static functions
impl<'a> PathEvaluator<'a> {
    pub fn new(network: &'a Network, config: &'a Config, constraints: Constraints) -> Self {
        PathEvaluator {
            network,
            config,
            constraints,
        }
    }
}

// methods
impl<'a> PathEvaluator<'a> {
    pub fn constraints(&self) -> Constraints {
        self.constraints
    }

    pub fn evaluate(&self, path: &Path) -> PathScore {
        let mut time: Minutes = 0.0;
        let mut co2 = 0.0;
        let mut walking_time: Minutes = 0.0;
        let mut mode_changes: u32 = 0;
        let mut line_changes: u32 = 0;
        let mut skipped: Vec<Segment> = Vec::new();

        let mut prev_mode: Option<Mode> = None;
        let mut prev_route: Option<RouteId> = None;

        for (&from, &to) in path.nodes().iter().tuple_windows() {
            let edge = match self.network.edge(from, to) {
                Some(edge) => edge,
                None => {
                    skipped.push(Segment::new(from, to));
                    continue;
                }
            };

            time += edge.travel_time();
            if edge.mode() == Mode::Walk {
                walking_time += edge.travel_time();
            }
            co2 += edge.distance() * self.config.emission_g_per_km(edge.mode());

            if let Some(prev) = prev_mode {
                if edge.mode() != prev {
                    mode_changes += 1;
                    time += self.config.penalties.mode_change;
                }
            }
            if let (Some(prev), Some(route)) = (prev_route, edge.route()) {
                if route != prev {
                    line_changes += 1;
                    time += self.config.penalties.line_change;
                }
            }

            prev_mode = Some(edge.mode());
            prev_route = edge.route();
        }

        let penalty = self.violation_penalty(mode_changes, line_changes, walking_time);

        PathScore::new(
            time + penalty,
            co2 + penalty,
            mode_changes,
            line_changes,
            walking_time,
            penalty,
            skipped,
        )
    }

    /// The surcharge for exceeded limits. It is added to both objectives so
    /// that a violating path is dominated in time and emissions at once,
    /// which lets the solver discard infeasible paths without separate
    /// feasibility bookkeeping.
    fn violation_penalty(
        &self,
        mode_changes: u32,
        line_changes: u32,
        walking_time: Minutes,
    ) -> Minutes {
        let multiplier = self.config.penalties.violation_multiplier;
        let mut penalty: Minutes = 0.0;

        if let Some(max) = self.constraints.max_mode_changes {
            if mode_changes > max {
                penalty +=
                    f64::from(mode_changes - max) * self.config.penalties.mode_change * multiplier;
            }
        }
        if let Some(max) = self.constraints.max_line_changes {
            if line_changes > max {
                penalty +=
                    f64::from(line_changes - max) * self.config.penalties.line_change * multiplier;
            }
        }
        if let Some(max) = self.constraints.max_walking_minutes {
            if walking_time > max {
                penalty += (walking_time - max) * multiplier;
            }
        }
        penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solution::test_utilities::{init_test_data, TestData};

    fn seed_path(d: &TestData) -> Path {
        Path::new(vec![d.stop_a, d.stop_b, d.stop_c, d.stop_d], &d.network).unwrap()
    }

    #[test]
    fn scenario_time_is_raw_minutes_plus_one_mode_change() {
        // ARRANGE
        let d = init_test_data();
        let evaluator = PathEvaluator::new(&d.network, &d.config, Constraints::none());

        // ACT
        let score = evaluator.evaluate(&seed_path(&d));

        // ASSERT: 5 + 4 + 3 raw minutes; line 201 twice means no line
        // change; bus to walk is the single mode change
        assert_eq!(score.time(), 12.0 + d.config.penalties.mode_change);
        assert_eq!(score.mode_changes(), 1);
        assert_eq!(score.line_changes(), 0);
        assert_eq!(score.walking_time(), 3.0);
        assert_eq!(score.penalty(), 0.0);
        assert!(score.is_fully_scored());
    }

    #[test]
    fn scenario_emissions_are_bus_kilometers_times_bus_factor() {
        let d = init_test_data();
        let evaluator = PathEvaluator::new(&d.network, &d.config, Constraints::none());

        let score = evaluator.evaluate(&seed_path(&d));

        // two bus kilometers, the walk is free
        assert!((score.co2() - 2.0 * d.config.emissions.bus).abs() < 1e-9);
    }

    #[test]
    fn exceeding_the_mode_change_limit_compounds_the_penalty() {
        // ARRANGE
        let d = init_test_data();
        let constraints = Constraints {
            max_mode_changes: Some(0),
            ..Constraints::default()
        };
        let evaluator = PathEvaluator::new(&d.network, &d.config, constraints);

        // ACT
        let score = evaluator.evaluate(&seed_path(&d));

        // ASSERT: the transition itself still costs one mode-change penalty
        // and the violated limit adds the same penalty once more, multiplied
        let penalties = &d.config.penalties;
        let expected_surcharge = penalties.mode_change * penalties.violation_multiplier;
        assert_eq!(score.penalty(), expected_surcharge);
        assert_eq!(
            score.time(),
            12.0 + penalties.mode_change + expected_surcharge
        );
        assert!((score.co2() - (2.0 * d.config.emissions.bus + expected_surcharge)).abs() < 1e-9);
    }

    #[test]
    fn constrained_score_never_undercuts_the_unconstrained_score() {
        let d = init_test_data();
        let unconstrained = PathEvaluator::new(&d.network, &d.config, Constraints::none());
        let constrained = PathEvaluator::new(
            &d.network,
            &d.config,
            Constraints {
                max_mode_changes: Some(0),
                max_line_changes: Some(0),
                max_walking_minutes: Some(1.0),
            },
        );
        let paths = [
            seed_path(&d),
            Path::new(vec![d.stop_a, d.stop_b, d.stop_d], &d.network).unwrap(),
            Path::new(vec![d.stop_a, d.stop_c, d.stop_d], &d.network).unwrap(),
        ];

        for path in &paths {
            let base = unconstrained.evaluate(path);
            let penalized = constrained.evaluate(path);
            assert!(penalized.time() >= base.time());
            assert!(penalized.co2() >= base.co2());
        }
    }

    #[test]
    fn line_changes_need_route_ids_on_both_edges() {
        // ARRANGE
        let d = init_test_data();
        let evaluator = PathEvaluator::new(&d.network, &d.config, Constraints::none());

        // ACT: bus line 201 onto bus line 202, same mode
        let path = Path::new(vec![d.stop_a, d.stop_b, d.stop_d], &d.network).unwrap();
        let score = evaluator.evaluate(&path);

        // ASSERT
        assert_eq!(score.mode_changes(), 0);
        assert_eq!(score.line_changes(), 1);
        assert_eq!(
            score.time(),
            5.0 + 9.0 + d.config.penalties.line_change
        );
    }

    #[test]
    fn walking_over_the_limit_is_surcharged_per_excess_minute() {
        let d = init_test_data();
        let evaluator = PathEvaluator::new(
            &d.network,
            &d.config,
            Constraints {
                max_walking_minutes: Some(1.0),
                ..Constraints::default()
            },
        );

        let score = evaluator.evaluate(&seed_path(&d));

        // three walking minutes, two over the limit
        assert_eq!(
            score.penalty(),
            2.0 * d.config.penalties.violation_multiplier
        );
    }

    #[test]
    fn missing_edges_are_skipped_but_recorded() {
        // ARRANGE
        let d = init_test_data();
        let evaluator = PathEvaluator::new(&d.network, &d.config, Constraints::none());

        // ACT: no edge between a and d, the rest scores normally
        let path = Path::new_trusted(vec![d.stop_a, d.stop_d, d.stop_e]);
        let score = evaluator.evaluate(&path);

        // ASSERT
        assert!(!score.is_fully_scored());
        assert_eq!(score.skipped().len(), 1);
        assert_eq!(score.skipped()[0].from(), d.stop_a);
        assert_eq!(score.time(), 2.0); // the d - e walk
        assert_eq!(score.mode_changes(), 0);
    }

    #[test]
    fn path_without_any_traversable_edge_scores_zero() {
        let d = init_test_data();
        let evaluator = PathEvaluator::new(&d.network, &d.config, Constraints::none());

        let score = evaluator.evaluate(&Path::new_trusted(vec![d.stop_a, d.isolated]));

        assert_eq!(score.objectives(), [0.0, 0.0]);
        assert_eq!(score.skipped().len(), 1);
    }

    #[test]
    fn link_edges_count_as_mode_changes_but_not_as_walking() {
        // ARRANGE
        let d = init_test_data();
        let evaluator = PathEvaluator::new(&d.network, &d.config, Constraints::none());

        // ACT: bus, bus, link to the hub, metro
        let path = Path::new(
            vec![d.stop_a, d.stop_b, d.stop_c, d.hub, d.stop_d],
            &d.network,
        )
        .unwrap();
        let score = evaluator.evaluate(&path);

        // ASSERT: bus -> link and link -> metro are two mode changes; the
        // link minutes are not walking time
        assert_eq!(score.mode_changes(), 2);
        assert_eq!(score.walking_time(), 0.0);
        assert_eq!(
            score.time(),
            5.0 + 4.0 + 0.5 + 4.0 + 2.0 * d.config.penalties.mode_change
        );
    }
}
