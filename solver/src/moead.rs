use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use model::network::Network;
use solution::individual::Individual;
use solution::path::Path;
use solution::population::Population;

use crate::evaluation::PathEvaluator;
use crate::mutation::PathMutator;

/// Which incumbents a child competes against in the cooperative update.
///
/// In every update step for index i the child is produced by mutating a
/// random neighbor of i. The observed legacy behavior compares the child
/// against the neighborhood of i itself; the textbook variant consults the
/// neighborhood of the parent whose path was mutated. Both are supported,
/// the legacy behavior is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementScope {
    SelectingIndex,
    MutatedParent,
}

#[derive(Debug, Clone, Copy)]
pub struct MoeadParams {
    pub population_size: usize,
    pub generations: usize,
    /// number of closest weight vectors forming a neighborhood (the vector
    /// itself included, its distance to itself is zero)
    pub neighborhood_size: usize,
    pub replacement_scope: ReplacementScope,
    /// rng seed for reproducible runs; a random seed is drawn when absent
    pub seed: Option<u64>,
}

impl Default for MoeadParams {
    fn default() -> MoeadParams {
        MoeadParams {
            population_size: 20,
            generations: 10,
            neighborhood_size: 5,
            replacement_scope: ReplacementScope::SelectingIndex,
            seed: None,
        }
    }
}

/// Decomposition-based multi-objective solver over path populations.
///
/// Each individual owns a weight vector on the 2-simplex; neighborhoods are
/// the closest weight vectors in Euclidean distance. Per generation every
/// index mutates the path of a random neighbor and the child conditionally
/// replaces incumbents by Tchebycheff comparison under their own weights.
pub struct MoeadSolver<'a> {
    network: &'a Network,
    evaluator: PathEvaluator<'a>,
    mutator: PathMutator,
    params: MoeadParams,
    rng: SmallRng,

    population: Population,
    weights: Vec<[f64; 2]>,
    neighbor_lists: Vec<Vec<usize>>,
    ideal_point: [f64; 2],
}

// static functions
impl<'a> MoeadSolver<'a> {
    /// Builds the initial population from the seed path: the seed itself
    /// plus independent mutations of it, all evaluated under the query
    /// constraints. The seed must be a non-empty path.
    pub fn initialize(
        network: &'a Network,
        evaluator: PathEvaluator<'a>,
        mutator: PathMutator,
        params: MoeadParams,
        seed_path: Path,
    ) -> MoeadSolver<'a> {
        let mut rng = match params.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut individuals = Vec::with_capacity(params.population_size);
        individuals.push(Individual::new(seed_path.clone(), evaluator.evaluate(&seed_path)));
        for _ in 1..params.population_size {
            let path = mutator.mutate(&seed_path, network, &mut rng);
            let score = evaluator.evaluate(&path);
            individuals.push(Individual::new(path, score));
        }
        let population = Population::new(individuals);

        let weights: Vec<[f64; 2]> = (0..population.len())
            .map(|_| sample_simplex_weight(&mut rng))
            .collect();
        let neighbor_lists = build_neighbor_lists(&weights, params.neighborhood_size);
        let ideal_point = initial_ideal_point(&population);

        MoeadSolver {
            network,
            evaluator,
            mutator,
            params,
            rng,
            population,
            weights,
            neighbor_lists,
            ideal_point,
        }
    }
}

// methods
impl<'a> MoeadSolver<'a> {
    pub fn ideal_point(&self) -> [f64; 2] {
        self.ideal_point
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Runs the configured number of generations and consumes the solver.
    /// Returns the final population and ideal point.
    pub fn solve(mut self, verbose: bool) -> (Population, [f64; 2]) {
        for generation in 0..self.params.generations {
            self.next_generation();
            if verbose {
                println!(
                    "generation {}/{}: ideal point ({:.2}min, {:.2}g)",
                    generation + 1,
                    self.params.generations,
                    self.ideal_point[0],
                    self.ideal_point[1]
                );
            }
        }
        (self.population, self.ideal_point)
    }

    fn next_generation(&mut self) {
        for index in 0..self.population.len() {
            let parent = *self.neighbor_lists[index]
                .choose(&mut self.rng)
                .unwrap();

            let child_path =
                self.mutator
                    .mutate(self.population.get(parent).path(), self.network, &mut self.rng);
            let child_score = self.evaluator.evaluate(&child_path);

            let objectives = child_score.objectives();
            self.ideal_point[0] = self.ideal_point[0].min(objectives[0]);
            self.ideal_point[1] = self.ideal_point[1].min(objectives[1]);

            let candidates = match self.params.replacement_scope {
                ReplacementScope::SelectingIndex => &self.neighbor_lists[index],
                ReplacementScope::MutatedParent => &self.neighbor_lists[parent],
            };

            for &candidate in candidates {
                let incumbent = tchebycheff(
                    self.population.get(candidate).score().objectives(),
                    self.weights[candidate],
                    self.ideal_point,
                );
                let challenger =
                    tchebycheff(objectives, self.weights[candidate], self.ideal_point);
                if challenger < incumbent {
                    self.population.replace(
                        candidate,
                        Individual::new(child_path.clone(), child_score.clone()),
                    );
                }
            }
        }
    }
}

/// Weighted worst-case distance to the ideal point; reduces the two
/// objectives to a single scalar for the decomposition-based comparison.
pub fn tchebycheff(objectives: [f64; 2], weight: [f64; 2], ideal_point: [f64; 2]) -> f64 {
    let first = weight[0] * (objectives[0] - ideal_point[0]).abs();
    let second = weight[1] * (objectives[1] - ideal_point[1]).abs();
    first.max(second)
}

/// One weight vector of the unit simplex, drawn from the symmetric
/// Dirichlet distribution with unit concentration (exponential draws,
/// normalized); encourages spread over the whole time/emission trade-off.
fn sample_simplex_weight(rng: &mut impl Rng) -> [f64; 2] {
    let first = -f64::ln(1.0 - rng.gen::<f64>());
    let second = -f64::ln(1.0 - rng.gen::<f64>());
    let sum = first + second;
    [first / sum, second / sum]
}

/// For every weight vector the indices of the closest vectors in Euclidean
/// distance, ties broken by index. Fixed for the whole run.
fn build_neighbor_lists(weights: &[[f64; 2]], neighborhood_size: usize) -> Vec<Vec<usize>> {
    weights
        .iter()
        .map(|weight| {
            let mut by_distance: Vec<(f64, usize)> = weights
                .iter()
                .enumerate()
                .map(|(other_idx, other)| {
                    let d0 = weight[0] - other[0];
                    let d1 = weight[1] - other[1];
                    ((d0 * d0 + d1 * d1).sqrt(), other_idx)
                })
                .collect();
            by_distance.sort_by(|a, b| a.partial_cmp(b).unwrap());
            by_distance
                .into_iter()
                .take(neighborhood_size)
                .map(|(_, other_idx)| other_idx)
                .collect()
        })
        .collect()
}

fn initial_ideal_point(population: &Population) -> [f64; 2] {
    let mut ideal_point = [f64::INFINITY, f64::INFINITY];
    for individual in population.iter() {
        let objectives = individual.score().objectives();
        ideal_point[0] = ideal_point[0].min(objectives[0]);
        ideal_point[1] = ideal_point[1].min(objectives[1]);
    }
    ideal_point
}
