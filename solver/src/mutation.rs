use rand::seq::IteratorRandom;
use rand::Rng;

use model::network::Network;
use solution::path::Path;

/// Structural mutation operator: rewrites short interior stretches of a path
/// by randomized walks over the adjacency of the network.
///
/// Endpoints are invariant: the first node is never part of a rewritten
/// stretch and the last node is forcibly reset after all rewrites. The walk
/// does not guarantee that the rebuilt stretch reconnects to the remaining
/// tail with existing edges; the evaluator records such gaps on the score
/// instead of this operator failing.
pub struct PathMutator {
    max_segments: usize,
    max_segment_length: usize,
}

// static functions
impl PathMutator {
    pub fn new(max_segments: usize, max_segment_length: usize) -> PathMutator {
        PathMutator {
            max_segments,
            max_segment_length,
        }
    }
}

impl Default for PathMutator {
    fn default() -> PathMutator {
        PathMutator::new(2, 3)
    }
}

// methods
impl PathMutator {
    /// Paths of three or fewer nodes are returned unchanged, there is no
    /// interior stretch that could be rewritten without touching an endpoint.
    pub fn mutate(&self, path: &Path, network: &Network, rng: &mut impl Rng) -> Path {
        if path.len() <= 3 {
            return path.clone();
        }

        let mut nodes = path.nodes().to_vec();
        for _ in 0..self.max_segments {
            if nodes.len() <= 3 {
                break;
            }

            // interior stretch: never index 0, at least two nodes remain
            // after it
            let start_idx = rng.gen_range(1..=nodes.len() - 3);
            let end_idx = usize::min(start_idx + self.max_segment_length, nodes.len() - 2);

            // regenerate the stretch by a random walk starting just before it
            let mut current = nodes[start_idx - 1];
            let mut rebuilt = Vec::with_capacity(end_idx - start_idx + 1);
            for _ in start_idx..=end_idx {
                let next = network.neighbors(current).map(|(to, _)| to).choose(rng);
                match next {
                    Some(node) => {
                        current = node;
                        rebuilt.push(node);
                    }
                    // dead end, keep the shorter stretch
                    None => break,
                }
            }

            nodes.splice(start_idx..=end_idx, rebuilt);
        }

        // destination invariance, whatever the walks produced
        let last_idx = nodes.len() - 1;
        nodes[last_idx] = path.last();

        Path::new_trusted(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use solution::test_utilities::init_test_data;

    #[test]
    fn short_paths_are_returned_unchanged() {
        // ARRANGE
        let d = init_test_data();
        let mutator = PathMutator::default();
        let mut rng = SmallRng::seed_from_u64(1);

        // ACT + ASSERT
        for nodes in [
            vec![d.stop_a, d.stop_b],
            vec![d.stop_a, d.stop_b, d.stop_c],
        ] {
            let path = Path::new_trusted(nodes);
            let mutated = mutator.mutate(&path, &d.network, &mut rng);
            assert_eq!(mutated, path);
        }
    }

    #[test]
    fn endpoints_are_invariant_under_mutation() {
        let d = init_test_data();
        let mutator = PathMutator::default();
        let path = Path::new_trusted(vec![d.stop_a, d.stop_b, d.stop_c, d.stop_d]);

        for seed in 0..100 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mutated = mutator.mutate(&path, &d.network, &mut rng);

            assert!(mutated.len() >= 2);
            assert_eq!(mutated.first(), d.stop_a);
            assert_eq!(mutated.last(), d.stop_d);
        }
    }

    #[test]
    fn identical_seeds_produce_identical_mutations() {
        let d = init_test_data();
        let mutator = PathMutator::default();
        let path = Path::new_trusted(vec![d.stop_a, d.stop_b, d.stop_c, d.stop_d, d.stop_e]);

        let mut first_rng = SmallRng::seed_from_u64(42);
        let mut second_rng = SmallRng::seed_from_u64(42);

        assert_eq!(
            mutator.mutate(&path, &d.network, &mut first_rng),
            mutator.mutate(&path, &d.network, &mut second_rng)
        );
    }

    #[test]
    fn rewritten_interiors_stay_on_the_adjacency() {
        // every interior node of a mutated path is either an original node
        // or was reached over an existing edge, so each one must be a known
        // network node
        let d = init_test_data();
        let mutator = PathMutator::default();
        let path = Path::new_trusted(vec![d.stop_a, d.stop_b, d.stop_c, d.stop_d]);

        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mutated = mutator.mutate(&path, &d.network, &mut rng);
            for node in mutated.iter() {
                assert!(d.network.contains_node(node), "unknown node {}", node);
            }
        }
    }
}
