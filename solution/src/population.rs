use crate::individual::Individual;

/// Index-addressed collection of individuals. The solver mutates slots, not
/// paths: an individual is replaced wholesale when a better child is found
/// for its subproblem.
pub struct Population {
    individuals: Vec<Individual>,
}

/// The journeys the caller typically presents: minimal time, minimal
/// emissions and minimal time + emissions sum.
pub struct Representatives {
    pub fastest: Individual,
    pub cleanest: Individual,
    pub balanced: Individual,
}

// static functions
impl Population {
    pub fn new(individuals: Vec<Individual>) -> Population {
        Population { individuals }
    }
}

// methods
impl Population {
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }

    pub fn replace(&mut self, index: usize, individual: Individual) {
        self.individuals[index] = individual;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> + '_ {
        self.individuals.iter()
    }

    /// None iff the population is empty. Ties break toward the lower index so
    /// repeated extraction is deterministic.
    pub fn representatives(&self) -> Option<Representatives> {
        let fastest = self.min_by_key(|individual| individual.score().time())?;
        let cleanest = self.min_by_key(|individual| individual.score().co2())?;
        let balanced = self.min_by_key(|individual| individual.score().objective_sum())?;
        Some(Representatives {
            fastest: fastest.clone(),
            cleanest: cleanest.clone(),
            balanced: balanced.clone(),
        })
    }

    fn min_by_key(&self, key: impl Fn(&Individual) -> f64) -> Option<&Individual> {
        let mut best: Option<(&Individual, f64)> = None;
        for individual in &self.individuals {
            let value = key(individual);
            match best {
                Some((_, best_value)) if value >= best_value => {}
                _ => best = Some((individual, value)),
            }
        }
        best.map(|(individual, _)| individual)
    }
}
