pub mod evaluation;
pub mod moead;
pub mod mutation;
pub mod plan;
pub mod shortest_path;

pub use evaluation::{Constraints, PathEvaluator};
pub use moead::{MoeadParams, MoeadSolver, ReplacementScope};
pub use mutation::PathMutator;
pub use plan::{PlanResult, TripPlanner, TripQuery};
pub use shortest_path::shortest_path;
