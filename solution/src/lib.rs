pub mod individual;
pub mod json_serialisation;
pub mod path;
pub mod population;
pub mod score;
pub mod segment;
pub mod test_utilities;

pub use individual::Individual;
pub use path::Path;
pub use population::{Population, Representatives};
pub use score::PathScore;
pub use segment::Segment;
