pub mod dijkstra;
pub mod path;
pub mod traits;

pub use path::Path;
pub use traits::{ShortestPathAlgorithm, ShortestPathTree};
