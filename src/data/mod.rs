pub mod plan;
pub mod samples;

pub use plan::write_plan;
pub use samples::{load_samples, EdgeTables};
