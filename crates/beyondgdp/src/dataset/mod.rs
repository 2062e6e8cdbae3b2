//! In-memory indicator observations.

mod observation;
mod table;

pub use observation::Observation;
pub use table::Dataset;
