/// Labeled tabular dataset
pub mod dataset;
/// Single labeled record and the value traits it is generic over
pub mod record;

pub use dataset::Dataset;
pub use record::{ClassLabel, Number, Record};
