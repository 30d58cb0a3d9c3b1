mod metrics;
mod prediction;

pub use metrics::*;
pub use prediction::*;
