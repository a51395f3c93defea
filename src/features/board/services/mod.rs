pub mod board_operations;
pub mod dom_metrics;

pub use board_operations::*;
pub use dom_metrics::*;
