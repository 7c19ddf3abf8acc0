//! CLI command implementations

pub mod architect;
pub mod review;
pub mod testgen;

pub use architect::ArchitectArgs;
pub use review::ReviewArgs;
pub use testgen::TestgenArgs;
