//! Example problems for testing, benchmarks and demonstration

mod heat;

pub use heat::Heat1D;
