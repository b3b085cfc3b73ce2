pub mod measurement;
pub mod runner;

pub use measurement::*;
pub use runner::*;
