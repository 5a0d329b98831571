pub mod compile;
pub mod diff;
pub mod names;
pub mod output;
pub mod pairs;
pub mod tables;

mod error;

pub use error::BuildError;
