mod config;
mod counter;
pub mod error;

pub use config::*;
pub use counter::*;
pub use error::{CyclicCounterError, CyclicCounterResult};
