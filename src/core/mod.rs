pub mod drills;
pub mod engine;
pub mod printer;

pub use crate::domain::model::{Cake, CakeDefaults, CakeSpec, Film, Flight};
pub use crate::domain::ports::OutputSink;
pub use crate::utils::error::Result;
