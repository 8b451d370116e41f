pub mod classifier;
pub mod report;

pub use crate::domain::model::{Classification, Parity};
