pub mod engine;
pub mod permutations;
pub mod pipeline;

pub use crate::domain::model::{Candidate, CombineResult, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink};
pub use crate::utils::error::Result;
