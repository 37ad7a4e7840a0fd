use crate::domain::model::{Candidate, CombineResult, OutputFormat, SearchStrategy};
use crate::utils::error::Result;
use std::io::Write;

pub trait ConfigProvider {
    fn fragments(&self) -> &[String];
    fn anchor(&self) -> char;
    fn min_length(&self) -> usize;
    fn max_length(&self) -> usize;
    fn target_length(&self) -> usize;
    fn strategy(&self) -> SearchStrategy;
    fn output_format(&self) -> OutputFormat;
}

/// Destination for rendered results.
pub trait Sink {
    fn write_output(&mut self, data: &[u8]) -> Result<()>;
}

impl<W: Write> Sink for W {
    fn write_output(&mut self, data: &[u8]) -> Result<()> {
        self.write_all(data)?;
        self.flush()?;
        Ok(())
    }
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Candidate>>;
    fn transform(&self, candidates: Vec<Candidate>) -> Result<CombineResult>;
    fn load(&mut self, result: &CombineResult) -> Result<usize>;
}
