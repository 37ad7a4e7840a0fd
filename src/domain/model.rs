use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered selection of fragment positions, no position repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub positions: Vec<usize>,
}

impl Candidate {
    pub fn new(positions: Vec<usize>) -> Self {
        Self { positions }
    }

    /// Joins the fragment texts in candidate order.
    pub fn concatenate<S: AsRef<str>>(&self, fragments: &[S]) -> String {
        self.positions
            .iter()
            .map(|&i| fragments[i].as_ref())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombineResult {
    /// Uppercase, deduplicated, ascending.
    pub words: Vec<String>,
    pub candidates_examined: usize,
    pub candidates_accepted: usize,
    pub duplicates_collapsed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub candidates_examined: usize,
    pub candidates_accepted: usize,
    pub duplicates_collapsed: usize,
    pub words_emitted: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SearchStrategy {
    /// Generate every permutation, filter afterwards.
    #[default]
    Exhaustive,
    /// Abandon branches that can no longer produce a match.
    Pruned,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Exhaustive => f.write_str("exhaustive"),
            SearchStrategy::Pruned => f.write_str("pruned"),
        }
    }
}
