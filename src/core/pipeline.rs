use crate::core::permutations::Permutations;
use crate::core::{Candidate, CombineResult, ConfigProvider, Pipeline, Sink};
use crate::domain::model::{OutputFormat, SearchStrategy};
use crate::utils::error::Result;
use std::collections::BTreeSet;

pub struct CombinerPipeline<S: Sink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: Sink, C: ConfigProvider> CombinerPipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }

    fn exhaustive_candidates(&self) -> Vec<Candidate> {
        let n = self.config.fragments().len();
        let mut candidates = Vec::new();

        // 超過片段數的長度不會有排列
        for length in self.config.min_length()..=self.config.max_length().min(n) {
            let before = candidates.len();
            candidates.extend(Permutations::new(n, length).map(Candidate::new));
            tracing::debug!(
                "Generated {} permutations of length {}",
                candidates.len() - before,
                length
            );
        }

        candidates
    }

    fn pruned_candidates(&self) -> Vec<Candidate> {
        let mut search = PrunedSearch {
            fragments: self.config.fragments(),
            anchor: self.config.anchor(),
            min_length: self.config.min_length(),
            max_length: self.config.max_length(),
            target_length: self.config.target_length(),
            used: vec![false; self.config.fragments().len()],
            path: Vec::new(),
            out: Vec::new(),
        };
        search.descend(0, None);
        tracing::debug!("Pruned search kept {} candidates", search.out.len());
        search.out
    }
}

/// Depth-first walk over fragment positions. A branch is dropped once its
/// concatenation is longer than the target or starts with something other
/// than the anchor; neither condition can be undone by appending fragments.
struct PrunedSearch<'a> {
    fragments: &'a [String],
    anchor: char,
    min_length: usize,
    max_length: usize,
    target_length: usize,
    used: Vec<bool>,
    path: Vec<usize>,
    out: Vec<Candidate>,
}

impl PrunedSearch<'_> {
    fn descend(&mut self, chars_so_far: usize, first_char: Option<char>) {
        if chars_so_far > self.target_length {
            return;
        }
        if first_char.is_some_and(|c| c != self.anchor) {
            return;
        }

        let depth = self.path.len();
        if depth >= self.min_length && depth <= self.max_length {
            self.out.push(Candidate::new(self.path.clone()));
        }
        if depth >= self.max_length {
            return;
        }

        let fragments = self.fragments;
        for (i, fragment) in fragments.iter().enumerate() {
            if self.used[i] {
                continue;
            }
            self.used[i] = true;
            self.path.push(i);
            self.descend(
                chars_so_far + fragment.chars().count(),
                first_char.or_else(|| fragment.chars().next()),
            );
            self.path.pop();
            self.used[i] = false;
        }
    }
}

impl<S: Sink, C: ConfigProvider> Pipeline for CombinerPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Candidate>> {
        tracing::debug!(
            "Enumerating {} fragments, lengths {}..={}, strategy {}",
            self.config.fragments().len(),
            self.config.min_length(),
            self.config.max_length(),
            self.config.strategy()
        );

        let candidates = match self.config.strategy() {
            SearchStrategy::Exhaustive => self.exhaustive_candidates(),
            SearchStrategy::Pruned => self.pruned_candidates(),
        };
        Ok(candidates)
    }

    fn transform(&self, candidates: Vec<Candidate>) -> Result<CombineResult> {
        let fragments = self.config.fragments();
        let anchor = self.config.anchor();
        let target_length = self.config.target_length();

        let mut words = BTreeSet::new();
        let mut accepted = 0;
        let mut duplicates = 0;

        for candidate in &candidates {
            let combined = candidate.concatenate(fragments);

            // 長度與開頭字元都以大寫前的字串判斷
            if combined.chars().count() != target_length
                || combined.chars().next() != Some(anchor)
            {
                continue;
            }

            accepted += 1;
            if !words.insert(combined.to_uppercase()) {
                duplicates += 1;
            }
        }

        Ok(CombineResult {
            words: words.into_iter().collect(),
            candidates_examined: candidates.len(),
            candidates_accepted: accepted,
            duplicates_collapsed: duplicates,
        })
    }

    fn load(&mut self, result: &CombineResult) -> Result<usize> {
        let rendered = render(self.config.output_format(), &result.words)?;
        self.sink.write_output(&rendered)?;
        Ok(result.words.len())
    }
}

/// Renders sorted words in the requested format.
pub fn render(format: OutputFormat, words: &[String]) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Plain => {
            let mut out = String::new();
            for word in words {
                out.push_str(word);
                out.push('\n');
            }
            Ok(out.into_bytes())
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_vec(words)?;
            out.push(b'\n');
            Ok(out)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["word"])?;
            for word in words {
                writer.write_record([word])?;
            }
            let out = writer.into_inner().map_err(|e| e.into_error())?;
            Ok(out)
        }
    }
}

/// Runs extract and transform without writing anything.
pub fn combine<C: ConfigProvider>(config: C) -> Result<CombineResult> {
    let pipeline = CombinerPipeline::new(std::io::sink(), config);
    let candidates = pipeline.extract()?;
    pipeline.transform(candidates)
}

/// Fragments whose first character is the anchor.
pub fn starting_fragments<C: ConfigProvider + ?Sized>(config: &C) -> Vec<&str> {
    config
        .fragments()
        .iter()
        .filter(|f| f.chars().next() == Some(config.anchor()))
        .map(String::as_str)
        .collect()
}
