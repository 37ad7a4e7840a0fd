use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct CombinerEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> CombinerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting fragment search");
        self.monitor.log_stats("start");

        // Extract
        let candidates = self.pipeline.extract()?;
        tracing::info!("Enumerated {} candidates", candidates.len());
        self.monitor.log_stats("enumerate");

        // Transform
        let result = self.pipeline.transform(candidates)?;
        tracing::info!(
            "Accepted {} candidates, {} unique words ({} duplicates collapsed)",
            result.candidates_accepted,
            result.words.len(),
            result.duplicates_collapsed
        );
        self.monitor.log_stats("filter");

        // Load
        let words_emitted = self.pipeline.load(&result)?;
        tracing::info!("✅ Emitted {} words", words_emitted);
        self.monitor.log_final_stats();

        Ok(RunSummary {
            candidates_examined: result.candidates_examined,
            candidates_accepted: result.candidates_accepted,
            duplicates_collapsed: result.duplicates_collapsed,
            words_emitted,
        })
    }
}
