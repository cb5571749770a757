use std::time::Duration;

/// Contains all information about a finished run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Reconstructed target.
    pub target: String,
    /// Total trials emitted.
    pub trials: usize,
    /// Alphabet scan length needed for each target position.
    pub costs: Vec<usize>,
    /// Total time taken.
    pub time: Duration,
}

impl RunSummary {
    /// Mean scan length per position, or 0 for an empty target.
    pub fn mean_cost(&self) -> f32 {
        if self.costs.is_empty() {
            return 0.;
        }
        self.costs.iter().sum::<usize>() as f32 / self.costs.len() as f32
    }

    /// Trials emitted per second.
    pub fn rate(&self) -> f32 {
        let secs = self.time.as_secs_f32();
        if secs == 0. {
            return 0.;
        }
        self.trials as f32 / secs
    }
}
