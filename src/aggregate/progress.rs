//! Coarse progress reporting during aggregation

use tracing::info;

/// Logs a line roughly every tenth of the directories processed.
pub struct Progress {
    total: usize,
    step: usize,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            step: (total / 10).max(1),
        }
    }

    /// Whether the directory at zero-based position `i` triggers a report.
    pub fn is_checkpoint(&self, i: usize) -> bool {
        i % self.step == 0
    }

    pub fn tick(&self, i: usize) {
        if self.is_checkpoint(i) {
            info!("Checked {} of {} subdirectories", i + 1, self.total);
        }
    }
}
