use crate::shared::Result;
use std::time::Duration;

/// Registry lookups issued together
pub const DEFAULT_BATCH_SIZE: usize = 2;

/// Pause between two batches of registry lookups (milliseconds)
pub const DEFAULT_BATCH_DELAY_MS: u64 = 1500;

/// BatchSchedule splits registry lookups into fixed-size groups separated by
/// a fixed pause, which keeps the request rate under the registry's limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSchedule {
    batch_size: usize,
    delay: Duration,
}

impl BatchSchedule {
    pub fn new(batch_size: usize, delay: Duration) -> Result<Self> {
        if batch_size == 0 {
            anyhow::bail!("Batch size must be at least 1");
        }
        Ok(Self { batch_size, delay })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Groups `items` in order; the last group may be short
    pub fn batches<'a, T>(&self, items: &'a [T]) -> std::slice::Chunks<'a, T> {
        items.chunks(self.batch_size)
    }

    pub fn batch_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.batch_size)
    }
}

impl Default for BatchSchedule {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            delay: Duration::from_millis(DEFAULT_BATCH_DELAY_MS),
        }
    }
}
