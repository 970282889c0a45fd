// Producer - Populates a queue from a line source

use crate::domain::Queue;
use crate::error::Result;
use crate::port::LineSource;
use tracing::{debug, info};

/// Reads a line source to the end, pushing each line in source order
pub struct Producer;

impl Producer {
    /// Push every line of `source` onto `queue`; returns the number pushed.
    ///
    /// # Errors
    /// - AppError::Source if reading fails mid-stream. Lines read before the
    ///   failure stay queued.
    pub async fn populate(queue: &Queue<String>, source: &mut dyn LineSource) -> Result<usize> {
        let mut pushed = 0;
        while let Some(line) = source.next_line().await? {
            queue.push(line);
            pushed += 1;
        }
        debug!(pushed, "Line source exhausted");
        info!(queued = queue.len(), "Queue populated");
        Ok(pushed)
    }
}
