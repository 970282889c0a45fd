// Line Source Port
// Sequential text input consumed by the Producer

use async_trait::async_trait;
use thiserror::Error;

/// Line source errors
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Cannot open input {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("Read failed after {lines_read} lines: {reason}")]
    Read { lines_read: usize, reason: String },
}

/// Line Source trait
///
/// Implementations:
/// - FileLineSource: reads a text file (`\n` or `\r\n` delimited)
/// - VecLineSource: in-memory lines (tests)
#[async_trait]
pub trait LineSource: Send {
    /// Next line without its terminator, or `None` at end of input
    ///
    /// # Errors
    /// - SourceError::Read if the underlying reader fails mid-stream
    async fn next_line(&mut self) -> Result<Option<String>, SourceError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;

    /// In-memory line source, optionally failing after N lines
    pub struct VecLineSource {
        lines: VecDeque<String>,
        served: usize,
        fail_after: Option<usize>,
    }
    impl VecLineSource {
        pub fn new<I, S>(lines: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                lines: lines.into_iter().map(Into::into).collect(),
                served: 0,
                fail_after: None,
            }
        }
        pub fn failing_after(mut self, lines: usize) -> Self {
            self.fail_after = Some(lines);
            self
        }
    }
    #[async_trait]
    impl LineSource for VecLineSource {
        async fn next_line(&mut self) -> Result<Option<String>, SourceError> {
            if self.fail_after == Some(self.served) {
                return Err(SourceError::Read {
                    lines_read: self.served,
                    reason: "mock read failure".to_string(),
                });
            }
            let line = self.lines.pop_front();
            if line.is_some() {
                self.served += 1;
            }
            Ok(line)
        }
    }
}
