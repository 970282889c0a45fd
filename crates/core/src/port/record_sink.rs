// Record Sink Port
// One sink per category, opened fresh for each drain

use crate::domain::Category;
use async_trait::async_trait;
use thiserror::Error;

/// Sink errors
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Cannot open sink {target}: {reason}")]
    Open { target: String, reason: String },

    #[error("Write to {target} failed: {reason}")]
    Write { target: String, reason: String },

    #[error("Close of {target} failed: {reason}")]
    Close { target: String, reason: String },
}

/// Destination for the records of one category
#[async_trait]
pub trait RecordSink: Send {
    /// Append one line; the sink adds the newline terminator
    async fn write_line(&mut self, line: &str) -> Result<(), SinkError>;

    /// Flush and release the sink. Called exactly once.
    async fn close(&mut self) -> Result<(), SinkError>;
}

/// Opens the sink for a category (truncating any previous contents)
#[async_trait]
pub trait SinkFactory: Send + Sync {
    async fn open(&self, category: Category) -> Result<Box<dyn RecordSink>, SinkError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorded {
        lines: HashMap<Category, Vec<String>>,
        opened: Vec<Category>,
        closed: Vec<Category>,
    }

    /// In-memory sinks that record every line, open and close
    #[derive(Clone, Default)]
    pub struct MemorySinkFactory {
        recorded: Arc<Mutex<Recorded>>,
        failing_open: HashSet<Category>,
        failing_write: HashSet<Category>,
    }
    impl MemorySinkFactory {
        pub fn new() -> Self {
            Self::default()
        }
        /// Opening this category's sink fails
        pub fn fail_open(mut self, category: Category) -> Self {
            self.failing_open.insert(category);
            self
        }
        /// Every write to this category's sink fails
        pub fn fail_write(mut self, category: Category) -> Self {
            self.failing_write.insert(category);
            self
        }
        pub fn lines(&self, category: Category) -> Vec<String> {
            self.recorded
                .lock()
                .unwrap()
                .lines
                .get(&category)
                .cloned()
                .unwrap_or_default()
        }
        pub fn opened(&self) -> Vec<Category> {
            self.recorded.lock().unwrap().opened.clone()
        }
        pub fn closed(&self) -> Vec<Category> {
            self.recorded.lock().unwrap().closed.clone()
        }
    }
    #[async_trait]
    impl SinkFactory for MemorySinkFactory {
        async fn open(&self, category: Category) -> Result<Box<dyn RecordSink>, SinkError> {
            if self.failing_open.contains(&category) {
                return Err(SinkError::Open {
                    target: category.file_name().to_string(),
                    reason: "mock open failure".to_string(),
                });
            }
            let mut recorded = self.recorded.lock().unwrap();
            recorded.opened.push(category);
            recorded.lines.insert(category, Vec::new());
            Ok(Box::new(MemorySink {
                category,
                recorded: Arc::clone(&self.recorded),
                fail_write: self.failing_write.contains(&category),
            }))
        }
    }

    struct MemorySink {
        category: Category,
        recorded: Arc<Mutex<Recorded>>,
        fail_write: bool,
    }
    #[async_trait]
    impl RecordSink for MemorySink {
        async fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
            if self.fail_write {
                return Err(SinkError::Write {
                    target: self.category.file_name().to_string(),
                    reason: "mock write failure".to_string(),
                });
            }
            self.recorded
                .lock()
                .unwrap()
                .lines
                .entry(self.category)
                .or_default()
                .push(line.to_string());
            Ok(())
        }
        async fn close(&mut self) -> Result<(), SinkError> {
            self.recorded.lock().unwrap().closed.push(self.category);
            Ok(())
        }
    }
}
