// Per-category sink set owned by one drain

use super::DrainReport;
use crate::domain::{Category, ClassificationRecord};
use crate::error::{AppError, Result};
use crate::port::{RecordSink, SinkFactory};
use std::collections::HashMap;
use tracing::{debug, error};

/// Sinks opened for a drain. A category missing from the map failed to open.
pub(super) struct SinkSet {
    sinks: HashMap<Category, Box<dyn RecordSink>>,
}

impl SinkSet {
    /// Open one sink per category.
    ///
    /// A failed open is logged and that category's records are discarded,
    /// unless `strict` is set: then the sinks already opened are closed and
    /// the open error is returned.
    pub(super) async fn open(factory: &dyn SinkFactory, strict: bool) -> Result<Self> {
        let mut set = Self {
            sinks: HashMap::new(),
        };

        for category in Category::PRIORITY {
            match factory.open(category).await {
                Ok(sink) => {
                    debug!(category = %category, "Sink opened");
                    set.sinks.insert(category, sink);
                }
                Err(e) => {
                    error!(category = %category, error = %e, "Failed to open sink");
                    if strict {
                        set.close_all().await;
                        return Err(AppError::Sink(e));
                    }
                }
            }
        }

        Ok(set)
    }

    pub(super) async fn write(&mut self, record: &ClassificationRecord, report: &mut DrainReport) {
        let category = record.category();
        let Some(sink) = self.sinks.get_mut(&category) else {
            debug!(category = %category, "Sink unavailable, record discarded");
            report.discarded += 1;
            return;
        };

        match sink.write_line(&record.to_line()).await {
            Ok(()) => report.record_written(category),
            Err(e) => {
                error!(category = %category, error = %e, "Sink write failed");
                report.write_failures += 1;
            }
        }
    }

    /// Close every opened sink exactly once
    pub(super) async fn close_all(&mut self) {
        for (category, mut sink) in self.sinks.drain() {
            if let Err(e) = sink.close().await {
                error!(category = %category, error = %e, "Failed to close sink");
            }
        }
    }
}
