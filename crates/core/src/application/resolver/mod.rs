// Resolver - Drain, classify and route loop

pub mod completion;
pub mod constants;
mod report;
mod sinks;

use constants::*;
pub use completion::{completion_channel, CompletionSender, CompletionToken};
pub use report::DrainReport;

use crate::domain::{Category, ClassificationRecord, Queue};
use crate::error::Result;
use crate::port::{ClassifierSet, HostResolver, ResolveError, SinkFactory};
use sinks::SinkSet;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

/// Resolver tuning
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Upper bound on one domain lookup
    pub lookup_timeout: Duration,
    /// Abort before draining if any sink fails to open
    pub fail_on_sink_error: bool,
    /// Wait between polls while producers are still running
    pub idle_interval: Duration,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            fail_on_sink_error: false,
            idle_interval: IDLE_SLEEP_DURATION,
        }
    }
}

/// Drains a queue of lines, routing each classified line to its sink
pub struct Resolver {
    classifiers: Arc<ClassifierSet>,
    host_resolver: Arc<dyn HostResolver>,
    sink_factory: Arc<dyn SinkFactory>,
    options: ResolverOptions,
}

impl Resolver {
    pub fn new(
        classifiers: Arc<ClassifierSet>,
        host_resolver: Arc<dyn HostResolver>,
        sink_factory: Arc<dyn SinkFactory>,
        options: ResolverOptions,
    ) -> Self {
        Self {
            classifiers,
            host_resolver,
            sink_factory,
            options,
        }
    }

    /// Drain `queue` until a poll finds it empty.
    ///
    /// Assumes no producer is still pushing; the loop runs once per item
    /// present when draining began. Per-item failures are logged and counted,
    /// never returned.
    ///
    /// # Errors
    /// - AppError::Sink if a sink fails to open and `fail_on_sink_error` is set
    pub async fn drain(&self, queue: &Queue<String>) -> Result<DrainReport> {
        let mut sinks =
            SinkSet::open(self.sink_factory.as_ref(), self.options.fail_on_sink_error).await?;
        let mut report = DrainReport::default();

        info!(queued = queue.len(), "Draining queue");
        while let Some(item) = queue.poll() {
            report.polled += 1;
            self.route(&item, &mut sinks, &mut report).await;
        }

        sinks.close_all().await;
        info!(
            polled = report.polled,
            written = report.total_written(),
            "Drain complete"
        );
        Ok(report)
    }

    /// Drain `queue` while producers may still be pushing.
    ///
    /// Stops only when a poll finds the queue empty after `producers_done`
    /// has fired. The signal is read before polling, so an item pushed
    /// before completion is always seen.
    ///
    /// # Errors
    /// - AppError::Sink if a sink fails to open and `fail_on_sink_error` is set
    pub async fn drain_concurrent(
        &self,
        queue: &Queue<String>,
        mut producers_done: CompletionToken,
    ) -> Result<DrainReport> {
        let mut sinks =
            SinkSet::open(self.sink_factory.as_ref(), self.options.fail_on_sink_error).await?;
        let mut report = DrainReport::default();

        info!("Draining queue alongside producers");
        loop {
            let done = producers_done.is_complete();
            match queue.poll() {
                Some(item) => {
                    report.polled += 1;
                    self.route(&item, &mut sinks, &mut report).await;
                }
                None if done => break,
                None => {
                    tokio::select! {
                        _ = sleep(self.options.idle_interval) => {},
                        _ = producers_done.wait() => {
                            debug!("Producers finished");
                        }
                    }
                }
            }
        }

        sinks.close_all().await;
        info!(
            polled = report.polled,
            written = report.total_written(),
            "Drain complete"
        );
        Ok(report)
    }

    /// Classify one item and write its record, if any
    async fn route(&self, item: &str, sinks: &mut SinkSet, report: &mut DrainReport) {
        if item.is_empty() {
            report.unclassified += 1;
            return;
        }
        let Some((category, matched)) = self.classifiers.classify(item) else {
            report.unclassified += 1;
            return;
        };

        let record = match category {
            Category::Domain => match self.lookup(matched).await {
                Ok(address) => {
                    info!("{}: {}\t IP: {}", category.label(), matched, address);
                    ClassificationRecord::Domain {
                        name: matched.to_string(),
                        address,
                    }
                }
                Err(e) => {
                    warn!("{} error: {}", matched, e);
                    report.resolution_failures += 1;
                    return;
                }
            },
            Category::Email => {
                info!("{}: {}", category.label(), matched);
                ClassificationRecord::Email(matched.to_string())
            }
            Category::Phone => {
                info!("{}: {}", category.label(), matched);
                ClassificationRecord::Phone(matched.to_string())
            }
        };

        sinks.write(&record, report).await;
    }

    /// Resolve through the external service, bounded by `lookup_timeout`
    async fn lookup(&self, host: &str) -> std::result::Result<Ipv4Addr, ResolveError> {
        let lookup = self.host_resolver.resolve_ipv4(host);
        match timeout(self.options.lookup_timeout, lookup).await {
            Ok(resolved) => resolved,
            Err(_) => Err(ResolveError::Timeout {
                host: host.to_string(),
                timeout_ms: self.options.lookup_timeout.as_millis() as u64,
            }),
        }
    }
}
