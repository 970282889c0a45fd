// Port Layer - Interfaces for external collaborators

pub mod classifier;
pub mod host_resolver;
pub mod line_source;
pub mod record_sink;

// Re-exports
pub use classifier::{Classifier, ClassifierSet};
pub use host_resolver::{HostResolver, ResolveError};
pub use line_source::{LineSource, SourceError};
pub use record_sink::{RecordSink, SinkError, SinkFactory};
