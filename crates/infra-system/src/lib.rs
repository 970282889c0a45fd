// Linesift Infrastructure - System Adapters
// Implements: Classifier, LineSource, SinkFactory, HostResolver

pub mod dns_resolver;
pub mod file_sink;
pub mod file_source;
pub mod pattern_classifier;

pub use dns_resolver::SystemDnsResolver;
pub use file_sink::FileSinkFactory;
pub use file_source::FileLineSource;
pub use pattern_classifier::{standard_classifiers, RegexClassifier};
