// Domain Layer - Queue and classification model

pub mod category;
pub mod queue;

// Re-exports
pub use category::{Category, ClassificationRecord};
pub use queue::Queue;
