// Application Layer - Producer and drain loop

pub mod producer;
pub mod resolver;

// Re-exports
pub use producer::Producer;
pub use resolver::{
    completion_channel, CompletionSender, CompletionToken, DrainReport, Resolver, ResolverOptions,
};
