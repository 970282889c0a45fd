// Host Resolver Port
// External name resolution for matched domains

use async_trait::async_trait;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("lookup {host}: {reason}")]
    Lookup { host: String, reason: String },

    #[error("lookup {0}: no IPv4 address")]
    NoIpv4Address(String),

    #[error("lookup {host}: timed out after {timeout_ms}ms")]
    Timeout { host: String, timeout_ms: u64 },
}

/// Host Resolver trait
///
/// Implementations:
/// - SystemDnsResolver: system resolver via tokio
/// - StaticResolver: fixed table (tests)
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolve a domain-shaped name to an IPv4 address
    ///
    /// # Errors
    /// - ResolveError::Lookup if the name cannot be resolved
    /// - ResolveError::NoIpv4Address if only non-IPv4 addresses exist
    async fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, ResolveError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Resolver backed by a fixed host table; unknown hosts fail
    #[derive(Clone, Default)]
    pub struct StaticResolver {
        table: HashMap<String, Ipv4Addr>,
        delay: Option<Duration>,
        calls: Arc<Mutex<Vec<String>>>,
    }
    impl StaticResolver {
        pub fn new() -> Self {
            Self::default()
        }
        pub fn with_host(mut self, host: impl Into<String>, address: Ipv4Addr) -> Self {
            self.table.insert(host.into(), address);
            self
        }
        /// Sleep before answering (for timeout testing)
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
        /// Hosts looked up so far, in call order
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }
    #[async_trait]
    impl HostResolver for StaticResolver {
        async fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, ResolveError> {
            self.calls.lock().unwrap().push(host.to_string());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.table
                .get(host)
                .copied()
                .ok_or_else(|| ResolveError::Lookup {
                    host: host.to_string(),
                    reason: "no such host".to_string(),
                })
        }
    }
}
