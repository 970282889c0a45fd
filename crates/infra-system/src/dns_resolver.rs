// System DNS resolver
// reason: tokio::net::lookup_host runs getaddrinfo off the async workers
use async_trait::async_trait;
use std::net::{IpAddr, Ipv4Addr};
use tokio::net::lookup_host;
use tracing::debug;

use linesift_core::port::{HostResolver, ResolveError};

/// Resolves names through the operating system resolver, keeping the first
/// IPv4 address
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDnsResolver;

impl SystemDnsResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemDnsResolver {
    async fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, ResolveError> {
        let addrs = lookup_host((host, 0))
            .await
            .map_err(|e| ResolveError::Lookup {
                host: host.to_string(),
                reason: e.to_string(),
            })?;

        let address = addrs
            .filter_map(|addr| match addr.ip() {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .next()
            .ok_or_else(|| ResolveError::NoIpv4Address(host.to_string()))?;

        debug!(host = %host, address = %address, "Host resolved");
        Ok(address)
    }
}
