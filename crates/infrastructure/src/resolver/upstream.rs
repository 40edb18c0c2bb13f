use async_trait::async_trait;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::Duration;
use switchback_application::ports::UpstreamResolver;
use switchback_domain::DomainError;
use tracing::debug;

use super::{exchange_udp, parse_server_addr, DEFAULT_QUERY_TIMEOUT};

/// A single fixed upstream server queried over UDP.
///
/// The recursion-desired bit on the outgoing copy is forced to the
/// configured policy: recursive for the explicit/passthrough style slots,
/// non-recursive for the legacy request resolver.
pub struct DnsUpstream {
    name: String,
    server: SocketAddr,
    recursion_desired: bool,
    timeout: Duration,
}

impl DnsUpstream {
    pub fn new(name: &str, server_spec: &str, recursion_desired: bool) -> Result<Self, DomainError> {
        Ok(Self {
            name: name.to_string(),
            server: parse_server_addr(server_spec)?,
            recursion_desired,
            timeout: DEFAULT_QUERY_TIMEOUT,
        })
    }

    /// Override the per-query timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }
}

#[async_trait]
impl UpstreamResolver for DnsUpstream {
    async fn resolve(&self, request: &Message) -> Result<Message, DomainError> {
        let mut outgoing = request.clone();
        outgoing.set_recursion_desired(self.recursion_desired);

        debug!(
            resolver = %self.name,
            server = %self.server,
            recursion_desired = self.recursion_desired,
            "forwarding query"
        );

        exchange_udp(self.server, &outgoing, self.timeout).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
