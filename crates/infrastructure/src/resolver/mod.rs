mod system;
mod upstream;

pub use system::SystemUpstream;
pub use upstream::DnsUpstream;

use hickory_proto::op::Message;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};
use switchback_domain::DomainError;

/// Default per-query timeout, further bounded by the transport's deadline.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum UDP DNS response size with EDNS(0).
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// Parse a `host[:port]` upstream spec, defaulting the port to 53.
///
/// Hostnames are resolved through the system resolver once, at startup.
pub fn parse_server_addr(spec: &str) -> Result<SocketAddr, DomainError> {
    let spec = spec.trim();
    let with_port = if spec.contains(':') {
        spec.to_string()
    } else {
        format!("{spec}:53")
    };

    if let Ok(addr) = with_port.parse::<SocketAddr>() {
        return Ok(addr);
    }

    with_port
        .to_socket_addrs()
        .map_err(|e| DomainError::InvalidAddress {
            address: spec.to_string(),
            reason: e.to_string(),
        })?
        .next()
        .ok_or_else(|| DomainError::InvalidAddress {
            address: spec.to_string(),
            reason: "no addresses resolved".to_string(),
        })
}

/// One UDP request/reply exchange against `server`.
pub(crate) async fn exchange_udp(
    server: SocketAddr,
    request: &Message,
    timeout: Duration,
) -> Result<Message, DomainError> {
    let request_bytes = request
        .to_vec()
        .map_err(|e| DomainError::InvalidDnsMessage(e.to_string()))?;

    let bind_addr: SocketAddr = if server.is_ipv4() {
        "0.0.0.0:0".parse().unwrap()
    } else {
        "[::]:0".parse().unwrap()
    };

    let socket = UdpSocket::bind(bind_addr)
        .await
        .map_err(|e| DomainError::UpstreamUnreachable {
            server: server.to_string(),
            detail: format!("failed to bind UDP socket: {e}"),
        })?;

    tokio::time::timeout(timeout, socket.send_to(&request_bytes, server))
        .await
        .map_err(|_| DomainError::QueryTimeout {
            server: server.to_string(),
        })?
        .map_err(|e| DomainError::UpstreamUnreachable {
            server: server.to_string(),
            detail: format!("failed to send query: {e}"),
        })?;

    let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
    let (len, from) = tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
        .await
        .map_err(|_| DomainError::QueryTimeout {
            server: server.to_string(),
        })?
        .map_err(|e| DomainError::UpstreamUnreachable {
            server: server.to_string(),
            detail: format!("failed to receive response: {e}"),
        })?;

    if from.ip() != server.ip() {
        warn!(expected = %server, received_from = %from, "UDP response from unexpected source");
    }

    debug!(server = %server, bytes = len, "upstream response received");

    Message::from_vec(&recv_buf[..len]).map_err(|e| DomainError::InvalidDnsMessage(e.to_string()))
}
