use async_trait::async_trait;
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use switchback_application::ports::UpstreamResolver;
use switchback_domain::DomainError;
use tracing::{debug, warn};

use super::{exchange_udp, parse_server_addr, DEFAULT_QUERY_TIMEOUT};

const RESOLV_CONF: &str = "/etc/resolv.conf";

/// Last-resort servers when neither config nor resolv.conf yields any.
const FALLBACK_SERVERS: [&str; 2] = ["8.8.8.8:53", "8.8.4.4:53"];

/// The host's resolvers, tried in order.
///
/// Any reply counts as an answer — NXDOMAIN and other negative responses
/// are valid; only a transport failure moves on to the next server.
pub struct SystemUpstream {
    servers: Vec<SocketAddr>,
    timeout: Duration,
}

impl SystemUpstream {
    /// Read nameservers from `/etc/resolv.conf`, falling back to the
    /// well-known public resolvers when nothing usable is found.
    pub fn from_resolv_conf() -> Self {
        let servers = match read_resolv_conf(Path::new(RESOLV_CONF)) {
            Ok(servers) if !servers.is_empty() => servers,
            Ok(_) => {
                warn!("no nameservers in {RESOLV_CONF}, using fallback servers");
                fallback_servers()
            }
            Err(e) => {
                warn!(error = %e, "failed to read {RESOLV_CONF}, using fallback servers");
                fallback_servers()
            }
        };

        debug!(?servers, "system resolver configured");
        Self {
            servers,
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Build from an explicit server list, normalizing missing ports.
    pub fn with_servers(specs: &[String]) -> Result<Self, DomainError> {
        let servers = specs
            .iter()
            .map(|spec| parse_server_addr(spec))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            servers,
            timeout: DEFAULT_QUERY_TIMEOUT,
        })
    }

    /// Override the per-query timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }
}

#[async_trait]
impl UpstreamResolver for SystemUpstream {
    async fn resolve(&self, request: &Message) -> Result<Message, DomainError> {
        let mut outgoing = request.clone();
        outgoing.set_recursion_desired(true);

        let mut last_error: Option<DomainError> = None;
        for server in &self.servers {
            match exchange_udp(*server, &outgoing, self.timeout).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    debug!(server = %server, error = %e, "system resolver attempt failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(last) => Err(DomainError::AllServersFailed {
                last: Box::new(last),
            }),
            None => Err(DomainError::NoResolverAvailable),
        }
    }

    fn name(&self) -> &str {
        "system"
    }
}

fn fallback_servers() -> Vec<SocketAddr> {
    FALLBACK_SERVERS
        .iter()
        .map(|s| s.parse().expect("fallback address"))
        .collect()
}

fn read_resolv_conf(path: &Path) -> std::io::Result<Vec<SocketAddr>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_resolv_conf(&contents))
}

fn parse_resolv_conf(contents: &str) -> Vec<SocketAddr> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with(';'))
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("nameserver"), Some(addr)) => {
                    addr.parse().ok().map(|ip| SocketAddr::new(ip, 53))
                }
                _ => None,
            }
        })
        .collect()
}
