//! DNS server over UDP and TCP (RFC 1035 framing, two-byte length prefix
//! on TCP). Both transports share one handler; every inbound message runs
//! on its own task so the receive loops never block on routing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use hickory_proto::op::Message;
use switchback_application::ports::MetricsSink;
use switchback_application::use_cases::QueryRouter;
use switchback_domain::DomainError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::{rcode_name, servfail_reply};

/// Per-query routing deadline.
const REQUEST_DEADLINE: Duration = Duration::from_secs(10);

const MAX_UDP_QUERY_SIZE: usize = 4096;
const MAX_TCP_MESSAGE_SIZE: usize = 65535;

#[derive(Debug, Clone)]
pub struct DnsServerSettings {
    pub listen_addr: String,
    pub log_requests: bool,
    pub log_responses: bool,
    pub debug: bool,
}

pub struct DnsServer {
    udp: Arc<UdpSocket>,
    tcp: TcpListener,
    handler: Arc<QueryHandler>,
}

impl DnsServer {
    /// Bind UDP and TCP on the configured address. Either bind failure is
    /// a startup error.
    pub async fn bind(
        settings: DnsServerSettings,
        router: Arc<QueryRouter>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Result<Self, DomainError> {
        let listen: SocketAddr =
            settings
                .listen_addr
                .parse()
                .map_err(|e: std::net::AddrParseError| DomainError::Bind {
                    addr: settings.listen_addr.clone(),
                    detail: e.to_string(),
                })?;

        let udp = UdpSocket::bind(listen)
            .await
            .map_err(|e| DomainError::Bind {
                addr: listen.to_string(),
                detail: e.to_string(),
            })?;
        let tcp = TcpListener::bind(listen)
            .await
            .map_err(|e| DomainError::Bind {
                addr: listen.to_string(),
                detail: e.to_string(),
            })?;

        info!(addr = %listen, "DNS server listening (udp, tcp)");

        Ok(Self {
            udp: Arc::new(udp),
            tcp,
            handler: Arc::new(QueryHandler {
                router,
                metrics,
                log_requests: settings.log_requests,
                log_responses: settings.log_responses,
                debug: settings.debug,
            }),
        })
    }

    pub fn udp_addr(&self) -> SocketAddr {
        self.udp.local_addr().expect("bound socket")
    }

    pub fn tcp_addr(&self) -> SocketAddr {
        self.tcp.local_addr().expect("bound listener")
    }

    /// Serve until `shutdown` fires. In-flight handler tasks finish on
    /// their own; the caller owns the grace period.
    pub async fn run(self, shutdown: CancellationToken) {
        let mut join_set = JoinSet::new();

        join_set.spawn(run_udp(self.udp, self.handler.clone(), shutdown.clone()));
        join_set.spawn(run_tcp(self.tcp, self.handler, shutdown));

        while join_set.join_next().await.is_some() {}
        info!("DNS server stopped");
    }
}

async fn run_udp(socket: Arc<UdpSocket>, handler: Arc<QueryHandler>, shutdown: CancellationToken) {
    let mut recv_buf = [0u8; MAX_UDP_QUERY_SIZE];

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            result = socket.recv_from(&mut recv_buf) => {
                let (len, peer) = match result {
                    Ok(received) => received,
                    Err(e) => {
                        error!(error = %e, "UDP recv error");
                        continue;
                    }
                };

                let wire = recv_buf[..len].to_vec();
                let handler = handler.clone();
                let socket = socket.clone();
                tokio::spawn(async move {
                    if let Some(reply) = handler.handle(&wire, "udp", peer).await {
                        if let Err(e) = socket.send_to(&reply, peer).await {
                            error!(peer = %peer, error = %e, "failed to send UDP reply");
                            handler.metrics.record_error("write");
                        }
                    }
                });
            }
        }
    }
}

async fn run_tcp(listener: TcpListener, handler: Arc<QueryHandler>, shutdown: CancellationToken) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            result = listener.accept() => {
                let (stream, peer) = match result {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        error!(error = %e, "TCP accept error");
                        continue;
                    }
                };

                let handler = handler.clone();
                let shutdown = shutdown.clone();
                tokio::spawn(async move {
                    if let Err(e) = serve_tcp_connection(stream, peer, handler, shutdown).await {
                        debug!(peer = %peer, error = %e, "TCP connection closed");
                    }
                });
            }
        }
    }
}

/// One TCP connection may carry several length-prefixed queries in
/// sequence; serve them until the peer closes or shutdown fires.
async fn serve_tcp_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<QueryHandler>,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    loop {
        let mut len_buf = [0u8; 2];
        tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            result = stream.read_exact(&mut len_buf) => {
                if result.is_err() {
                    // Peer closed the connection.
                    return Ok(());
                }
            }
        }

        let message_len = u16::from_be_bytes(len_buf) as usize;
        if message_len == 0 || message_len > MAX_TCP_MESSAGE_SIZE {
            return Ok(());
        }

        let mut wire = vec![0u8; message_len];
        stream.read_exact(&mut wire).await?;

        if let Some(reply) = handler.handle(&wire, "tcp", peer).await {
            let reply_len = (reply.len() as u16).to_be_bytes();
            if let Err(e) = async {
                stream.write_all(&reply_len).await?;
                stream.write_all(&reply).await?;
                stream.flush().await
            }
            .await
            {
                error!(peer = %peer, error = %e, "failed to send TCP reply");
                handler.metrics.record_error("write");
                return Err(e);
            }
        }
    }
}

struct QueryHandler {
    router: Arc<QueryRouter>,
    metrics: Arc<dyn MetricsSink>,
    log_requests: bool,
    log_responses: bool,
    debug: bool,
}

/// Decrements the active-connection gauge on every exit path.
struct ActiveGuard<'a>(&'a dyn MetricsSink);

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        self.0.dec_active_connections();
    }
}

impl QueryHandler {
    /// Decode, route and encode one query; returns the reply wire bytes.
    /// Undecodable messages are dropped.
    async fn handle(&self, wire: &[u8], protocol: &'static str, peer: SocketAddr) -> Option<Vec<u8>> {
        let start = Instant::now();

        let request = match Message::from_vec(wire) {
            Ok(message) => message,
            Err(e) => {
                debug!(peer = %peer, error = %e, "dropping undecodable query");
                return None;
            }
        };

        let query_type = request
            .queries()
            .first()
            .map(|q| q.query_type().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let query_name = request
            .queries()
            .first()
            .map(|q| q.name().to_utf8())
            .unwrap_or_default();

        self.metrics.record_request(protocol, &query_type);
        self.metrics.inc_active_connections();
        let _guard = ActiveGuard(&*self.metrics);

        if self.log_requests {
            info!(protocol, r#type = %query_type, name = %query_name, peer = %peer, "dns request");
        }

        let routed = match tokio::time::timeout(REQUEST_DEADLINE, self.router.route(&request)).await
        {
            Ok(result) => result,
            Err(_) => Err(DomainError::DeadlineExceeded),
        };

        let result = match routed {
            Ok(result) => result,
            Err(e) => {
                warn!(name = %query_name, error = %e, "routing failed");
                self.metrics.record_error("routing");
                self.metrics.record_response_code("SERVFAIL");
                return encode_reply(&self.metrics, servfail_reply(&request));
            }
        };

        let elapsed = start.elapsed().as_secs_f64();
        self.metrics.record_duration(&result.resolver_used, elapsed);
        self.metrics.record_resolver_used(&result.resolver_used);
        if result.request_matched {
            self.metrics.record_pattern_match(&result.matched_pattern);
        }
        if result.cname_matched {
            self.metrics.record_cname_match(&result.cname_pattern);
        }
        let rcode = rcode_name(result.response.response_code());
        self.metrics.record_response_code(rcode);

        if self.log_responses {
            info!(
                name = %query_name,
                rcode = %rcode,
                answers = result.response.answer_count(),
                resolver = %result.resolver_used,
                duration_ms = elapsed * 1000.0,
                "dns response"
            );
        }

        if self.debug {
            if result.request_matched {
                debug!(pattern = %result.matched_pattern, request = %query_name, "request pattern matched");
            }
            if result.cname_matched {
                debug!(pattern = %result.cname_pattern, "cname pattern matched");
            }
            debug!(resolver = %result.resolver_used, "queried nameserver");
        }

        // Upstreams may answer under their own transaction ID; the reply on
        // the wire must carry the client's.
        let mut response = result.response;
        response.set_id(request.id());

        encode_reply(&self.metrics, response)
    }
}

fn encode_reply(metrics: &Arc<dyn MetricsSink>, reply: Message) -> Option<Vec<u8>> {
    match reply.to_vec() {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            error!(error = %e, "failed to encode reply");
            metrics.record_error("write");
            None
        }
    }
}
