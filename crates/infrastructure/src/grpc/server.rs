use std::net::SocketAddr;

use switchback_domain::DomainError;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::proto::coredns::dns::dns_service_server::DnsServiceServer;
use super::proto::switchback::v1::switchback_service_server::SwitchbackServiceServer;
use super::service::GrpcHandler;

pub struct GrpcServer {
    listener: TcpListener,
    handler: GrpcHandler,
}

impl GrpcServer {
    /// Bind the gRPC listener; a bind failure is a startup error.
    pub async fn bind(listen_addr: &str, handler: GrpcHandler) -> Result<Self, DomainError> {
        let addr: SocketAddr = listen_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| DomainError::Bind {
                addr: listen_addr.to_string(),
                detail: e.to_string(),
            })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| DomainError::Bind {
                addr: addr.to_string(),
                detail: e.to_string(),
            })?;

        info!(addr = %addr, "gRPC server listening");

        Ok(Self { listener, handler })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.listener.local_addr().expect("bound listener")
    }

    /// Serve both services until `shutdown` fires; tonic drains in-flight
    /// calls before returning.
    pub async fn run(self, shutdown: CancellationToken) {
        let incoming = TcpListenerStream::new(self.listener);

        let result = tonic::transport::Server::builder()
            .add_service(SwitchbackServiceServer::new(self.handler.clone()))
            .add_service(DnsServiceServer::new(self.handler))
            .serve_with_incoming_shutdown(incoming, shutdown.cancelled_owned())
            .await;

        if let Err(e) = result {
            error!(error = %e, "gRPC server error");
        }
        info!("gRPC server stopped");
    }
}
