use std::net::SocketAddr;

use switchback_api::AppState;
use switchback_domain::DomainError;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// The health/metrics HTTP surface.
pub struct WebServer {
    listener: TcpListener,
    state: AppState,
}

impl WebServer {
    pub async fn bind(listen_addr: &str, state: AppState) -> Result<Self, DomainError> {
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

        info!(addr = %addr, "HTTP server listening");

        Ok(Self { listener, state })
    }

    pub async fn run(self, shutdown: CancellationToken) {
        let app = switchback_api::create_api_routes(self.state);

        let result = axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown.cancelled_owned())
            .await;

        if let Err(e) = result {
            error!(error = %e, "HTTP server error");
        }
        info!("HTTP server stopped");
    }
}
