use std::time::Duration;

use clap::Parser;
use switchback_api::AppState;
use switchback_domain::{CliOverrides, Config};
use switchback_infrastructure::dns::{DnsServer, DnsServerSettings};
use switchback_infrastructure::grpc::GrpcServer;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

#[derive(Parser)]
#[command(name = "switchback")]
#[command(version)]
#[command(about = "DNS policy router - pattern-based upstream selection with CNAME inspection")]
struct Cli {
    /// Newline-delimited regex patterns for matching incoming requests
    #[arg(long, value_name = "PATTERNS")]
    request_patterns: Option<String>,

    /// Newline-delimited regex patterns for matching CNAME responses
    #[arg(long, value_name = "PATTERNS")]
    cname_patterns: Option<String>,

    /// DNS server for initial non-recursive lookups (e.g. 8.8.8.8:53)
    #[arg(long, value_name = "HOST[:PORT]")]
    request_resolver: Option<String>,

    /// DNS server for pattern-matched queries (e.g. 1.1.1.1:53)
    #[arg(long, value_name = "HOST[:PORT]")]
    explicit_resolver: Option<String>,

    /// DNS server for requests not matching any pattern
    #[arg(long, value_name = "HOST[:PORT]")]
    passthrough_resolver: Option<String>,

    /// DNS server for responses without CNAME
    #[arg(long, value_name = "HOST[:PORT]")]
    no_cname_response_resolver: Option<String>,

    /// DNS server for CNAME responses not matching any pattern
    #[arg(long, value_name = "HOST[:PORT]")]
    no_cname_match_resolver: Option<String>,

    /// Address to listen on for DNS requests
    #[arg(long, value_name = "ADDR")]
    dns_listen_addr: Option<String>,

    /// Address to listen on for gRPC requests
    #[arg(long, value_name = "ADDR")]
    grpc_listen_addr: Option<String>,

    /// Address to listen on for HTTP health/metrics requests
    #[arg(long, value_name = "ADDR")]
    http_listen_addr: Option<String>,

    /// Port for the DNS server (UDP and TCP)
    #[arg(long)]
    dns_port: Option<u16>,

    /// Port for the gRPC server
    #[arg(long)]
    grpc_port: Option<u16>,

    /// Port for the HTTP health/metrics server
    #[arg(long)]
    http_port: Option<u16>,

    /// Enable debug logging
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    debug: Option<bool>,

    /// Log all DNS requests
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    log_requests: Option<bool>,

    /// Log all DNS responses
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    log_responses: Option<bool>,

    /// Log output format: text or json
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<String>,
}

impl Cli {
    fn into_overrides(self) -> CliOverrides {
        CliOverrides {
            request_patterns: self.request_patterns,
            cname_patterns: self.cname_patterns,
            request_resolver: self.request_resolver,
            explicit_resolver: self.explicit_resolver,
            passthrough_resolver: self.passthrough_resolver,
            no_cname_response_resolver: self.no_cname_response_resolver,
            no_cname_match_resolver: self.no_cname_match_resolver,
            dns_listen_addr: self.dns_listen_addr,
            grpc_listen_addr: self.grpc_listen_addr,
            http_listen_addr: self.http_listen_addr,
            dns_port: self.dns_port,
            grpc_port: self.grpc_port,
            http_port: self.http_port,
            debug: self.debug,
            log_requests: self.log_requests,
            log_responses: self.log_responses,
            log_format: self.log_format,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.into_overrides());

    bootstrap::init_logging(&config.logging);
    info!(version = env!("CARGO_PKG_VERSION"), "starting switchback");

    let services = di::build(&config)?;
    let shutdown = CancellationToken::new();
    let mut tasks = Vec::new();

    // Bind every listener before serving so a taken port fails startup.
    let dns_server = DnsServer::bind(
        DnsServerSettings {
            listen_addr: config.listen.dns_addr(),
            log_requests: config.logging.log_requests,
            log_responses: config.logging.log_responses,
            debug: config.logging.debug,
        },
        services.router.clone(),
        services.metrics.clone(),
    )
    .await?;
    tasks.push(tokio::spawn(dns_server.run(shutdown.clone())));

    let grpc_server =
        GrpcServer::bind(&config.listen.grpc_addr(), services.grpc_handler.clone()).await?;
    tasks.push(tokio::spawn(grpc_server.run(shutdown.clone())));

    let web_server = server::WebServer::bind(
        &config.listen.http_addr(),
        AppState {
            health: services.health.clone(),
            metrics: services.metrics.clone(),
        },
    )
    .await?;
    tasks.push(tokio::spawn(web_server.run(shutdown.clone())));

    services.health.set_ready(true);
    info!(
        request_patterns = config.resolvers.request_patterns.len(),
        cname_patterns = config.resolvers.cname_patterns.len(),
        "server is ready"
    );

    shutdown_signal().await;
    info!("shutdown signal received");

    services.health.set_ready(false);
    shutdown.cancel();

    let deadline = tokio::time::Instant::now() + SHUTDOWN_GRACE;
    for task in tasks {
        if tokio::time::timeout_at(deadline, task).await.is_err() {
            warn!("graceful shutdown deadline exceeded");
            break;
        }
    }

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
