use std::sync::Arc;

use switchback_api::HealthState;
use switchback_application::ports::{PatternMatcher, UpstreamResolver};
use switchback_application::use_cases::{QueryRouter, RouterConfig};
use switchback_domain::{Config, DomainError};
use switchback_infrastructure::grpc::GrpcHandler;
use switchback_infrastructure::matcher::RegexMatcher;
use switchback_infrastructure::metrics::Metrics;
use switchback_infrastructure::resolver::{DnsUpstream, SystemUpstream};
use tracing::info;

/// Everything the servers share, wired from the frozen configuration.
pub struct Services {
    pub router: Arc<QueryRouter>,
    pub metrics: Arc<Metrics>,
    pub health: Arc<HealthState>,
    pub grpc_handler: GrpcHandler,
}

pub fn build(config: &Config) -> Result<Services, DomainError> {
    let metrics = Arc::new(Metrics::new());
    let health = Arc::new(HealthState::new());

    // Matchers exist even with empty pattern lists so the admin RPC can
    // populate them at runtime.
    let request_matcher: Arc<dyn PatternMatcher> =
        Arc::new(RegexMatcher::new(&config.resolvers.request_patterns)?);
    let cname_matcher: Arc<dyn PatternMatcher> =
        Arc::new(RegexMatcher::new(&config.resolvers.cname_patterns)?);

    let explicit = optional_upstream("explicit", &config.resolvers.explicit_resolver, true)?;
    let passthrough =
        optional_upstream("passthrough", &config.resolvers.passthrough_resolver, true)?;
    let no_cname_response = optional_upstream(
        "no-cname-response",
        &config.resolvers.no_cname_response_resolver,
        true,
    )?;
    let no_cname_match = optional_upstream(
        "no-cname-match",
        &config.resolvers.no_cname_match_resolver,
        true,
    )?;

    // The legacy request resolver (non-recursive) or the host's own
    // resolvers back-fill whatever dedicated slots are missing.
    let system: Arc<dyn UpstreamResolver> = if config.resolvers.request_resolver.is_empty() {
        let system = SystemUpstream::from_resolv_conf();
        info!(servers = ?system.servers(), "using system resolvers");
        Arc::new(system)
    } else {
        info!(server = %config.resolvers.request_resolver, "using legacy request resolver");
        Arc::new(DnsUpstream::new(
            "request",
            &config.resolvers.request_resolver,
            false,
        )?)
    };

    let router = Arc::new(QueryRouter::new(RouterConfig {
        request_matcher: Some(request_matcher.clone()),
        cname_matcher: Some(cname_matcher.clone()),
        explicit,
        passthrough,
        no_cname_response,
        no_cname_match,
        system: Some(system),
    }));

    let grpc_handler = GrpcHandler::new(
        router.clone(),
        metrics.clone(),
        Some(request_matcher),
        Some(cname_matcher),
        config.resolvers.request_resolver.clone(),
        config.resolvers.explicit_resolver.clone(),
    );

    Ok(Services {
        router,
        metrics,
        health,
        grpc_handler,
    })
}

fn optional_upstream(
    name: &'static str,
    spec: &str,
    recursion_desired: bool,
) -> Result<Option<Arc<dyn UpstreamResolver>>, DomainError> {
    if spec.is_empty() {
        return Ok(None);
    }
    info!(resolver = name, server = spec, "configuring upstream resolver");
    let upstream: Arc<dyn UpstreamResolver> =
        Arc::new(DnsUpstream::new(name, spec, recursion_desired)?);
    Ok(Some(upstream))
}
