use serde::{Deserialize, Serialize};

use super::logging::{LogFormat, LoggingConfig};
use super::resolvers::{split_patterns, ResolverConfig};
use super::server::ListenConfig;

/// Main configuration for switchback.
///
/// Precedence, lowest to highest: built-in defaults, environment
/// variables, CLI flags.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub listen: ListenConfig,

    pub resolvers: ResolverConfig,

    pub logging: LoggingConfig,
}

impl Config {
    /// Build the effective configuration from defaults, the process
    /// environment, and CLI overrides.
    pub fn load(overrides: CliOverrides) -> Self {
        let mut config = Self::default();
        config.apply_env_from(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);
        config
    }

    /// Apply environment variables through a lookup function.
    ///
    /// An unset or empty variable keeps the current value. Booleans accept
    /// `true`/`1` and `false`/`0`; anything else keeps the current value.
    pub fn apply_env_from(&mut self, get: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| get(key).filter(|v| !v.is_empty());

        if let Some(raw) = get("REQUEST_PATTERNS") {
            self.resolvers.request_patterns = split_patterns(&raw);
        }
        if let Some(raw) = get("CNAME_PATTERNS") {
            self.resolvers.cname_patterns = split_patterns(&raw);
        }
        if let Some(addr) = get("REQUEST_RESOLVER") {
            self.resolvers.request_resolver = addr;
        }
        if let Some(addr) = get("EXPLICIT_RESOLVER") {
            self.resolvers.explicit_resolver = addr;
        }
        if let Some(addr) = get("PASSTHROUGH_RESOLVER") {
            self.resolvers.passthrough_resolver = addr;
        }
        if let Some(addr) = get("NO_CNAME_RESPONSE_RESOLVER") {
            self.resolvers.no_cname_response_resolver = addr;
        }
        if let Some(addr) = get("NO_CNAME_MATCH_RESOLVER") {
            self.resolvers.no_cname_match_resolver = addr;
        }
        if let Some(addr) = get("DNS_LISTEN_ADDR") {
            self.listen.dns_listen_addr = addr;
        }
        if let Some(addr) = get("GRPC_LISTEN_ADDR") {
            self.listen.grpc_listen_addr = addr;
        }
        if let Some(addr) = get("HTTP_LISTEN_ADDR") {
            self.listen.http_listen_addr = addr;
        }
        if let Some(port) = get("DNS_PORT").and_then(|p| p.parse().ok()) {
            self.listen.dns_port = port;
        }
        if let Some(port) = get("GRPC_PORT").and_then(|p| p.parse().ok()) {
            self.listen.grpc_port = port;
        }
        if let Some(port) = get("HTTP_PORT").and_then(|p| p.parse().ok()) {
            self.listen.http_port = port;
        }
        if let Some(debug) = get("DEBUG").as_deref().and_then(parse_bool) {
            self.logging.debug = debug;
        }
        if let Some(flag) = get("LOG_REQUESTS").as_deref().and_then(parse_bool) {
            self.logging.log_requests = flag;
        }
        if let Some(flag) = get("LOG_RESPONSES").as_deref().and_then(parse_bool) {
            self.logging.log_responses = flag;
        }
        if let Some(format) = get("LOG_FORMAT") {
            self.logging.log_format = LogFormat::parse(&format);
        }
    }

    /// Apply command-line overrides on top of the current values.
    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(raw) = overrides.request_patterns {
            self.resolvers.request_patterns = split_patterns(&raw);
        }
        if let Some(raw) = overrides.cname_patterns {
            self.resolvers.cname_patterns = split_patterns(&raw);
        }
        if let Some(addr) = overrides.request_resolver {
            self.resolvers.request_resolver = addr;
        }
        if let Some(addr) = overrides.explicit_resolver {
            self.resolvers.explicit_resolver = addr;
        }
        if let Some(addr) = overrides.passthrough_resolver {
            self.resolvers.passthrough_resolver = addr;
        }
        if let Some(addr) = overrides.no_cname_response_resolver {
            self.resolvers.no_cname_response_resolver = addr;
        }
        if let Some(addr) = overrides.no_cname_match_resolver {
            self.resolvers.no_cname_match_resolver = addr;
        }
        if let Some(addr) = overrides.dns_listen_addr {
            self.listen.dns_listen_addr = addr;
        }
        if let Some(addr) = overrides.grpc_listen_addr {
            self.listen.grpc_listen_addr = addr;
        }
        if let Some(addr) = overrides.http_listen_addr {
            self.listen.http_listen_addr = addr;
        }
        if let Some(port) = overrides.dns_port {
            self.listen.dns_port = port;
        }
        if let Some(port) = overrides.grpc_port {
            self.listen.grpc_port = port;
        }
        if let Some(port) = overrides.http_port {
            self.listen.http_port = port;
        }
        if let Some(debug) = overrides.debug {
            self.logging.debug = debug;
        }
        if let Some(flag) = overrides.log_requests {
            self.logging.log_requests = flag;
        }
        if let Some(flag) = overrides.log_responses {
            self.logging.log_responses = flag;
        }
        if let Some(format) = overrides.log_format {
            self.logging.log_format = LogFormat::parse(&format);
        }
    }
}

/// Command-line overrides; `None` means the flag was not given.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub request_patterns: Option<String>,
    pub cname_patterns: Option<String>,
    pub request_resolver: Option<String>,
    pub explicit_resolver: Option<String>,
    pub passthrough_resolver: Option<String>,
    pub no_cname_response_resolver: Option<String>,
    pub no_cname_match_resolver: Option<String>,
    pub dns_listen_addr: Option<String>,
    pub grpc_listen_addr: Option<String>,
    pub http_listen_addr: Option<String>,
    pub dns_port: Option<u16>,
    pub grpc_port: Option<u16>,
    pub http_port: Option<u16>,
    pub debug: Option<bool>,
    pub log_requests: Option<bool>,
    pub log_responses: Option<bool>,
    pub log_format: Option<String>,
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
