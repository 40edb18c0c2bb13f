use serde::{Deserialize, Serialize};

/// Pattern lists and upstream resolver addresses.
///
/// Resolver fields hold `host[:port]` strings; an empty string means the
/// slot is not configured. The legacy `request_resolver` fills any of the
/// `passthrough` / `no_cname_response` / `no_cname_match` slots left empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Regex patterns matched against incoming query names.
    pub request_patterns: Vec<String>,

    /// Regex patterns matched against CNAME targets in upstream answers.
    pub cname_patterns: Vec<String>,

    /// Legacy single resolver for non-recursive lookups.
    pub request_resolver: String,

    /// Resolver for queries whose name matched a request pattern.
    pub explicit_resolver: String,

    /// Resolver for queries that matched no request pattern.
    pub passthrough_resolver: String,

    /// Resolver for matched queries whose answer carried no CNAME.
    pub no_cname_response_resolver: String,

    /// Resolver for matched queries whose CNAMEs matched no CNAME pattern.
    pub no_cname_match_resolver: String,
}

/// Split a newline-delimited pattern list, trimming whitespace and
/// discarding blank lines. Order is preserved.
pub fn split_patterns(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
