use std::sync::Arc;

use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use switchback_domain::DomainError;
use tracing::debug;

use crate::ports::{PatternMatcher, UpstreamResolver};

/// Resolver slots and matchers for the routing decision.
///
/// Any slot may be absent. The legacy `system` resolver back-fills the
/// `passthrough`, `no_cname_response` and `no_cname_match` slots that were
/// left empty, preserving the old single-resolver deployment shape.
#[derive(Default)]
pub struct RouterConfig {
    pub request_matcher: Option<Arc<dyn PatternMatcher>>,
    pub cname_matcher: Option<Arc<dyn PatternMatcher>>,
    pub explicit: Option<Arc<dyn UpstreamResolver>>,
    pub passthrough: Option<Arc<dyn UpstreamResolver>>,
    pub no_cname_response: Option<Arc<dyn UpstreamResolver>>,
    pub no_cname_match: Option<Arc<dyn UpstreamResolver>>,
    pub system: Option<Arc<dyn UpstreamResolver>>,
}

/// Outcome of routing one query.
///
/// Invariant: `cname_matched` implies `request_matched`. The matched
/// pattern fields hold the configured source strings, empty when the
/// corresponding flag is false.
#[derive(Debug, Clone)]
pub struct RouteResult {
    pub response: Message,
    pub resolver_used: String,
    pub request_matched: bool,
    pub cname_matched: bool,
    pub matched_pattern: String,
    pub cname_pattern: String,
}

/// The routing state machine.
///
/// Holds no mutable state; every call re-applies the decision procedure:
///
/// 1. name matches no request pattern → `passthrough`;
/// 2. name matches, `explicit` resolves, answer has a CNAME matching a
///    CNAME pattern → second `explicit` lookup is the answer;
/// 3. answer has CNAMEs but none match → `no_cname_match`;
/// 4. answer has no CNAME (or no CNAME matcher is configured) →
///    `no_cname_response`;
/// 5. name matches but `explicit` is absent → `no_cname_response`.
///
/// Upstream errors propagate; there is no cross-resolver fallback.
pub struct QueryRouter {
    request_matcher: Option<Arc<dyn PatternMatcher>>,
    cname_matcher: Option<Arc<dyn PatternMatcher>>,
    explicit: Option<Arc<dyn UpstreamResolver>>,
    passthrough: Option<Arc<dyn UpstreamResolver>>,
    no_cname_response: Option<Arc<dyn UpstreamResolver>>,
    no_cname_match: Option<Arc<dyn UpstreamResolver>>,
}

impl QueryRouter {
    pub fn new(config: RouterConfig) -> Self {
        let RouterConfig {
            request_matcher,
            cname_matcher,
            explicit,
            passthrough,
            no_cname_response,
            no_cname_match,
            system,
        } = config;

        Self {
            request_matcher,
            cname_matcher,
            explicit,
            passthrough: passthrough.or_else(|| system.clone()),
            no_cname_response: no_cname_response.or_else(|| system.clone()),
            no_cname_match: no_cname_match.or(system),
        }
    }

    pub fn request_matcher(&self) -> Option<&Arc<dyn PatternMatcher>> {
        self.request_matcher.as_ref()
    }

    pub fn cname_matcher(&self) -> Option<&Arc<dyn PatternMatcher>> {
        self.cname_matcher.as_ref()
    }

    pub async fn route(&self, request: &Message) -> Result<RouteResult, DomainError> {
        let question = request.queries().first().ok_or(DomainError::NoQuestion)?;
        let qname = normalize_name(&question.name().to_utf8());

        let matched = self
            .request_matcher
            .as_ref()
            .filter(|m| m.is_match(&qname));

        let Some(matcher) = matched else {
            // No request pattern matched.
            let Some(passthrough) = &self.passthrough else {
                return Err(DomainError::NoResolverAvailable);
            };
            let response = passthrough
                .resolve(request)
                .await
                .map_err(|e| upstream_failure("passthrough", e))?;
            return Ok(RouteResult {
                response,
                resolver_used: passthrough.name().to_string(),
                request_matched: false,
                cname_matched: false,
                matched_pattern: String::new(),
                cname_pattern: String::new(),
            });
        };

        let matched_pattern = matcher.matching_pattern(&qname).unwrap_or_default();
        debug!(name = %qname, pattern = %matched_pattern, "request pattern matched");

        if let Some(explicit) = &self.explicit {
            let response = explicit
                .resolve(request)
                .await
                .map_err(|e| upstream_failure("explicit", e))?;

            if has_cname(&response) && self.cname_matcher.is_some() {
                let cname_matcher = self.cname_matcher.as_ref().unwrap();
                for target in extract_cnames(&response) {
                    let target = normalize_name(&target);
                    if cname_matcher.is_match(&target) {
                        let cname_pattern =
                            cname_matcher.matching_pattern(&target).unwrap_or_default();
                        debug!(cname = %target, pattern = %cname_pattern, "cname pattern matched");

                        // Second, logically recursive lookup against the
                        // same explicit resolver with the original request.
                        let second = explicit
                            .resolve(request)
                            .await
                            .map_err(|e| upstream_failure("explicit", e))?;
                        return Ok(RouteResult {
                            response: second,
                            resolver_used: explicit.name().to_string(),
                            request_matched: true,
                            cname_matched: true,
                            matched_pattern,
                            cname_pattern,
                        });
                    }
                }

                // CNAMEs present but none matched a CNAME pattern.
                if let Some(no_cname_match) = &self.no_cname_match {
                    let response = no_cname_match
                        .resolve(request)
                        .await
                        .map_err(|e| upstream_failure("no-cname-match", e))?;
                    return Ok(RouteResult {
                        response,
                        resolver_used: no_cname_match.name().to_string(),
                        request_matched: true,
                        cname_matched: false,
                        matched_pattern,
                        cname_pattern: String::new(),
                    });
                }
            } else {
                // No CNAME in the answer, or no CNAME matcher configured.
                if let Some(no_cname_response) = &self.no_cname_response {
                    let response = no_cname_response
                        .resolve(request)
                        .await
                        .map_err(|e| upstream_failure("no-cname-response", e))?;
                    return Ok(RouteResult {
                        response,
                        resolver_used: no_cname_response.name().to_string(),
                        request_matched: true,
                        cname_matched: false,
                        matched_pattern,
                        cname_pattern: String::new(),
                    });
                }
            }
        }

        // Pattern matched but no explicit resolver (or the slot that would
        // have answered is empty): fall back to no-cname-response.
        if let Some(no_cname_response) = &self.no_cname_response {
            let response = no_cname_response
                .resolve(request)
                .await
                .map_err(|e| upstream_failure("no-cname-response", e))?;
            return Ok(RouteResult {
                response,
                resolver_used: no_cname_response.name().to_string(),
                request_matched: true,
                cname_matched: false,
                matched_pattern,
                cname_pattern: String::new(),
            });
        }

        Err(DomainError::NoResolverAvailable)
    }
}

fn upstream_failure(which: &'static str, source: DomainError) -> DomainError {
    DomainError::Upstream {
        which,
        source: Box::new(source),
    }
}

/// Lowercase and strip the trailing dot for pattern matching.
fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// CNAME targets from the answer section, in answer order.
pub fn extract_cnames(response: &Message) -> Vec<String> {
    response
        .answers()
        .iter()
        .filter_map(|record| match record.data() {
            RData::CNAME(target) => Some(target.0.to_utf8()),
            _ => None,
        })
        .collect()
}

pub fn has_cname(response: &Message) -> bool {
    response
        .answers()
        .iter()
        .any(|record| matches!(record.data(), RData::CNAME(_)))
}
