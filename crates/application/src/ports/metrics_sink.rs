/// Label-keyed counters and histograms recorded by the transports.
///
/// Implementations must be lock-free on the hot path; every method may be
/// called from many tasks at once.
pub trait MetricsSink: Send + Sync {
    fn record_request(&self, protocol: &str, query_type: &str);

    /// Observe request duration in seconds for the resolver that answered.
    fn record_duration(&self, resolver: &str, seconds: f64);

    fn record_resolver_used(&self, resolver: &str);

    fn record_pattern_match(&self, pattern: &str);

    fn record_cname_match(&self, pattern: &str);

    fn record_error(&self, kind: &str);

    fn record_response_code(&self, rcode: &str);

    fn inc_active_connections(&self);

    fn dec_active_connections(&self);
}
