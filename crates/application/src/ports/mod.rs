mod metrics_sink;
mod pattern_matcher;
mod upstream_resolver;

pub use metrics_sink::MetricsSink;
pub use pattern_matcher::PatternMatcher;
pub use upstream_resolver::UpstreamResolver;
