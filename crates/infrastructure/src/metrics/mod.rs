//! Label-keyed counters and histograms for the request path, plus the
//! Prometheus text rendering served by the HTTP surface.
//!
//! Counters live in `DashMap`s keyed by label value; the histogram buckets
//! are atomics so the hot path never takes a write lock after the first
//! observation for a given resolver.

use std::fmt::Write as _;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use dashmap::DashMap;
use switchback_application::ports::MetricsSink;

const NAMESPACE: &str = "switchback";

/// Prometheus default buckets, in seconds.
const DURATION_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

#[derive(Default)]
pub struct Metrics {
    requests_total: DashMap<(String, String), u64>,
    resolver_used_total: DashMap<String, u64>,
    pattern_matches_total: DashMap<String, u64>,
    cname_matches_total: DashMap<String, u64>,
    errors_total: DashMap<String, u64>,
    response_codes_total: DashMap<String, u64>,
    request_duration: DashMap<String, DurationHistogram>,
    active_connections: AtomicI64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_connections(&self) -> i64 {
        self.active_connections.load(Ordering::Relaxed)
    }

    /// Render every family in the Prometheus text exposition format.
    pub fn render_prometheus(&self) -> String {
        let mut out = String::with_capacity(4096);

        render_counter_family(
            &mut out,
            "requests_total",
            "Total number of DNS requests received",
            self.requests_total.iter().map(|entry| {
                let (protocol, query_type) = entry.key();
                (
                    format!(
                        "protocol=\"{}\",type=\"{}\"",
                        escape_label(protocol),
                        escape_label(query_type)
                    ),
                    *entry.value(),
                )
            }),
        );

        render_counter_family(
            &mut out,
            "resolver_used_total",
            "Total number of times each resolver was used",
            labeled(&self.resolver_used_total, "resolver"),
        );

        render_counter_family(
            &mut out,
            "pattern_matches_total",
            "Total number of request pattern matches",
            labeled(&self.pattern_matches_total, "pattern"),
        );

        render_counter_family(
            &mut out,
            "cname_matches_total",
            "Total number of CNAME pattern matches",
            labeled(&self.cname_matches_total, "pattern"),
        );

        render_counter_family(
            &mut out,
            "errors_total",
            "Total number of errors",
            labeled(&self.errors_total, "type"),
        );

        render_counter_family(
            &mut out,
            "dns_response_codes_total",
            "Total number of DNS responses by response code",
            labeled(&self.response_codes_total, "rcode"),
        );

        self.render_duration_family(&mut out);

        let _ = writeln!(
            out,
            "# HELP {NAMESPACE}_active_connections Number of active connections"
        );
        let _ = writeln!(out, "# TYPE {NAMESPACE}_active_connections gauge");
        let _ = writeln!(
            out,
            "{NAMESPACE}_active_connections {}",
            self.active_connections.load(Ordering::Relaxed)
        );

        out
    }

    fn render_duration_family(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "# HELP {NAMESPACE}_request_duration_seconds Duration of DNS request processing"
        );
        let _ = writeln!(out, "# TYPE {NAMESPACE}_request_duration_seconds histogram");

        for entry in self.request_duration.iter() {
            let resolver = escape_label(entry.key());
            let histogram = entry.value();

            for (i, bound) in DURATION_BUCKETS.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{NAMESPACE}_request_duration_seconds_bucket{{resolver=\"{resolver}\",le=\"{bound}\"}} {}",
                    histogram.buckets[i].load(Ordering::Relaxed)
                );
            }
            let count = histogram.count.load(Ordering::Relaxed);
            let _ = writeln!(
                out,
                "{NAMESPACE}_request_duration_seconds_bucket{{resolver=\"{resolver}\",le=\"+Inf\"}} {count}"
            );
            let _ = writeln!(
                out,
                "{NAMESPACE}_request_duration_seconds_sum{{resolver=\"{resolver}\"}} {}",
                histogram.sum_micros.load(Ordering::Relaxed) as f64 / 1e6
            );
            let _ = writeln!(
                out,
                "{NAMESPACE}_request_duration_seconds_count{{resolver=\"{resolver}\"}} {count}"
            );
        }
    }
}

impl MetricsSink for Metrics {
    fn record_request(&self, protocol: &str, query_type: &str) {
        *self
            .requests_total
            .entry((protocol.to_string(), query_type.to_string()))
            .or_insert(0) += 1;
    }

    fn record_duration(&self, resolver: &str, seconds: f64) {
        self.request_duration
            .entry(resolver.to_string())
            .or_default()
            .observe(seconds);
    }

    fn record_resolver_used(&self, resolver: &str) {
        *self
            .resolver_used_total
            .entry(resolver.to_string())
            .or_insert(0) += 1;
    }

    fn record_pattern_match(&self, pattern: &str) {
        *self
            .pattern_matches_total
            .entry(pattern.to_string())
            .or_insert(0) += 1;
    }

    fn record_cname_match(&self, pattern: &str) {
        *self
            .cname_matches_total
            .entry(pattern.to_string())
            .or_insert(0) += 1;
    }

    fn record_error(&self, kind: &str) {
        *self.errors_total.entry(kind.to_string()).or_insert(0) += 1;
    }

    fn record_response_code(&self, rcode: &str) {
        *self
            .response_codes_total
            .entry(rcode.to_string())
            .or_insert(0) += 1;
    }

    fn inc_active_connections(&self) {
        self.active_connections.fetch_add(1, Ordering::Relaxed);
    }

    fn dec_active_connections(&self) {
        self.active_connections.fetch_sub(1, Ordering::Relaxed);
    }
}

#[derive(Default)]
struct DurationHistogram {
    /// Cumulative bucket counts aligned with `DURATION_BUCKETS`.
    buckets: [AtomicU64; 11],
    count: AtomicU64,
    sum_micros: AtomicU64,
}

impl DurationHistogram {
    fn observe(&self, seconds: f64) {
        for (i, bound) in DURATION_BUCKETS.iter().enumerate() {
            if seconds <= *bound {
                self.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum_micros
            .fetch_add((seconds * 1e6) as u64, Ordering::Relaxed);
    }
}

fn labeled<'a>(
    map: &'a DashMap<String, u64>,
    label: &'a str,
) -> impl Iterator<Item = (String, u64)> + 'a {
    map.iter().map(move |entry| {
        (
            format!("{label}=\"{}\"", escape_label(entry.key())),
            *entry.value(),
        )
    })
}

fn render_counter_family(
    out: &mut String,
    name: &str,
    help: &str,
    samples: impl Iterator<Item = (String, u64)>,
) {
    let _ = writeln!(out, "# HELP {NAMESPACE}_{name} {help}");
    let _ = writeln!(out, "# TYPE {NAMESPACE}_{name} counter");
    for (labels, value) in samples {
        let _ = writeln!(out, "{NAMESPACE}_{name}{{{labels}}} {value}");
    }
}

/// Escape a label value per the exposition format: backslash, quote and
/// newline must be escaped. Regex patterns land here, so this matters.
fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
