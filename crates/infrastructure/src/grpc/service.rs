use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use switchback_application::ports::{MetricsSink, PatternMatcher};
use switchback_application::use_cases::QueryRouter;
use tonic::{Request, Response, Status};
use tracing::{debug, warn};

use super::proto::coredns::dns::dns_service_server::DnsService;
use super::proto::coredns::dns::DnsPacket;
use super::proto::switchback::v1::switchback_service_server::SwitchbackService;
use super::proto::switchback::v1::{
    DnsRecord, GetConfigRequest, GetConfigResponse, GetStatsRequest, GetStatsResponse,
    ResolveRequest, ResolveResponse, UpdatePatternsRequest, UpdatePatternsResponse,
};
use crate::dns::{rcode_name, servfail_reply};

/// Implements both gRPC services against the shared router.
///
/// Holds the concrete matcher handles (not just the router) because the
/// admin operations hot-swap pattern lists through them.
#[derive(Clone)]
pub struct GrpcHandler {
    router: Arc<QueryRouter>,
    metrics: Arc<dyn MetricsSink>,
    request_matcher: Option<Arc<dyn PatternMatcher>>,
    cname_matcher: Option<Arc<dyn PatternMatcher>>,
    request_resolver: String,
    explicit_resolver: String,
    start_time: Instant,
    total_requests: Arc<AtomicU64>,
}

impl GrpcHandler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        router: Arc<QueryRouter>,
        metrics: Arc<dyn MetricsSink>,
        request_matcher: Option<Arc<dyn PatternMatcher>>,
        cname_matcher: Option<Arc<dyn PatternMatcher>>,
        request_resolver: String,
        explicit_resolver: String,
    ) -> Self {
        Self {
            router,
            metrics,
            request_matcher,
            cname_matcher,
            request_resolver,
            explicit_resolver,
            start_time: Instant::now(),
            total_requests: Arc::new(AtomicU64::new(0)),
        }
    }
}

#[tonic::async_trait]
impl SwitchbackService for GrpcHandler {
    async fn resolve(
        &self,
        request: Request<ResolveRequest>,
    ) -> Result<Response<ResolveResponse>, Status> {
        let req = request.into_inner();
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.metrics.record_request("grpc", &req.r#type);

        // Unknown type names default to A, matching the DNS path's
        // tolerance for sloppy clients.
        let query_type =
            RecordType::from_str(&req.r#type.to_uppercase()).unwrap_or(RecordType::A);

        let name = Name::from_str(&fqdn(&req.name))
            .map_err(|e| Status::invalid_argument(format!("invalid name {:?}: {e}", req.name)))?;

        let mut message = Message::new();
        message.set_id(fastrand::u16(..));
        message.set_message_type(MessageType::Query);
        message.set_op_code(OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(Query::query(name, query_type));

        let result = self.router.route(&message).await.map_err(|e| {
            self.metrics.record_error("routing");
            Status::internal(format!("resolution failed: {e}"))
        })?;

        let rcode = rcode_name(result.response.response_code()).to_string();
        let records = result.response.answers().iter().map(record_to_proto).collect();

        self.metrics.record_resolver_used(&result.resolver_used);
        if result.request_matched {
            self.metrics.record_pattern_match(&result.matched_pattern);
        }
        if result.cname_matched {
            self.metrics.record_cname_match(&result.cname_pattern);
        }
        self.metrics.record_response_code(&rcode);

        Ok(Response::new(ResolveResponse {
            records,
            resolver_used: result.resolver_used,
            request_matched: result.request_matched,
            cname_matched: result.cname_matched,
            matched_pattern: result.matched_pattern,
            cname_pattern: result.cname_pattern,
            rcode,
        }))
    }

    async fn get_config(
        &self,
        _request: Request<GetConfigRequest>,
    ) -> Result<Response<GetConfigResponse>, Status> {
        Ok(Response::new(GetConfigResponse {
            request_patterns: self
                .request_matcher
                .as_ref()
                .map(|m| m.patterns())
                .unwrap_or_default(),
            cname_patterns: self
                .cname_matcher
                .as_ref()
                .map(|m| m.patterns())
                .unwrap_or_default(),
            request_resolver: self.request_resolver.clone(),
            explicit_resolver: self.explicit_resolver.clone(),
        }))
    }

    async fn update_request_patterns(
        &self,
        request: Request<UpdatePatternsRequest>,
    ) -> Result<Response<UpdatePatternsResponse>, Status> {
        Ok(Response::new(update_patterns(
            self.request_matcher.as_deref(),
            "request matcher not configured",
            &request.into_inner().patterns,
        )))
    }

    async fn update_cname_patterns(
        &self,
        request: Request<UpdatePatternsRequest>,
    ) -> Result<Response<UpdatePatternsResponse>, Status> {
        Ok(Response::new(update_patterns(
            self.cname_matcher.as_deref(),
            "CNAME matcher not configured",
            &request.into_inner().patterns,
        )))
    }

    async fn get_stats(
        &self,
        _request: Request<GetStatsRequest>,
    ) -> Result<Response<GetStatsResponse>, Status> {
        Ok(Response::new(GetStatsResponse {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            requests_by_resolver: Default::default(),
            pattern_matches: Default::default(),
            cname_matches: Default::default(),
        }))
    }
}

#[tonic::async_trait]
impl DnsService for GrpcHandler {
    /// CoreDNS-compatible data plane: a packed DNS message in, a packed
    /// DNS message out. Everything except an undecodable payload yields a
    /// well-formed DNS reply rather than a gRPC error.
    async fn query(&self, request: Request<DnsPacket>) -> Result<Response<DnsPacket>, Status> {
        let packet = request.into_inner();

        let message = Message::from_vec(&packet.msg)
            .map_err(|e| Status::invalid_argument(format!("failed to unpack DNS message: {e}")))?;

        self.total_requests.fetch_add(1, Ordering::Relaxed);

        if let Some(question) = message.queries().first() {
            self.metrics
                .record_request("grpc-coredns", &question.query_type().to_string());
        } else {
            debug!("grpc query without question, answering SERVFAIL");
            return Ok(Response::new(packed_servfail(&message)));
        }

        match self.router.route(&message).await {
            Ok(result) => {
                let mut response = result.response;
                response.set_id(message.id());
                let packed = response.to_vec().map_err(|e| {
                    Status::internal(format!("failed to pack DNS response: {e}"))
                })?;
                Ok(Response::new(DnsPacket { msg: packed }))
            }
            Err(e) => {
                warn!(error = %e, "routing failed for grpc query");
                Ok(Response::new(packed_servfail(&message)))
            }
        }
    }
}

fn packed_servfail(request: &Message) -> DnsPacket {
    DnsPacket {
        msg: servfail_reply(request).to_vec().unwrap_or_default(),
    }
}

fn update_patterns(
    matcher: Option<&dyn PatternMatcher>,
    missing: &str,
    patterns: &[String],
) -> UpdatePatternsResponse {
    let Some(matcher) = matcher else {
        return UpdatePatternsResponse {
            success: false,
            error: missing.to_string(),
            patterns: Vec::new(),
        };
    };

    match matcher.update(patterns) {
        Ok(()) => UpdatePatternsResponse {
            success: true,
            error: String::new(),
            patterns: matcher.patterns(),
        },
        Err(e) => UpdatePatternsResponse {
            success: false,
            error: e.to_string(),
            patterns: matcher.patterns(),
        },
    }
}

/// Textual presentation of one answer record, per record type.
fn record_to_proto(record: &Record) -> DnsRecord {
    let value = match record.data() {
        RData::A(a) => a.0.to_string(),
        RData::AAAA(aaaa) => aaaa.0.to_string(),
        RData::CNAME(cname) => cname.0.to_utf8(),
        RData::MX(mx) => format!("{} {}", mx.preference(), mx.exchange()),
        RData::TXT(txt) => txt
            .txt_data()
            .iter()
            .map(|part| String::from_utf8_lossy(part).into_owned())
            .collect::<Vec<_>>()
            .join(" "),
        RData::NS(ns) => ns.0.to_utf8(),
        RData::PTR(ptr) => ptr.0.to_utf8(),
        other => other.to_string(),
    };

    DnsRecord {
        name: record.name().to_utf8(),
        r#type: record.record_type().to_string(),
        ttl: record.ttl(),
        value,
    }
}

fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
