mod helpers;

use std::net::Ipv4Addr;
use std::sync::Arc;

use helpers::mocks::{
    a_record, cname_record, query, response_with_answers, MockMatcher, MockResolver,
};
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::RecordType;
use switchback_application::use_cases::{extract_cnames, QueryRouter, RouterConfig};
use switchback_domain::DomainError;

const REQUEST_PATTERN: &str = r".*\.example\.com$";
const CNAME_PATTERN: &str = r"cdn\.provider\.net";

fn matchers() -> (Arc<MockMatcher>, Arc<MockMatcher>) {
    (
        Arc::new(MockMatcher::new(&[REQUEST_PATTERN])),
        Arc::new(MockMatcher::new(&[CNAME_PATTERN])),
    )
}

// ── decision procedure ─────────────────────────────────────────────────────

#[tokio::test]
async fn matching_cname_reinvokes_explicit() {
    let request = query("www.example.com", RecordType::A);
    let answer = response_with_answers(
        &request,
        vec![
            cname_record("www.example.com", "cdn.provider.net"),
            a_record("cdn.provider.net", Ipv4Addr::new(10, 20, 30, 40)),
        ],
    );

    let (request_matcher, cname_matcher) = matchers();
    let explicit = Arc::new(MockResolver::with_response("explicit", answer.clone()));
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(request_matcher),
        cname_matcher: Some(cname_matcher),
        explicit: Some(explicit.clone()),
        system: Some(Arc::new(MockResolver::new("system"))),
        ..Default::default()
    });

    let result = router.route(&request).await.unwrap();

    assert_eq!(result.resolver_used, "explicit");
    assert!(result.request_matched);
    assert!(result.cname_matched);
    assert_eq!(result.matched_pattern, REQUEST_PATTERN);
    assert_eq!(result.cname_pattern, CNAME_PATTERN);
    assert_eq!(extract_cnames(&result.response), vec!["cdn.provider.net."]);
    // One inspection lookup plus the recursive re-query, nothing more.
    assert_eq!(explicit.calls(), 2);
}

#[tokio::test]
async fn unmatched_cname_routes_to_no_cname_match() {
    let request = query("www.example.com", RecordType::A);
    let answer = response_with_answers(
        &request,
        vec![cname_record("www.example.com", "other.net")],
    );

    let (request_matcher, cname_matcher) = matchers();
    let explicit = Arc::new(MockResolver::with_response("explicit", answer));
    let no_cname_match = Arc::new(MockResolver::new("no-cname-match"));
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(request_matcher),
        cname_matcher: Some(cname_matcher),
        explicit: Some(explicit.clone()),
        no_cname_match: Some(no_cname_match.clone()),
        ..Default::default()
    });

    let result = router.route(&request).await.unwrap();

    assert_eq!(result.resolver_used, "no-cname-match");
    assert!(result.request_matched);
    assert!(!result.cname_matched);
    assert!(result.cname_pattern.is_empty());
    assert_eq!(explicit.calls(), 1);
    assert_eq!(no_cname_match.calls(), 1);
}

#[tokio::test]
async fn answer_without_cname_routes_to_no_cname_response() {
    let request = query("www.example.com", RecordType::A);
    let answer = response_with_answers(
        &request,
        vec![a_record("www.example.com", Ipv4Addr::new(1, 2, 3, 4))],
    );

    let (request_matcher, cname_matcher) = matchers();
    let no_cname_response = Arc::new(MockResolver::new("no-cname-response"));
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(request_matcher),
        cname_matcher: Some(cname_matcher),
        explicit: Some(Arc::new(MockResolver::with_response("explicit", answer))),
        no_cname_response: Some(no_cname_response.clone()),
        ..Default::default()
    });

    let result = router.route(&request).await.unwrap();

    assert_eq!(result.resolver_used, "no-cname-response");
    assert!(result.request_matched);
    assert!(!result.cname_matched);
    assert_eq!(no_cname_response.calls(), 1);
}

#[tokio::test]
async fn unmatched_request_routes_to_passthrough() {
    let request = query("random.org", RecordType::A);

    let passthrough = Arc::new(MockResolver::new("passthrough"));
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(Arc::new(MockMatcher::new(&[]))),
        explicit: Some(Arc::new(MockResolver::new("explicit"))),
        passthrough: Some(passthrough.clone()),
        ..Default::default()
    });

    let result = router.route(&request).await.unwrap();

    assert_eq!(result.resolver_used, "passthrough");
    assert!(!result.request_matched);
    assert!(!result.cname_matched);
    assert!(result.matched_pattern.is_empty());
    assert_eq!(passthrough.calls(), 1);
}

#[tokio::test]
async fn request_without_question_is_rejected() {
    let mut request = Message::new();
    request.set_id(0x4242);
    request.set_message_type(MessageType::Query);
    request.set_op_code(OpCode::Query);

    let router = QueryRouter::new(RouterConfig {
        passthrough: Some(Arc::new(MockResolver::new("passthrough"))),
        ..Default::default()
    });

    let err = router.route(&request).await.unwrap_err();
    assert!(matches!(err, DomainError::NoQuestion));
}

#[tokio::test]
async fn explicit_failure_propagates_without_fallback() {
    let request = query("www.example.com", RecordType::A);

    let (request_matcher, cname_matcher) = matchers();
    let passthrough = Arc::new(MockResolver::new("passthrough"));
    let system = Arc::new(MockResolver::new("system"));
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(request_matcher),
        cname_matcher: Some(cname_matcher),
        explicit: Some(Arc::new(MockResolver::failing("explicit"))),
        passthrough: Some(passthrough.clone()),
        system: Some(system.clone()),
        ..Default::default()
    });

    let err = router.route(&request).await.unwrap_err();

    assert!(matches!(err, DomainError::Upstream { which: "explicit", .. }));
    // No cross-resolver fallback on upstream error.
    assert_eq!(passthrough.calls(), 0);
    assert_eq!(system.calls(), 0);
}

// ── matcher and slot edge cases ────────────────────────────────────────────

#[tokio::test]
async fn missing_cname_matcher_delegates_to_no_cname_response() {
    let request = query("www.example.com", RecordType::A);
    let answer = response_with_answers(
        &request,
        vec![cname_record("www.example.com", "cdn.provider.net")],
    );

    let no_cname_response = Arc::new(MockResolver::new("no-cname-response"));
    let no_cname_match = Arc::new(MockResolver::new("no-cname-match"));
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(Arc::new(MockMatcher::new(&[REQUEST_PATTERN]))),
        cname_matcher: None,
        explicit: Some(Arc::new(MockResolver::with_response("explicit", answer))),
        no_cname_response: Some(no_cname_response.clone()),
        no_cname_match: Some(no_cname_match.clone()),
        ..Default::default()
    });

    let result = router.route(&request).await.unwrap();

    // A missing CNAME matcher is the no-cname-response branch, even though
    // the answer carried a CNAME.
    assert_eq!(result.resolver_used, "no-cname-response");
    assert_eq!(no_cname_match.calls(), 0);
    assert_eq!(no_cname_response.calls(), 1);
}

#[tokio::test]
async fn matched_without_explicit_falls_back_to_no_cname_response() {
    let request = query("www.example.com", RecordType::A);

    let no_cname_response = Arc::new(MockResolver::new("no-cname-response"));
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(Arc::new(MockMatcher::new(&[REQUEST_PATTERN]))),
        no_cname_response: Some(no_cname_response.clone()),
        ..Default::default()
    });

    let result = router.route(&request).await.unwrap();

    assert_eq!(result.resolver_used, "no-cname-response");
    assert!(result.request_matched);
    assert_eq!(no_cname_response.calls(), 1);
}

#[tokio::test]
async fn matched_with_no_usable_slot_is_an_error_not_passthrough() {
    let request = query("www.example.com", RecordType::A);

    let passthrough = Arc::new(MockResolver::new("passthrough"));
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(Arc::new(MockMatcher::new(&[REQUEST_PATTERN]))),
        passthrough: Some(passthrough.clone()),
        ..Default::default()
    });

    let err = router.route(&request).await.unwrap_err();

    assert!(matches!(err, DomainError::NoResolverAvailable));
    assert_eq!(passthrough.calls(), 0);
}

#[tokio::test]
async fn missing_no_cname_match_slot_falls_through_to_no_cname_response() {
    let request = query("www.example.com", RecordType::A);
    let answer = response_with_answers(
        &request,
        vec![cname_record("www.example.com", "other.net")],
    );

    let (request_matcher, cname_matcher) = matchers();
    let no_cname_response = Arc::new(MockResolver::new("no-cname-response"));
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(request_matcher),
        cname_matcher: Some(cname_matcher),
        explicit: Some(Arc::new(MockResolver::with_response("explicit", answer))),
        no_cname_response: Some(no_cname_response.clone()),
        ..Default::default()
    });

    let result = router.route(&request).await.unwrap();

    assert_eq!(result.resolver_used, "no-cname-response");
    assert_eq!(no_cname_response.calls(), 1);
}

#[tokio::test]
async fn no_resolver_at_all_is_an_error() {
    let request = query("random.org", RecordType::A);
    let router = QueryRouter::new(RouterConfig::default());

    let err = router.route(&request).await.unwrap_err();
    assert!(matches!(err, DomainError::NoResolverAvailable));
}

#[tokio::test]
async fn legacy_system_resolver_backfills_empty_slots() {
    let system = Arc::new(MockResolver::new("system"));

    // Passthrough path.
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(Arc::new(MockMatcher::new(&[REQUEST_PATTERN]))),
        system: Some(system.clone()),
        ..Default::default()
    });
    let result = router.route(&query("random.org", RecordType::A)).await.unwrap();
    assert_eq!(result.resolver_used, "system");

    // Matched-but-no-explicit path goes through the backfilled
    // no-cname-response slot.
    let result = router
        .route(&query("www.example.com", RecordType::A))
        .await
        .unwrap();
    assert_eq!(result.resolver_used, "system");
    assert!(result.request_matched);
}

#[tokio::test]
async fn explicit_slot_present_keeps_dedicated_slots() {
    // A dedicated slot is not displaced by the legacy resolver.
    let request = query("www.example.com", RecordType::A);
    let answer = response_with_answers(
        &request,
        vec![a_record("www.example.com", Ipv4Addr::new(1, 2, 3, 4))],
    );

    let (request_matcher, cname_matcher) = matchers();
    let dedicated = Arc::new(MockResolver::new("no-cname-response"));
    let system = Arc::new(MockResolver::new("system"));
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(request_matcher),
        cname_matcher: Some(cname_matcher),
        explicit: Some(Arc::new(MockResolver::with_response("explicit", answer))),
        no_cname_response: Some(dedicated.clone()),
        system: Some(system.clone()),
        ..Default::default()
    });

    let result = router.route(&request).await.unwrap();

    assert_eq!(result.resolver_used, "no-cname-response");
    assert_eq!(dedicated.calls(), 1);
    assert_eq!(system.calls(), 0);
}

// ── universal properties ───────────────────────────────────────────────────

#[tokio::test]
async fn routing_is_deterministic() {
    let request = query("www.example.com", RecordType::A);
    let answer = response_with_answers(
        &request,
        vec![cname_record("www.example.com", "cdn.provider.net")],
    );

    let (request_matcher, cname_matcher) = matchers();
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(request_matcher),
        cname_matcher: Some(cname_matcher),
        explicit: Some(Arc::new(MockResolver::with_response("explicit", answer))),
        system: Some(Arc::new(MockResolver::new("system"))),
        ..Default::default()
    });

    let first = router.route(&request).await.unwrap();
    let second = router.route(&request).await.unwrap();

    assert_eq!(first.resolver_used, second.resolver_used);
    assert_eq!(first.request_matched, second.request_matched);
    assert_eq!(first.cname_matched, second.cname_matched);
    assert_eq!(first.matched_pattern, second.matched_pattern);
    assert_eq!(first.cname_pattern, second.cname_pattern);
}

#[tokio::test]
async fn cname_matched_implies_request_matched() {
    // Exercise every branch that can set cname_matched and check the
    // invariant on each outcome.
    let request = query("www.example.com", RecordType::A);
    let answer = response_with_answers(
        &request,
        vec![cname_record("www.example.com", "cdn.provider.net")],
    );

    let (request_matcher, cname_matcher) = matchers();
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(request_matcher),
        cname_matcher: Some(cname_matcher),
        explicit: Some(Arc::new(MockResolver::with_response("explicit", answer))),
        system: Some(Arc::new(MockResolver::new("system"))),
        ..Default::default()
    });

    for name in ["www.example.com", "random.org"] {
        let result = router.route(&query(name, RecordType::A)).await.unwrap();
        if result.cname_matched {
            assert!(result.request_matched);
        }
    }
}

#[tokio::test]
async fn query_name_matching_is_case_insensitive_and_dot_stripped() {
    let request = query("WWW.EXAMPLE.COM.", RecordType::A);

    let no_cname_response = Arc::new(MockResolver::new("no-cname-response"));
    let router = QueryRouter::new(RouterConfig {
        request_matcher: Some(Arc::new(MockMatcher::new(&[REQUEST_PATTERN]))),
        no_cname_response: Some(no_cname_response.clone()),
        ..Default::default()
    });

    let result = router.route(&request).await.unwrap();
    assert!(result.request_matched);
    assert_eq!(result.matched_pattern, REQUEST_PATTERN);
}
