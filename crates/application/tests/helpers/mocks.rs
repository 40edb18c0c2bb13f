#![allow(dead_code)]

use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{rdata, Name, RData, Record, RecordType};
use regex::Regex;
use switchback_application::ports::{PatternMatcher, UpstreamResolver};
use switchback_domain::DomainError;

// ============================================================================
// Mock upstream resolver
// ============================================================================

pub struct MockResolver {
    name: String,
    response: Mutex<Option<Message>>,
    fail: AtomicBool,
    calls: AtomicUsize,
}

impl MockResolver {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            response: Mutex::new(None),
            fail: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_response(name: &str, response: Message) -> Self {
        let resolver = Self::new(name);
        *resolver.response.lock().unwrap() = Some(response);
        resolver
    }

    pub fn failing(name: &str) -> Self {
        let resolver = Self::new(name);
        resolver.fail.store(true, Ordering::SeqCst);
        resolver
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamResolver for MockResolver {
    async fn resolve(&self, request: &Message) -> Result<Message, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::UpstreamUnreachable {
                server: format!("{}:53", self.name),
                detail: "mock upstream down".to_string(),
            });
        }

        match self.response.lock().unwrap().clone() {
            Some(response) => Ok(response),
            None => Ok(empty_response(request)),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Mock pattern matcher
// ============================================================================

pub struct MockMatcher {
    compiled: Mutex<Vec<(Regex, String)>>,
}

impl MockMatcher {
    pub fn new(patterns: &[&str]) -> Self {
        let compiled = patterns
            .iter()
            .map(|p| (Regex::new(p).expect("test pattern"), p.to_string()))
            .collect();
        Self {
            compiled: Mutex::new(compiled),
        }
    }
}

impl PatternMatcher for MockMatcher {
    fn is_match(&self, name: &str) -> bool {
        self.matching_pattern(name).is_some()
    }

    fn matching_pattern(&self, name: &str) -> Option<String> {
        let name = name.trim_end_matches('.');
        self.compiled
            .lock()
            .unwrap()
            .iter()
            .find(|(regex, _)| regex.is_match(name))
            .map(|(_, source)| source.clone())
    }

    fn patterns(&self) -> Vec<String> {
        self.compiled
            .lock()
            .unwrap()
            .iter()
            .map(|(_, source)| source.clone())
            .collect()
    }

    fn update(&self, patterns: &[String]) -> Result<(), DomainError> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = Regex::new(pattern).map_err(|e| DomainError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
            compiled.push((regex, pattern.clone()));
        }
        *self.compiled.lock().unwrap() = compiled;
        Ok(())
    }
}

// ============================================================================
// Message builders
// ============================================================================

pub fn query(name: &str, record_type: RecordType) -> Message {
    query_with_id(0x1234, name, record_type)
}

pub fn query_with_id(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message.set_id(id);
    message.set_message_type(MessageType::Query);
    message.set_op_code(OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(Query::query(
        Name::from_str(&fqdn(name)).expect("test name"),
        record_type,
    ));
    message
}

pub fn response_with_answers(request: &Message, answers: Vec<Record>) -> Message {
    let mut message = Message::new();
    message.set_id(request.id());
    message.set_message_type(MessageType::Response);
    message.set_op_code(OpCode::Query);
    message.set_recursion_desired(request.recursion_desired());
    message.set_recursion_available(true);
    message.add_queries(request.queries().iter().cloned());
    for answer in answers {
        message.add_answer(answer);
    }
    message
}

pub fn empty_response(request: &Message) -> Message {
    let mut message = Message::new();
    message.set_id(request.id());
    message.set_message_type(MessageType::Response);
    message.set_op_code(OpCode::Query);
    message.set_response_code(ResponseCode::NoError);
    message.add_queries(request.queries().iter().cloned());
    message
}

pub fn a_record(name: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(
        Name::from_str(&fqdn(name)).expect("test name"),
        60,
        RData::A(rdata::A(ip)),
    )
}

pub fn cname_record(name: &str, target: &str) -> Record {
    Record::from_rdata(
        Name::from_str(&fqdn(name)).expect("test name"),
        60,
        RData::CNAME(rdata::CNAME(
            Name::from_str(&fqdn(target)).expect("test target"),
        )),
    )
}

fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
