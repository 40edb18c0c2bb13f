#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use hickory_proto::op::Message;
use switchback_application::ports::UpstreamResolver;
use switchback_domain::DomainError;

use super::messages::answer_message;

/// In-memory resolver returning a canned answer, for tests that do not
/// need a real socket on the upstream side.
pub struct MockResolver {
    name: String,
    answers: Mutex<Option<Vec<hickory_proto::rr::Record>>>,
    fail: bool,
}

impl MockResolver {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            answers: Mutex::new(None),
            fail: false,
        }
    }

    pub fn with_answers(name: &str, answers: Vec<hickory_proto::rr::Record>) -> Self {
        Self {
            name: name.to_string(),
            answers: Mutex::new(Some(answers)),
            fail: false,
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            answers: Mutex::new(None),
            fail: true,
        }
    }
}

/// An upstream that answers correctly but under its own transaction ID,
/// the way a misbehaving upstream might.
pub struct IdManglingResolver {
    pub name: String,
    pub answers: Vec<hickory_proto::rr::Record>,
    pub id: u16,
}

#[async_trait]
impl UpstreamResolver for IdManglingResolver {
    async fn resolve(&self, request: &Message) -> Result<Message, DomainError> {
        let mut response = answer_message(request, self.answers.clone());
        response.set_id(self.id);
        Ok(response)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl UpstreamResolver for MockResolver {
    async fn resolve(&self, request: &Message) -> Result<Message, DomainError> {
        if self.fail {
            return Err(DomainError::UpstreamUnreachable {
                server: format!("{}:53", self.name),
                detail: "mock upstream down".to_string(),
            });
        }

        let answers = self.answers.lock().unwrap().clone().unwrap_or_default();
        Ok(answer_message(request, answers))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
