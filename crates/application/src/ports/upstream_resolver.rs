use async_trait::async_trait;
use hickory_proto::op::Message;
use switchback_domain::DomainError;

/// An upstream DNS endpoint the router can delegate to.
///
/// Implementations clone the request before mutating it (callers may reuse
/// the message) and return the upstream's reply verbatim — answer-section
/// interpretation is the router's job, not the client's.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    async fn resolve(&self, request: &Message) -> Result<Message, DomainError>;

    /// Display name used in logs and metric labels.
    fn name(&self) -> &str;
}
