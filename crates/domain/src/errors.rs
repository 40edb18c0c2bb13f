use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("no question in request")]
    NoQuestion,

    #[error("no resolver available")]
    NoResolverAvailable,

    #[error("{which} resolver failed: {source}")]
    Upstream {
        which: &'static str,
        #[source]
        source: Box<DomainError>,
    },

    #[error("query to {server} timed out")]
    QueryTimeout { server: String },

    #[error("upstream {server} unreachable: {detail}")]
    UpstreamUnreachable { server: String, detail: String },

    #[error("all upstream servers failed: {last}")]
    AllServersFailed {
        #[source]
        last: Box<DomainError>,
    },

    #[error("invalid regex pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid upstream address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("failed to bind {addr}: {detail}")]
    Bind { addr: String, detail: String },

    #[error("query deadline exceeded")]
    DeadlineExceeded,

    #[error("I/O error: {0}")]
    Io(String),
}
