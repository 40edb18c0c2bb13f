pub mod proto;
mod server;
mod service;

pub use server::GrpcServer;
pub use service::GrpcHandler;
