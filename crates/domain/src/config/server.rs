use serde::{Deserialize, Serialize};

/// Listen addresses and ports for the three server surfaces.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    pub dns_listen_addr: String,

    pub dns_port: u16,

    pub grpc_listen_addr: String,

    pub grpc_port: u16,

    pub http_listen_addr: String,

    pub http_port: u16,
}

impl ListenConfig {
    pub fn dns_addr(&self) -> String {
        format!("{}:{}", self.dns_listen_addr, self.dns_port)
    }

    pub fn grpc_addr(&self) -> String {
        format!("{}:{}", self.grpc_listen_addr, self.grpc_port)
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_listen_addr, self.http_port)
    }
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            dns_listen_addr: "0.0.0.0".to_string(),
            dns_port: 5353,
            grpc_listen_addr: "0.0.0.0".to_string(),
            grpc_port: 5354,
            http_listen_addr: "0.0.0.0".to_string(),
            http_port: 8080,
        }
    }
}
