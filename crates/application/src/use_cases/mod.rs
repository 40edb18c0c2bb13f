mod route_query;

pub use route_query::{extract_cnames, has_cname, QueryRouter, RouteResult, RouterConfig};
