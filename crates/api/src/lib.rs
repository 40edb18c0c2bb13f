pub mod handlers;
pub mod health;
pub mod routes;
pub mod state;

pub use health::HealthState;
pub use routes::create_api_routes;
pub use state::AppState;
