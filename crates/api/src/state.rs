use std::sync::Arc;

use switchback_infrastructure::metrics::Metrics;

use crate::health::HealthState;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<HealthState>,
    pub metrics: Arc<Metrics>,
}
