use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use std::time::Instant;

type CheckFn = Box<dyn Fn() -> Result<(), String> + Send + Sync>;

/// Liveness/readiness flags plus named health checks.
///
/// The process starts healthy but not ready; the CLI flips readiness on
/// once every listener is up, and off again during shutdown.
pub struct HealthState {
    healthy: AtomicBool,
    ready: AtomicBool,
    start_time: Instant,
    checks: RwLock<Vec<(String, CheckFn)>>,
}

impl HealthState {
    pub fn new() -> Self {
        Self {
            healthy: AtomicBool::new(true),
            ready: AtomicBool::new(false),
            start_time: Instant::now(),
            checks: RwLock::new(Vec::new()),
        }
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }

    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    pub fn add_check(
        &self,
        name: &str,
        check: impl Fn() -> Result<(), String> + Send + Sync + 'static,
    ) {
        self.checks
            .write()
            .unwrap()
            .push((name.to_string(), Box::new(check)));
    }

    /// Run every registered check; `Ok` results render as `"ok"`.
    pub fn run_checks(&self) -> BTreeMap<String, String> {
        self.checks
            .read()
            .unwrap()
            .iter()
            .map(|(name, check)| {
                let status = match check() {
                    Ok(()) => "ok".to_string(),
                    Err(e) => e,
                };
                (name.clone(), status)
            })
            .collect()
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}
