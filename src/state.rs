use crate::advisor::PlanBackend;
use crate::models::FeedbackLog;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub log: Arc<Mutex<FeedbackLog>>,
    pub advisor: Arc<dyn PlanBackend>,
    plan_gate: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, log: FeedbackLog, advisor: Arc<dyn PlanBackend>) -> Self {
        Self {
            data_path,
            log: Arc::new(Mutex::new(log)),
            advisor,
            plan_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Admits at most one action-plan request at a time. Returns `None`
    /// while a previous request is still in flight; dropping the guard
    /// completes the request and re-opens the gate.
    pub fn try_begin_plan(&self) -> Option<OwnedMutexGuard<()>> {
        self.plan_gate.clone().try_lock_owned().ok()
    }
}
