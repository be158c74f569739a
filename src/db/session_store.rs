use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::config::AppConfig;
use crate::services::experience_flow::{ExperienceError, ExperienceFlow};

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct StoredFlow {
    flow: ExperienceFlow,
    last_seen: Instant,
}

/// In-memory home for wizard instances. Nothing here is persisted.
///
/// Closed flows are kept for `closed_ttl` so they can be reopened, and any
/// flow untouched for `idle_ttl` is dropped.
pub struct SessionStore {
    flows: Mutex<HashMap<Uuid, StoredFlow>>,
    closed_ttl: Duration,
    idle_ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        let defaults = AppConfig::default();
        SessionStore::new(defaults.closed_flow_ttl, defaults.idle_flow_ttl)
    }
}

pub fn create_session_store(config: &AppConfig) -> Arc<SessionStore> {
    log::info!(
        "Session store ready (in-memory, closed ttl {:?}, idle ttl {:?})",
        config.closed_flow_ttl,
        config.idle_flow_ttl
    );
    Arc::new(SessionStore::new(config.closed_flow_ttl, config.idle_flow_ttl))
}

/// Periodically evicts expired flows for the life of the server.
pub fn spawn_sweeper(store: Arc<SessionStore>) {
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let evicted = store.evict_expired();
            if evicted > 0 {
                log::info!("Evicted {} expired experiences", evicted);
            }
        }
    });
}

impl SessionStore {
    pub fn new(closed_ttl: Duration, idle_ttl: Duration) -> Self {
        SessionStore {
            flows: Mutex::new(HashMap::new()),
            closed_ttl,
            idle_ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, StoredFlow>> {
        // a panic while holding the lock leaves the map intact
        self.flows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Stores a new flow, sweeping expired ones first.
    pub fn insert(&self, flow: ExperienceFlow) -> Uuid {
        let id = Uuid::new_v4();
        let mut flows = self.lock();
        Self::sweep(&mut flows, self.closed_ttl, self.idle_ttl);
        flows.insert(
            id,
            StoredFlow {
                flow,
                last_seen: Instant::now(),
            },
        );
        id
    }

    /// Runs `f` against one flow while holding the lock.
    pub fn with_flow<T, F>(&self, id: &Uuid, f: F) -> Result<T, ExperienceError>
    where
        F: FnOnce(&mut ExperienceFlow) -> Result<T, ExperienceError>,
    {
        let mut flows = self.lock();
        let stored = flows
            .get_mut(id)
            .ok_or_else(|| ExperienceError::FlowNotFound(id.to_string()))?;
        stored.last_seen = Instant::now();
        f(&mut stored.flow)
    }

    /// Close signal that tolerates flows already closed or gone.
    pub fn close(&self, id: &Uuid) -> bool {
        match self.lock().get_mut(id) {
            Some(stored) => stored.flow.close(),
            None => false,
        }
    }

    /// Closes only if the flow still holds the session from `generation`.
    /// A reopened or package-switched flow is left alone.
    pub fn close_if(&self, id: &Uuid, generation: u64) -> bool {
        match self.lock().get_mut(id) {
            Some(stored) if stored.flow.generation() == generation => stored.flow.close(),
            _ => false,
        }
    }

    /// Drops closed flows past `closed_ttl` and any flow idle past `idle_ttl`.
    pub fn evict_expired(&self) -> usize {
        let mut flows = self.lock();
        Self::sweep(&mut flows, self.closed_ttl, self.idle_ttl)
    }

    fn sweep(
        flows: &mut HashMap<Uuid, StoredFlow>,
        closed_ttl: Duration,
        idle_ttl: Duration,
    ) -> usize {
        let before = flows.len();
        flows.retain(|_, stored| {
            let idle = stored.last_seen.elapsed();
            let ttl = if stored.flow.is_open() { idle_ttl } else { closed_ttl };
            idle < ttl
        });
        before - flows.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
