use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::monitoring::{CheckScheduler, CheckConfig, OwnerId};

/// An owner's single active recurring check
///
/// The join handle doubles as the cancellation token: aborting it is the
/// only way a scheduled check stops early.
pub struct RecurringCheck {
    url: String,
    #[allow(dead_code)] // Part of the (owner, url, interval) triple
    interval_seconds: u64,
    handle: tokio::task::JoinHandle<()>,
}

/// Registry of recurring checks, at most one per owner
///
/// Shared between the command-handling context and the orchestrator's
/// event loop. Map mutation and handle cancellation happen under one lock
/// acquisition, so a cancelled check cannot linger in the map and a
/// replaced check cannot double-fire.
pub struct CheckRegistry {
    scheduler: CheckScheduler,
    interval_seconds: u64,
    checks: Mutex<HashMap<OwnerId, RecurringCheck>>,
}

impl CheckRegistry {
    /// Create a registry; `interval_seconds` applies to every check
    pub fn new(scheduler: CheckScheduler, interval_seconds: u64) -> Self {
        Self {
            scheduler,
            interval_seconds,
            checks: Mutex::new(HashMap::new()),
        }
    }

    /// Register a recurring check, replacing any existing one for the owner
    ///
    /// The previous check's task is aborted before the new one is
    /// installed. The new task's first probe fires immediately, which is
    /// what gives the owner instant feedback after registering.
    pub fn register(&self, owner: OwnerId, url: String) {
        let mut checks = self.checks.lock().expect("registry lock poisoned");

        if let Some(previous) = checks.remove(&owner) {
            previous.handle.abort();
            debug!(owner, "Replacing existing check");
        }

        let handle = self.scheduler.schedule_check(CheckConfig {
            owner,
            url: url.clone(),
            interval_seconds: self.interval_seconds,
        });

        checks.insert(
            owner,
            RecurringCheck {
                url,
                interval_seconds: self.interval_seconds,
                handle,
            },
        );
    }

    /// Cancel and remove the owner's check; reports whether one existed
    pub fn unregister(&self, owner: OwnerId) -> bool {
        let mut checks = self.checks.lock().expect("registry lock poisoned");

        match checks.remove(&owner) {
            Some(check) => {
                check.handle.abort();
                true
            }
            None => false,
        }
    }

    #[allow(dead_code)]
    pub fn has_check(&self, owner: OwnerId) -> bool {
        self.checks
            .lock()
            .expect("registry lock poisoned")
            .contains_key(&owner)
    }

    /// URL the owner's active check targets, if any
    #[allow(dead_code)]
    pub fn watched_url(&self, owner: OwnerId) -> Option<String> {
        self.checks
            .lock()
            .expect("registry lock poisoned")
            .get(&owner)
            .map(|check| check.url.clone())
    }

    pub fn active_count(&self) -> usize {
        self.checks.lock().expect("registry lock poisoned").len()
    }

    /// Abort every check task; used at process shutdown
    pub fn clear(&self) {
        let mut checks = self.checks.lock().expect("registry lock poisoned");
        for (_, check) in checks.drain() {
            check.handle.abort();
        }
    }
}
