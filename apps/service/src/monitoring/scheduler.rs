use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, warn};

use super::checker::Checker;
use super::types::{CheckOutcome, OwnerId};
use crate::notify::{DeliveryError, Notifier};

/// One recurring check as the scheduler sees it
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub owner: OwnerId,
    pub url: String,
    pub interval_seconds: u64,
}

/// Events reported by running check tasks
#[derive(Debug)]
pub enum SchedulerEvent {
    /// A probe ran and its status message was delivered
    Completed {
        owner: OwnerId,
        url: String,
        outcome: CheckOutcome,
    },

    /// Delivery to the owner failed permanently; the check task has stopped
    DeliveryLost { owner: OwnerId, reason: String },
}

/// Check scheduler - spawns and drives one timer task per recurring check
pub struct CheckScheduler {
    checker: Arc<dyn Checker>,
    notifier: Arc<dyn Notifier>,
    event_tx: mpsc::Sender<SchedulerEvent>,
}

impl CheckScheduler {
    /// Create a new check scheduler
    pub fn new(
        checker: Arc<dyn Checker>,
        notifier: Arc<dyn Notifier>,
        event_tx: mpsc::Sender<SchedulerEvent>,
    ) -> Self {
        Self {
            checker,
            notifier,
            event_tx,
        }
    }

    /// Schedule a recurring check for periodic probing
    ///
    /// The first tick fires immediately, so the owner gets feedback right
    /// after registering. The returned handle is the only way to stop the
    /// task; aborting it is how the registry cancels a check.
    pub fn schedule_check(&self, config: CheckConfig) -> tokio::task::JoinHandle<()> {
        let checker = self.checker.clone();
        let notifier = self.notifier.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let mut timer = interval(Duration::from_secs(config.interval_seconds));
            // Late ticks are skipped, never replayed
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                timer.tick().await;

                let outcome = checker.check(&config.url).await;
                let message = outcome.user_message(&config.url);

                match notifier.send(config.owner, &message).await {
                    Ok(()) => {
                        let event = SchedulerEvent::Completed {
                            owner: config.owner,
                            url: config.url.clone(),
                            outcome,
                        };
                        if event_tx.send(event).await.is_err() {
                            debug!("Event channel closed, stopping check task");
                            break;
                        }
                    }
                    Err(DeliveryError::Transient(reason)) => {
                        // Reported once per tick, retried on the next one
                        warn!(
                            owner = config.owner,
                            reason = %reason,
                            "Transient delivery failure"
                        );
                    }
                    Err(DeliveryError::Permanent(reason)) => {
                        let _ = event_tx
                            .send(SchedulerEvent::DeliveryLost {
                                owner: config.owner,
                                reason,
                            })
                            .await;
                        break;
                    }
                }
            }
        })
    }
}
