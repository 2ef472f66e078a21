//! Orchestrator module - coordinates all components
//!
//! The orchestrator is the core coordinator that:
//! - Builds the checker, notifier, scheduler and registry from config
//! - Runs the Telegram command loop
//! - Processes scheduler events (logging, self-heal unregistration)

use std::sync::Arc;

use anyhow::Result;
use teloxide::Bot;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::bot;
use crate::config::Config;
use crate::monitoring::{CheckScheduler, HttpChecker, SchedulerEvent};
use crate::notify::TelegramNotifier;
use crate::registry::CheckRegistry;

/// Main orchestrator for the linkwatch service
pub struct Orchestrator {
    config: Config,
    bot: Bot,
}

impl Orchestrator {
    /// Create and run an orchestrator until shutdown
    pub async fn start(config: Config, bot: Bot) -> Result<()> {
        Self::new(config, bot).run().await
    }

    fn new(config: Config, bot: Bot) -> Self {
        Self { config, bot }
    }

    async fn run(self) -> Result<()> {
        info!("Starting linkwatch orchestrator...");

        let (event_tx, event_rx) = mpsc::channel::<SchedulerEvent>(100);

        let checker = Arc::new(HttpChecker::new(self.config.check.timeout_seconds)?);
        let notifier = Arc::new(TelegramNotifier::new(self.bot.clone()));
        let scheduler = CheckScheduler::new(checker, notifier, event_tx);
        let registry = Arc::new(CheckRegistry::new(
            scheduler,
            self.config.check.interval_seconds(),
        ));

        let event_loop = tokio::spawn(process_events(registry.clone(), event_rx));

        info!(
            interval_minutes = self.config.check.interval_minutes,
            "Orchestrator started - waiting for commands"
        );

        // Blocks until ctrl-c stops the update dispatcher
        bot::run_command_loop(
            self.bot,
            registry.clone(),
            self.config.check.interval_minutes,
        )
        .await;

        info!(
            active = registry.active_count(),
            "Shutting down, cancelling active checks"
        );
        registry.clear();
        event_loop.abort();

        Ok(())
    }
}

/// Drive scheduler events until the channel closes
///
/// Completed checks are logged; an owner whose delivery permanently
/// failed is dropped from the registry so no further ticks run for them.
async fn process_events(
    registry: Arc<CheckRegistry>,
    mut event_rx: mpsc::Receiver<SchedulerEvent>,
) {
    while let Some(event) = event_rx.recv().await {
        match event {
            SchedulerEvent::Completed {
                owner,
                url,
                outcome,
            } => {
                info!("Check for {} - {} - Status: {}", owner, url, outcome);
            }
            SchedulerEvent::DeliveryLost { owner, reason } => {
                warn!(
                    owner,
                    reason = %reason,
                    "Delivery permanently failed, dropping check"
                );
                registry.unregister(owner);
            }
        }
    }
}
