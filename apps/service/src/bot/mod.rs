//! Telegram command handling
//!
//! Long-polls for updates and turns the three recognized message shapes
//! into registry calls plus a reply. Reply failures are logged and
//! dropped; the scheduler's own deliveries are where permanent failures
//! matter.

pub mod commands;

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{error, info};

use crate::registry::CheckRegistry;
use commands::Command;

/// Run the update loop until shutdown (teloxide installs ctrl-c handling)
pub async fn run_command_loop(bot: Bot, registry: Arc<CheckRegistry>, interval_minutes: u64) {
    info!("Command loop started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let registry = registry.clone();
        async move {
            if let Some(text) = msg.text() {
                if let Some(command) = Command::parse(text) {
                    handle_command(&bot, &registry, &msg, command, interval_minutes).await;
                }
            }
            respond(())
        }
    })
    .await;

    info!("Command loop stopped");
}

async fn handle_command(
    bot: &Bot,
    registry: &CheckRegistry,
    msg: &Message,
    command: Command,
    interval_minutes: u64,
) {
    let owner = msg.chat.id.0;

    match command {
        Command::Start => {
            reply(bot, msg, commands::GREETING.to_string()).await;
        }
        Command::Stop => {
            let existed = registry.unregister(owner);
            info!(owner, existed, "Stop requested");
            reply(bot, msg, commands::stopped_reply(existed).to_string()).await;
        }
        Command::Watch(url) => {
            info!(owner, url = %url, "Registering recurring check");
            // Acknowledge first; the check's immediate probe reports right after
            reply(bot, msg, commands::watch_ack(&url, interval_minutes)).await;
            registry.register(owner, url);
        }
    }
}

async fn reply(bot: &Bot, msg: &Message, text: String) {
    if let Err(e) = bot.send_message(msg.chat.id, text).await {
        error!(chat = msg.chat.id.0, error = %e, "Failed to send reply");
    }
}
