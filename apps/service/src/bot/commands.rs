/// Inbound message classification
///
/// Anything that parses to `None` is silently ignored, per the bot's
/// contract of only ever reacting to its three message shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start` - greeting, no state change
    Start,

    /// `/stop` - cancel the sender's check
    Stop,

    /// A message starting with `http` - register the sender's check
    Watch(String),
}

impl Command {
    pub fn parse(text: &str) -> Option<Command> {
        let text = text.trim();

        if is_command(text, "/start") {
            Some(Command::Start)
        } else if is_command(text, "/stop") {
            Some(Command::Stop)
        } else if text.starts_with("http") {
            Some(Command::Watch(text.to_string()))
        } else {
            None
        }
    }
}

/// Match `/cmd`, `/cmd@botname` and `/cmd trailing words`
fn is_command(text: &str, command: &str) -> bool {
    match text.strip_prefix(command) {
        Some(rest) => {
            rest.is_empty() || rest.starts_with('@') || rest.starts_with(char::is_whitespace)
        }
        None => false,
    }
}

pub const GREETING: &str = "Hi! Send me an HTTP(S) link and I will keep checking that it is \
     reachable, reporting the status back to you on a fixed schedule. Send /stop to cancel.";

pub fn stopped_reply(existed: bool) -> &'static str {
    if existed {
        "Monitoring stopped."
    } else {
        "No active check for you."
    }
}

pub fn watch_ack(url: &str, interval_minutes: u64) -> String {
    format!(
        "Got it! I am now watching {}. I will report its status every {} minutes.",
        url, interval_minutes
    )
}
