/// Identity of the user/chat that owns a recurring check
///
/// Opaque to everything but the Telegram layer, where it is the chat id.
pub type OwnerId = i64;

/// Outcome of a single availability check
///
/// Every way a check can go is a value here; the checker never surfaces
/// an error to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Request succeeded with a success-class status code
    Reachable,

    /// Request succeeded with 404
    NotFound,

    /// Request succeeded with any other status code
    Ambiguous(u16),

    /// Network-level failure (timeout, DNS, connection refused, ...)
    Unreachable(String),
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckOutcome::Reachable => write!(f, "reachable"),
            CheckOutcome::NotFound => write!(f, "not-found"),
            CheckOutcome::Ambiguous(code) => write!(f, "ambiguous ({})", code),
            CheckOutcome::Unreachable(_) => write!(f, "unreachable"),
        }
    }
}

impl CheckOutcome {
    /// Render the user-facing status message for a checked URL
    ///
    /// The mapping is deterministic: same outcome and URL, same text.
    pub fn user_message(&self, url: &str) -> String {
        match self {
            CheckOutcome::Reachable => {
                format!("✅ {} is up and reachable.", url)
            }
            CheckOutcome::NotFound => {
                format!(
                    "❗️ {} was not found (404). The target may have been removed.",
                    url
                )
            }
            CheckOutcome::Ambiguous(code) => {
                format!(
                    "⚠️ Could not clearly determine the status of {}. Status code: {}.",
                    url, code
                )
            }
            CheckOutcome::Unreachable(reason) => {
                format!("❌ Could not check {}. Error: {}.", url, reason)
            }
        }
    }
}
