pub mod checker;
/// Monitoring module - performs and schedules availability checks
///
/// This module is responsible for:
/// - Probing a URL and classifying the outcome
/// - Driving each recurring check on its own timer
/// - Turning outcomes into user-facing status messages
pub mod scheduler;
pub mod types;

pub use checker::{Checker, HttpChecker};
pub use scheduler::{CheckScheduler, CheckConfig, SchedulerEvent};
pub use types::{CheckOutcome, OwnerId};
