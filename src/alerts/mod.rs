//! Alert and notification system
//!
//! Evaluates sensors, records alerts and dispatches them to multiple
//! notification channels.

mod manager;
mod notifier;
mod types;

pub use manager::{AlertManager, RECENT_ALERTS};
pub use notifier::{
    format_phone_number, ConsoleNotifier, Delivery, EmailNotifier, Notifier, SmsNotifier,
    WebhookNotifier,
};
pub use types::{AlertRecord, Severity};
