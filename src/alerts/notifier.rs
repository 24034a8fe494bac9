//! Alert notification system
//!
//! Provides notification channels for alerts: email, webhook, SMS and the
//! terminal. Each channel validates its own destination and reports the
//! outcome instead of failing; network transport is out of scope, so a
//! successful delivery is a logged acceptance of the message.

use regex::Regex;
use std::fmt;
use std::io::{self, Write};
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Result of a single notification attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Message accepted for delivery
    Sent { channel: String, line: String },
    /// Destination failed validation, nothing was sent
    Rejected { channel: String, reason: String },
    /// Destination was valid but the transport failed
    Failed { channel: String, reason: String },
}

impl Delivery {
    /// Whether the message was accepted
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent { line, .. } => write!(f, "{}", line),
            Self::Rejected { channel, reason } => {
                write!(f, "[ERROR {}] {}", channel.to_uppercase(), reason)
            }
            Self::Failed { channel, reason } => {
                write!(f, "[FAILED {}] {}", channel.to_uppercase(), reason)
            }
        }
    }
}

/// Notification channel trait
pub trait Notifier: Send + Sync {
    /// Deliver a message
    ///
    /// Never panics or returns an error; validation and transport problems
    /// are part of the returned [`Delivery`].
    fn send(&self, message: &str) -> Delivery;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// Email notifier
pub struct EmailNotifier {
    recipient: String,
    smtp_host: String,
}

impl EmailNotifier {
    /// SMTP host used when none is given
    pub const DEFAULT_SMTP_HOST: &'static str = "smtp.gmail.com";

    pub fn new(recipient: impl Into<String>) -> Self {
        Self::with_host(recipient, Self::DEFAULT_SMTP_HOST)
    }

    pub fn with_host(recipient: impl Into<String>, smtp_host: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            smtp_host: smtp_host.into(),
        }
    }

    /// Whether the recipient looks like `local@domain.tld`
    pub fn is_valid_address(&self) -> bool {
        EMAIL_REGEX.is_match(&self.recipient)
    }
}

impl Notifier for EmailNotifier {
    fn send(&self, message: &str) -> Delivery {
        if !self.is_valid_address() {
            return rejected(self.name(), format!("Invalid address: {}", self.recipient));
        }
        sent(
            self.name(),
            format!(
                "[EMAIL via {} to {}] {}",
                self.smtp_host, self.recipient, message
            ),
        )
    }

    fn name(&self) -> &str {
        "email"
    }
}

/// Webhook notifier
pub struct WebhookNotifier {
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Whether the URL uses the http or https scheme
    pub fn is_valid_url(&self) -> bool {
        self.url.starts_with("http://") || self.url.starts_with("https://")
    }
}

impl Notifier for WebhookNotifier {
    fn send(&self, message: &str) -> Delivery {
        if !self.is_valid_url() {
            return rejected(self.name(), format!("Invalid URL: {}", self.url));
        }
        sent(self.name(), format!("[WEBHOOK {}] {}", self.url, message))
    }

    fn name(&self) -> &str {
        "webhook"
    }
}

/// SMS notifier
///
/// The phone number is never rejected; it is normalized when possible.
pub struct SmsNotifier {
    number: String,
    provider: String,
}

impl SmsNotifier {
    /// Provider used when none is given
    pub const DEFAULT_PROVIDER: &'static str = "Twilio";

    pub fn new(number: impl Into<String>) -> Self {
        Self::with_provider(number, Self::DEFAULT_PROVIDER)
    }

    pub fn with_provider(number: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            provider: provider.into(),
        }
    }

    /// Normalized destination number
    pub fn formatted_number(&self) -> String {
        format_phone_number(&self.number)
    }
}

impl Notifier for SmsNotifier {
    fn send(&self, message: &str) -> Delivery {
        sent(
            self.name(),
            format!(
                "[SMS via {} to {}] {}",
                self.provider,
                self.formatted_number(),
                message
            ),
        )
    }

    fn name(&self) -> &str {
        "sms"
    }
}

/// Format a phone number as `+1-NNN-NNN-NNNN`
///
/// Non-digits are stripped and the last ten digits are used. Inputs with
/// fewer than ten digits are returned unchanged.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 10 {
        return raw.to_string();
    }
    let last = &digits[digits.len() - 10..];
    format!("+1-{}-{}-{}", &last[..3], &last[3..6], &last[6..])
}

/// Terminal/console notifier
///
/// Writes each message to stdout or stderr, optionally colored.
pub struct ConsoleNotifier {
    /// Use stderr instead of stdout
    use_stderr: bool,
    /// Use colors (ANSI escape codes)
    use_colors: bool,
}

impl ConsoleNotifier {
    /// Create a notifier writing to stderr
    pub fn new() -> Self {
        Self {
            use_stderr: true,
            use_colors: Self::supports_color(),
        }
    }

    /// Create a notifier that uses stdout
    pub fn stdout() -> Self {
        Self {
            use_stderr: false,
            use_colors: Self::supports_color(),
        }
    }

    /// Disable colors
    pub fn no_color(mut self) -> Self {
        self.use_colors = false;
        self
    }

    fn supports_color() -> bool {
        std::env::var("TERM")
            .map(|term| term != "dumb")
            .unwrap_or(false)
    }

    fn format_message(&self, message: &str) -> String {
        if self.use_colors {
            format!("\x1b[33m[CONSOLE]\x1b[0m {}", message)
        } else {
            format!("[CONSOLE] {}", message)
        }
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        if self.use_stderr {
            let mut handle = io::stderr().lock();
            writeln!(handle, "{}", line)
        } else {
            let mut handle = io::stdout().lock();
            writeln!(handle, "{}", line)
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn send(&self, message: &str) -> Delivery {
        let line = self.format_message(message);
        match self.write_line(&line) {
            Ok(()) => Delivery::Sent {
                channel: self.name().to_string(),
                line,
            },
            Err(e) => {
                log::warn!("Console notification failed: {}", e);
                Delivery::Failed {
                    channel: self.name().to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    fn name(&self) -> &str {
        "console"
    }
}

fn sent(channel: &str, line: String) -> Delivery {
    log::info!("{}", line);
    Delivery::Sent {
        channel: channel.to_string(),
        line,
    }
}

fn rejected(channel: &str, reason: String) -> Delivery {
    log::warn!("{} notification rejected: {}", channel, reason);
    Delivery::Rejected {
        channel: channel.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(EmailNotifier::new("admin@example.com").is_valid_address());
        assert!(EmailNotifier::new("ops.team+alerts@mail.example.org").is_valid_address());
        assert!(!EmailNotifier::new("not-an-email").is_valid_address());
        assert!(!EmailNotifier::new("admin@example").is_valid_address());
    }

    #[test]
    fn test_email_send() {
        let notifier = EmailNotifier::with_host("admin@example.com", "smtp.example.com");
        let delivery = notifier.send("disk hot");
        assert_eq!(
            delivery,
            Delivery::Sent {
                channel: "email".to_string(),
                line: "[EMAIL via smtp.example.com to admin@example.com] disk hot".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_email_is_not_delivered() {
        let delivery = EmailNotifier::new("not-an-email").send("disk hot");
        assert!(!delivery.is_sent());
        assert!(matches!(delivery, Delivery::Rejected { .. }));
        assert!(!delivery.to_string().contains("disk hot"));
    }

    #[test]
    fn test_webhook_scheme_validation() {
        assert!(WebhookNotifier::new("http://hooks.example.com/a").is_valid_url());
        assert!(WebhookNotifier::new("https://hooks.example.com/a").is_valid_url());
        assert!(!WebhookNotifier::new("ftp://hooks.example.com/a").is_valid_url());
        assert!(!WebhookNotifier::new("hooks.example.com").is_valid_url());
    }

    #[test]
    fn test_webhook_send() {
        let delivery = WebhookNotifier::new("https://api.example.com/alerts").send("msg");
        assert_eq!(delivery.to_string(), "[WEBHOOK https://api.example.com/alerts] msg");

        let delivery = WebhookNotifier::new("api.example.com").send("msg");
        assert!(matches!(delivery, Delivery::Rejected { .. }));
    }

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number("555-123-4567"), "+1-555-123-4567");
        assert_eq!(format_phone_number("(555) 123 4567"), "+1-555-123-4567");
        assert_eq!(format_phone_number("+44 1 555 123 4567"), "+1-555-123-4567");
        assert_eq!(format_phone_number("123"), "123");
    }

    #[test]
    fn test_sms_send_never_rejects() {
        let delivery = SmsNotifier::new("123").send("msg");
        assert_eq!(delivery.to_string(), "[SMS via Twilio to 123] msg");

        let delivery = SmsNotifier::with_provider("555-123-4567", "Nexmo").send("msg");
        assert_eq!(delivery.to_string(), "[SMS via Nexmo to +1-555-123-4567] msg");
    }

    #[test]
    fn test_console_notifier() {
        let notifier = ConsoleNotifier::stdout().no_color();
        assert_eq!(notifier.name(), "console");
        assert!(!notifier.use_stderr);
        let delivery = notifier.send("hello");
        assert_eq!(delivery.to_string(), "[CONSOLE] hello");
    }
}
