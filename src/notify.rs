//! User-facing notifications for recoverable failures

/// Channel for messages the operator should see
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Routes notifications to the log (stderr)
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        log::error!("❌ {}", message);
    }
}

/// Keeps notifications in memory for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryNotifier {
    messages: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.lock().ok().and_then(|m| m.last().cloned())
    }
}

#[cfg(test)]
impl Notifier for MemoryNotifier {
    fn error(&self, message: &str) {
        log::error!("❌ {}", message);
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_keeps_order() {
        let notifier = MemoryNotifier::new();
        assert_eq!(notifier.last(), None);

        notifier.error("first");
        notifier.error("second");

        assert_eq!(notifier.messages(), vec!["first".to_string(), "second".to_string()]);
        assert_eq!(notifier.last(), Some("second".to_string()));
    }
}
