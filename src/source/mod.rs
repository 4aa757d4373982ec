//! Forwards event sources
//!
//! A source returns the forwards of the last `days` days, or an error. The
//! core never sees the error: [`fetch_or_notify`] reports it and hands back
//! an empty list.

pub mod file;
pub mod http;

pub use file::FileForwardSource;
pub use http::HttpForwardSource;

use crate::error::SourceError;
use crate::forward_core::ForwardingEvent;
use crate::notify::Notifier;
use async_trait::async_trait;

/// Backend that can list forwarding events for a time window
#[async_trait]
pub trait ForwardSource: Send + Sync {
    /// Forwards from the last `days` days (`days >= 1`)
    async fn fetch_forwards(&self, days: u32) -> Result<Vec<ForwardingEvent>, SourceError>;

    /// Source type for logging
    fn source_name(&self) -> &'static str;
}

/// Reject an empty window before doing any I/O
pub(crate) fn check_window(days: u32) -> Result<(), SourceError> {
    if days == 0 {
        return Err(SourceError::InvalidWindow { days });
    }
    Ok(())
}

/// Fetch forwards, degrading any failure to "no data".
///
/// The error detail is sent to `notifier`.
pub async fn fetch_or_notify(
    source: &dyn ForwardSource,
    days: u32,
    notifier: &dyn Notifier,
) -> Vec<ForwardingEvent> {
    match source.fetch_forwards(days).await {
        Ok(events) => {
            log::info!(
                "📥 Loaded {} forwards over {} days from {}",
                events.len(),
                days,
                source.source_name()
            );
            events
        }
        Err(e) => {
            notifier.error(&format!("Failed to load forwards: {}", e));
            Vec::new()
        }
    }
}
