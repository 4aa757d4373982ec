//! Per-channel aggregation of forwarding events

use super::event::ForwardingEvent;
use std::collections::HashMap;

/// Totals for one channel/peer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedRow {
    pub channel: String,
    /// First alias seen for the channel
    pub alias: String,
    pub incoming: u64,
    pub outgoing: u64,
    /// Number of events merged into this row
    pub forwards: u64,
}

impl AggregatedRow {
    fn new(channel: String, alias: String) -> Self {
        Self {
            channel,
            alias,
            incoming: 0,
            outgoing: 0,
            forwards: 0,
        }
    }

    fn add_event(&mut self, event: &ForwardingEvent) {
        self.incoming = self.incoming.saturating_add(clamp_amount(event.incoming));
        self.outgoing = self.outgoing.saturating_add(clamp_amount(event.outgoing));
        self.forwards += 1;
    }

    /// Combined throughput used by the `amount` order key
    pub fn total(&self) -> u64 {
        self.incoming.saturating_add(self.outgoing)
    }
}

/// Group events by channel and sum both directions.
///
/// Rows come out in first-seen order. Negative amounts are clamped to zero
/// so one bad record cannot disturb the other rows.
pub fn aggregate(events: &[ForwardingEvent]) -> Vec<AggregatedRow> {
    let mut rows: Vec<AggregatedRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut clamped = 0usize;

    for event in events {
        if event.incoming < 0 || event.outgoing < 0 {
            clamped += 1;
        }

        let slot = *index.entry(event.channel.as_str()).or_insert_with(|| {
            rows.push(AggregatedRow::new(event.channel.clone(), event.alias.clone()));
            rows.len() - 1
        });
        rows[slot].add_event(event);
    }

    if clamped > 0 {
        log::warn!("Clamped negative amounts on {} of {} forwards", clamped, events.len());
    }
    log::debug!("Aggregated {} forwards into {} channels", events.len(), rows.len());

    rows
}

fn clamp_amount(amount: i64) -> u64 {
    amount.max(0) as u64
}
