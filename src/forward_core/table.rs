//! Full pipeline from raw events to presenter rows

use super::aggregator::aggregate;
use super::event::ForwardingEvent;
use super::normalizer::Bar;
use super::ranker::{rank, OrderKey};

/// One row as the table renderer consumes it
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub alias: String,
    pub channel: String,
    pub incoming: u64,
    pub outgoing: u64,
    pub incoming_bar: Bar,
    pub outgoing_bar: Bar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForwardTable {
    pub order: OrderKey,
    pub rows: Vec<TableRow>,
    pub max_incoming: u64,
    pub max_outgoing: u64,
}

impl ForwardTable {
    /// Amounts are shown without a unit when ordering by `amount`
    pub fn amounts_without_unit(&self) -> bool {
        self.order == OrderKey::Amount
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Aggregate, rank and normalize `events` for display
pub fn build_table(events: &[ForwardingEvent], order: OrderKey) -> ForwardTable {
    let ranked = rank(aggregate(events), order);
    let (max_incoming, max_outgoing) = (ranked.max_incoming, ranked.max_outgoing);

    let rows = ranked
        .rows
        .into_iter()
        .map(|row| TableRow {
            incoming_bar: Bar::new(row.incoming, max_incoming),
            outgoing_bar: Bar::new(row.outgoing, max_outgoing),
            alias: row.alias,
            channel: row.channel,
            incoming: row.incoming,
            outgoing: row.outgoing,
        })
        .collect();

    ForwardTable {
        order,
        rows,
        max_incoming,
        max_outgoing,
    }
}
