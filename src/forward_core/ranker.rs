//! Ordering of aggregated rows and column maxima

use super::aggregator::AggregatedRow;
use crate::error::UnknownOrderKey;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column the forwards table is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderKey {
    /// Peer alias, ascending
    Alias,
    /// Incoming total, descending
    Incoming,
    /// Outgoing total, descending
    Outgoing,
    /// Combined incoming + outgoing, descending
    #[default]
    Amount,
    /// First-seen aggregation order. Fallback for unknown keys.
    Insertion,
}

impl OrderKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKey::Alias => "alias",
            OrderKey::Incoming => "incoming",
            OrderKey::Outgoing => "outgoing",
            OrderKey::Amount => "amount",
            OrderKey::Insertion => "insertion",
        }
    }

    /// Parse a caller-supplied key, falling back to insertion order
    pub fn from_param(param: &str) -> Self {
        param.parse().unwrap_or_else(|e: UnknownOrderKey| {
            log::warn!("{}, using insertion order", e);
            OrderKey::Insertion
        })
    }

    /// Next sortable column, for cycling in the table view
    pub fn next(&self) -> Self {
        match self {
            OrderKey::Alias => OrderKey::Incoming,
            OrderKey::Incoming => OrderKey::Outgoing,
            OrderKey::Outgoing => OrderKey::Amount,
            OrderKey::Amount => OrderKey::Alias,
            OrderKey::Insertion => OrderKey::Alias,
        }
    }

    fn compare(&self, a: &AggregatedRow, b: &AggregatedRow) -> Ordering {
        match self {
            OrderKey::Alias => a.alias.to_lowercase().cmp(&b.alias.to_lowercase()),
            OrderKey::Incoming => b.incoming.cmp(&a.incoming),
            OrderKey::Outgoing => b.outgoing.cmp(&a.outgoing),
            OrderKey::Amount => b.total().cmp(&a.total()),
            OrderKey::Insertion => Ordering::Equal,
        }
    }
}

impl FromStr for OrderKey {
    type Err = UnknownOrderKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alias" => Ok(OrderKey::Alias),
            "incoming" => Ok(OrderKey::Incoming),
            "outgoing" => Ok(OrderKey::Outgoing),
            "amount" => Ok(OrderKey::Amount),
            _ => Err(UnknownOrderKey(s.to_string())),
        }
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rows in display order plus the per-direction maxima
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankedResult {
    pub rows: Vec<AggregatedRow>,
    pub max_incoming: u64,
    pub max_outgoing: u64,
}

/// Order rows by `key` and compute column maxima.
///
/// The sort is stable and ties fall back to channel ascending, so the output
/// is a deterministic total order. Both maxima are 0 for an empty input.
pub fn rank(rows: Vec<AggregatedRow>, key: OrderKey) -> RankedResult {
    let mut rows = rows;

    if key != OrderKey::Insertion {
        rows.sort_by(|a, b| key.compare(a, b).then_with(|| a.channel.cmp(&b.channel)));
    }

    let max_incoming = rows.iter().map(|r| r.incoming).max().unwrap_or(0);
    let max_outgoing = rows.iter().map(|r| r.outgoing).max().unwrap_or(0);

    RankedResult {
        rows,
        max_incoming,
        max_outgoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(channel: &str, alias: &str, incoming: u64, outgoing: u64) -> AggregatedRow {
        AggregatedRow {
            channel: channel.to_string(),
            alias: alias.to_string(),
            incoming,
            outgoing,
            forwards: 1,
        }
    }

    fn channels(result: &RankedResult) -> Vec<&str> {
        result.rows.iter().map(|r| r.channel.as_str()).collect()
    }

    #[test]
    fn test_incoming_descending() {
        let rows = vec![row("A", "alpha", 40, 10), row("B", "bravo", 70, 90)];

        let result = rank(rows, OrderKey::Incoming);

        assert_eq!(channels(&result), vec!["B", "A"]);
        assert_eq!(result.max_incoming, 70);
        assert_eq!(result.max_outgoing, 90);
    }

    #[test]
    fn test_ties_break_on_channel() {
        let rows = vec![row("C", "x", 10, 0), row("A", "y", 10, 5), row("B", "z", 20, 0)];

        let result = rank(rows, OrderKey::Incoming);
        assert_eq!(channels(&result), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_alias_ascending_case_insensitive() {
        let rows = vec![row("1", "charlie", 0, 0), row("2", "Bravo", 0, 0), row("3", "alpha", 0, 0)];

        let result = rank(rows, OrderKey::Alias);
        assert_eq!(channels(&result), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_amount_uses_combined_total() {
        let rows = vec![row("A", "a", 100, 0), row("B", "b", 30, 80), row("C", "c", 50, 50)];

        let result = rank(rows, OrderKey::Amount);
        assert_eq!(channels(&result), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_outgoing_descending() {
        let rows = vec![row("A", "a", 0, 5), row("B", "b", 0, 50), row("C", "c", 0, 15)];

        let result = rank(rows, OrderKey::Outgoing);
        assert_eq!(channels(&result), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_insertion_keeps_order() {
        let rows = vec![row("Z", "z", 1, 1), row("A", "a", 9, 9)];

        let result = rank(rows, OrderKey::Insertion);
        assert_eq!(channels(&result), vec!["Z", "A"]);
        assert_eq!(result.max_incoming, 9);
    }

    #[test]
    fn test_empty_rows_have_zero_maxima() {
        let result = rank(Vec::new(), OrderKey::Amount);

        assert!(result.rows.is_empty());
        assert_eq!(result.max_incoming, 0);
        assert_eq!(result.max_outgoing, 0);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let rows = vec![
            row("D", "delta", 10, 10),
            row("B", "bravo", 10, 40),
            row("A", "Alpha", 70, 0),
            row("C", "charlie", 10, 10),
        ];

        for key in [OrderKey::Alias, OrderKey::Incoming, OrderKey::Outgoing, OrderKey::Amount, OrderKey::Insertion] {
            let once = rank(rows.clone(), key);
            let twice = rank(once.rows.clone(), key);
            assert_eq!(once, twice, "rank not idempotent for {}", key);
        }
    }

    #[test]
    fn test_parse_order_keys() {
        assert_eq!("alias".parse::<OrderKey>().unwrap(), OrderKey::Alias);
        assert_eq!(" Incoming ".parse::<OrderKey>().unwrap(), OrderKey::Incoming);
        assert_eq!("OUTGOING".parse::<OrderKey>().unwrap(), OrderKey::Outgoing);
        assert_eq!("amount".parse::<OrderKey>().unwrap(), OrderKey::Amount);
        assert!("fee".parse::<OrderKey>().is_err());
        assert!("insertion".parse::<OrderKey>().is_err());
    }

    #[test]
    fn test_unknown_param_falls_back_to_insertion() {
        assert_eq!(OrderKey::from_param("fee"), OrderKey::Insertion);
        assert_eq!(OrderKey::from_param(""), OrderKey::Insertion);
        assert_eq!(OrderKey::from_param("alias"), OrderKey::Alias);
    }

    #[test]
    fn test_next_cycles_sortable_columns() {
        let mut key = OrderKey::Insertion;
        let mut seen = Vec::new();
        for _ in 0..4 {
            key = key.next();
            seen.push(key);
        }
        assert_eq!(seen, vec![OrderKey::Alias, OrderKey::Incoming, OrderKey::Outgoing, OrderKey::Amount]);
        assert_eq!(key.next(), OrderKey::Alias);
    }
}
