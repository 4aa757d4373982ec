//! Forward Core - Flow Aggregation and Ranking
//!
//! Turns a raw list of forwarding events into ranked, normalized rows for the
//! forwards table. Every stage is a pure function; nothing here is cached or
//! shared between runs.
//!
//! # Architecture
//!
//! ```text
//! Vec<ForwardingEvent> → aggregate (group by channel, clamp, sum)
//!     ↓
//! rank (OrderKey, channel tie-break, max incoming / outgoing)
//!     ↓
//! Bar::new (0-100 percent against the column maximum)
//!     ↓
//! ForwardTable → Formatter + Table Renderer
//! ```

pub mod aggregator;
pub mod event;
pub mod normalizer;
pub mod ranker;
pub mod table;

pub use aggregator::{aggregate, AggregatedRow};
pub use event::ForwardingEvent;
pub use normalizer::{bar_percent, Bar};
pub use ranker::{rank, OrderKey, RankedResult};
pub use table::{build_table, ForwardTable, TableRow};
