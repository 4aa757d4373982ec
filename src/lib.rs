//! Forward flow table for a payment-routing node.
//!
//! Loads forwarding events for a window of days, aggregates them per
//! channel, ranks the channels and sizes incoming/outgoing bars against the
//! busiest channel in each direction.

pub mod config;
pub mod error;
pub mod format;
pub mod forward_core;
pub mod notify;
pub mod source;
pub mod state;
pub mod ui;

pub use error::{ConfigError, SourceError, UnknownOrderKey};
pub use forward_core::{build_table, ForwardTable, ForwardingEvent, OrderKey};
