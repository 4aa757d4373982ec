use {
    crate::{
        forward_core::{build_table, ForwardTable, ForwardingEvent, OrderKey},
        notify::Notifier,
        source::ForwardSource,
    },
    std::sync::Arc,
    tokio::{
        sync::{mpsc, RwLock},
        task::JoinSet,
    },
};

/// Message sent from the UI to the refresh task
#[derive(Debug, Clone, PartialEq)]
pub enum StateMessage {
    /// Load forwards for a window of `days`
    Refresh { days: u32 },
    SetOrder(OrderKey),
    Shutdown,
}

/// View state for the forwards table
///
/// Holds the last loaded events only; the table itself is rebuilt from them
/// on every call to [`State::table`].
#[derive(Debug, Clone)]
pub struct State {
    pub days: u32,
    pub order: OrderKey,
    events: Option<Vec<ForwardingEvent>>,
    loading: bool,
    last_error: Option<String>,
    fetched_at: Option<i64>,
}

impl State {
    pub fn new(days: u32, order: OrderKey) -> Self {
        Self {
            days,
            order,
            events: None,
            loading: false,
            last_error: None,
            fetched_at: None,
        }
    }

    pub fn begin_loading(&mut self, days: u32) {
        self.days = days;
        self.loading = true;
    }

    /// Store a fetch result. Results for a stale window are dropped.
    pub fn apply_result(&mut self, days: u32, result: Result<Vec<ForwardingEvent>, String>) -> bool {
        if days != self.days {
            log::debug!("Dropping forwards for stale window of {} days (current {})", days, self.days);
            return false;
        }

        self.loading = false;
        self.fetched_at = Some(chrono::Utc::now().timestamp());
        match result {
            Ok(events) => {
                self.events = Some(events);
                self.last_error = None;
            }
            Err(message) => {
                self.events = None;
                self.last_error = Some(message);
            }
        }
        true
    }

    /// Ranked table for the current events and order.
    ///
    /// `None` while loading or when there is nothing to show.
    pub fn table(&self) -> Option<ForwardTable> {
        if self.loading {
            return None;
        }
        match &self.events {
            Some(events) if !events.is_empty() => Some(build_table(events, self.order)),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn fetched_at(&self) -> Option<i64> {
        self.fetched_at
    }

    pub fn event_count(&self) -> usize {
        self.events.as_ref().map_or(0, Vec::len)
    }
}

/// Background task that performs fetches requested by the UI
///
/// Each fetch runs as its own task so order changes apply immediately and a
/// result for a superseded window is dropped by [`State::apply_result`].
pub async fn state_refresh_task(
    mut receiver: mpsc::Receiver<StateMessage>,
    state: Arc<RwLock<State>>,
    source: Arc<dyn ForwardSource>,
    notifier: Arc<dyn Notifier>,
) {
    log::info!("Refresh task started ({} source)", source.source_name());

    let mut fetches = JoinSet::new();

    loop {
        let message = tokio::select! {
            message = receiver.recv() => message,
            Some(joined) = fetches.join_next(), if !fetches.is_empty() => {
                if let Err(e) = joined {
                    log::warn!("Forwards fetch task failed: {}", e);
                }
                continue;
            }
        };

        match message {
            Some(StateMessage::Refresh { days }) => {
                state.write().await.begin_loading(days);
                fetches.spawn(fetch_into_state(days, state.clone(), source.clone(), notifier.clone()));
            }
            Some(StateMessage::SetOrder(order)) => {
                state.write().await.order = order;
            }
            Some(StateMessage::Shutdown) => {
                log::info!("Refresh task received shutdown signal");
                break;
            }
            None => break,
        }
    }

    fetches.abort_all();
    log::info!("Refresh task stopped");
}

async fn fetch_into_state(
    days: u32,
    state: Arc<RwLock<State>>,
    source: Arc<dyn ForwardSource>,
    notifier: Arc<dyn Notifier>,
) {
    let result = source.fetch_forwards(days).await.map_err(|e| {
        let message = format!("Failed to load forwards: {}", e);
        notifier.error(&message);
        message
    });

    if let Ok(events) = &result {
        log::info!("📥 Loaded {} forwards over {} days", events.len(), days);
    }

    state.write().await.apply_result(days, result);
}
