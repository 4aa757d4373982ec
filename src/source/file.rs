//! JSON snapshot forwards source

use super::{check_window, ForwardSource};
use crate::error::SourceError;
use crate::forward_core::ForwardingEvent;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Snapshot of exported forwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardsSnapshot {
    pub forwards: Vec<ForwardingEvent>,
    pub timestamp: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Snapshot(ForwardsSnapshot),
    Events(Vec<ForwardingEvent>),
}

/// Reads forwards from a JSON file and applies the day window itself
pub struct FileForwardSource {
    path: PathBuf,
}

impl FileForwardSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<Vec<ForwardingEvent>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound {
                path: self.path.display().to_string(),
            });
        }

        let json = std::fs::read_to_string(&self.path)?;
        let events = match serde_json::from_str::<SnapshotFile>(&json)? {
            SnapshotFile::Snapshot(snapshot) => snapshot.forwards,
            SnapshotFile::Events(events) => events,
        };
        Ok(events)
    }
}

/// Keep events newer than `days` before `now`. Undated events are kept.
pub fn within_window(events: Vec<ForwardingEvent>, days: u32, now: i64) -> Vec<ForwardingEvent> {
    let cutoff = now - i64::from(days) * SECS_PER_DAY;
    events
        .into_iter()
        .filter(|event| event.created_at.map_or(true, |ts| ts >= cutoff))
        .collect()
}

/// Write a snapshot file readable by [`FileForwardSource`]
pub fn save_snapshot(events: &[ForwardingEvent], path: impl AsRef<Path>) -> Result<(), SourceError> {
    let snapshot = ForwardsSnapshot {
        forwards: events.to_vec(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    let json = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path.as_ref(), json)?;

    log::debug!("Saved {} forwards to {}", events.len(), path.as_ref().display());
    Ok(())
}

#[async_trait]
impl ForwardSource for FileForwardSource {
    async fn fetch_forwards(&self, days: u32) -> Result<Vec<ForwardingEvent>, SourceError> {
        check_window(days)?;

        let events = self.load()?;
        let total = events.len();
        let events = within_window(events, days, chrono::Utc::now().timestamp());

        log::debug!(
            "Read {} forwards from {} ({} within {} days)",
            total,
            self.path.display(),
            events.len(),
            days
        );
        Ok(events)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
