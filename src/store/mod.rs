pub mod fixtures;
pub mod snapshot;
pub mod state;

use std::path::PathBuf;
use std::sync::RwLock;

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::settings::Settings;
use crate::store::state::StoreState;

/// Change notification sent to subscribers after every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    JobChanged(Uuid),
    CandidateChanged(Uuid),
    InterviewScheduled(Uuid),
    InterviewCancelled(Uuid),
    ChatAppended(Uuid),
    SettingsChanged,
}

/// Single owner of the application state. Services hold an `Arc<Store>`
/// and go through [`read`]/[`mutate`]; a successful mutation writes the
/// JSON snapshot (when a path is configured) and broadcasts its event.
///
/// [`read`]: Store::read
/// [`mutate`]: Store::mutate
pub struct Store {
    state: RwLock<StoreState>,
    events: broadcast::Sender<StoreEvent>,
    snapshot_path: Option<PathBuf>,
}

impl Store {
    pub fn new(snapshot_path: Option<PathBuf>) -> Self {
        let mut state = fixtures::seed();

        if let Some(path) = &snapshot_path {
            match snapshot::load(path) {
                Ok(Some(snap)) => {
                    tracing::info!(path = %path.display(), "restoring state snapshot");
                    snap.apply(&mut state);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "unreadable snapshot, using seed data");
                }
            }
        }

        let (events, _) = broadcast::channel(64);
        Self {
            state: RwLock::new(state),
            events,
            snapshot_path,
        }
    }

    /// A store that neither loads nor writes a snapshot.
    pub fn in_memory() -> Self {
        Self::new(None)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> Result<T> {
        let guard = self
            .state
            .read()
            .map_err(|_| Error::Internal("state lock poisoned".to_string()))?;
        Ok(f(&guard))
    }

    /// Runs `f` under the write lock. When it succeeds the snapshot is
    /// written and `event` is broadcast; when it fails nothing is
    /// persisted or announced.
    pub fn mutate<T>(
        &self,
        event: StoreEvent,
        f: impl FnOnce(&mut StoreState) -> Result<T>,
    ) -> Result<T> {
        let out = {
            let mut guard = self
                .state
                .write()
                .map_err(|_| Error::Internal("state lock poisoned".to_string()))?;
            let out = f(&mut guard)?;
            if let Some(path) = &self.snapshot_path {
                if let Err(e) = snapshot::save(path, &guard) {
                    tracing::warn!(error = %e, path = %path.display(), "failed to write snapshot");
                }
            }
            out
        };
        let _ = self.events.send(event);
        Ok(out)
    }

    pub fn settings(&self) -> Result<Settings> {
        self.read(|state| state.settings.clone())
    }

    pub fn update_settings(&self, f: impl FnOnce(&mut Settings)) -> Result<Settings> {
        self.mutate(StoreEvent::SettingsChanged, |state| {
            f(&mut state.settings);
            Ok(state.settings.clone())
        })
    }
}
