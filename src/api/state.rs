use std::sync::Arc;

use crate::models::MovieTable;

/// Outcome of the startup dataset load, fixed for the process lifetime.
#[derive(Debug)]
pub enum DatasetState {
    Ready(MovieTable),
    /// The load failed; every data-backed operation reports this instead of
    /// serving from an undefined state.
    Unavailable,
}

/// Shared application state.
///
/// The table is immutable after load, so handlers share it through a plain
/// `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    dataset: Arc<DatasetState>,
}

impl AppState {
    pub fn ready(table: MovieTable) -> Self {
        Self {
            dataset: Arc::new(DatasetState::Ready(table)),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            dataset: Arc::new(DatasetState::Unavailable),
        }
    }

    /// The loaded table, or None when the startup load failed
    pub fn table(&self) -> Option<&MovieTable> {
        match self.dataset.as_ref() {
            DatasetState::Ready(table) => Some(table),
            DatasetState::Unavailable => None,
        }
    }
}
