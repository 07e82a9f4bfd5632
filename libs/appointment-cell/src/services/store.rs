// libs/appointment-cell/src/services/store.rs
use std::collections::VecDeque;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::Appointment;

#[derive(Debug, Default)]
struct StoreInner {
    records: VecDeque<Appointment>,
    last_seq: u64,
}

/// Process-lifetime booking list, newest first.
///
/// Writers are serialized by the lock, so the sequence number handed out on
/// insert and the insert itself are one atomic step. Readers clone a snapshot
/// under the read lock and never see a partially inserted record.
#[derive(Debug, Default)]
pub struct AppointmentStore {
    inner: RwLock<StoreInner>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts at the front and returns the record's booking sequence number.
    /// Sequence numbers start at 1 and are never reused.
    pub async fn insert_front(&self, appointment: Appointment) -> u64 {
        let mut inner = self.inner.write().await;
        inner.last_seq += 1;
        inner.records.push_front(appointment);

        debug!("Stored appointment #{} ({} total)", inner.last_seq, inner.records.len());
        inner.last_seq
    }

    pub async fn list_all(&self) -> Vec<Appointment> {
        let inner = self.inner.read().await;
        inner.records.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}
