use docent_core::message::Message;
use uuid::Uuid;

/// Where a message stands relative to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Appended locally; the send carrying it has not settled.
    Pending,
    /// Known to the server.
    Confirmed,
    /// The send carrying it failed. The entry stays visible.
    Failed,
}

/// One message in the stream plus its delivery state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEntry {
    pub message: Message,
    pub delivery: Delivery,
    /// Set for turns composed on this client.
    pub local_id: Option<Uuid>,
    /// Store clock at the last local change; 0 for entries from a listing.
    pub(super) changed: u64,
}

impl StreamEntry {
    pub(crate) fn confirmed(message: Message) -> Self {
        Self {
            message,
            delivery: Delivery::Confirmed,
            local_id: None,
            changed: 0,
        }
    }

    pub(crate) fn pending(message: Message) -> Self {
        Self {
            message,
            delivery: Delivery::Pending,
            local_id: Some(Uuid::new_v4()),
            changed: 0,
        }
    }

    pub(super) fn stamped(mut self, clock: u64) -> Self {
        self.changed = clock;
        self
    }

    pub fn is_local(&self) -> bool {
        self.local_id.is_some()
    }
}
