use super::entry::{Delivery, StreamEntry};
use crate::error_slot::ErrorSlot;
use docent_core::message::Message;
use docent_core::service::WorkspaceService;
use docent_core::{DocentError, ErrorKind, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// What happened to a send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank text, or another send was still in flight. Nothing changed.
    Ignored,
    /// The assistant reply that was appended.
    Replied(Message),
}

#[derive(Debug, Default)]
struct MessageState {
    entries: Vec<StreamEntry>,
    input: String,
    sending: bool,
    /// Bumped on every local append or delivery change.
    clock: u64,
}

impl MessageState {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn set_delivery(&mut self, local_id: Uuid, delivery: Delivery) {
        let clock = self.tick();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.local_id == Some(local_id))
        {
            entry.delivery = delivery;
            entry.changed = clock;
        }
    }

    /// Rebuilds the stream from a listing requested at clock `issued`.
    ///
    /// Entries changed after `issued` are re-appended, as are local turns the
    /// server never accepted. Confirmed entries the listing already ends with
    /// are not appended twice.
    fn apply_history(&mut self, fetched: &[Message], issued: u64) {
        let mut kept: Vec<StreamEntry> = self
            .entries
            .drain(..)
            .filter(|e| e.changed > issued || (e.is_local() && e.delivery != Delivery::Confirmed))
            .collect();

        let confirmed: Vec<usize> = kept
            .iter()
            .enumerate()
            .filter(|(_, e)| e.delivery == Delivery::Confirmed)
            .map(|(i, _)| i)
            .collect();
        if !confirmed.is_empty() && fetched.len() >= confirmed.len() {
            let tail = &fetched[fetched.len() - confirmed.len()..];
            let already_listed = confirmed.iter().zip(tail).all(|(&i, listed)| {
                kept[i].message.role == listed.role && kept[i].message.content == listed.content
            });
            if already_listed {
                let mut index = 0;
                kept.retain(|_| {
                    let keep = !confirmed.contains(&index);
                    index += 1;
                    keep
                });
            }
        }

        self.entries = fetched
            .iter()
            .cloned()
            .map(StreamEntry::confirmed)
            .chain(kept)
            .collect();
    }
}

/// Append-only conversation history of one project.
///
/// Sending appends the user's turn immediately, then appends the assistant
/// reply once the server answers. A failed send leaves the user's turn in
/// place. At most one send is outstanding at a time.
pub struct MessageStore {
    service: Arc<dyn WorkspaceService>,
    errors: ErrorSlot,
    state: RwLock<MessageState>,
}

impl MessageStore {
    pub fn new(service: Arc<dyn WorkspaceService>, errors: ErrorSlot) -> Self {
        Self {
            service,
            errors,
            state: RwLock::new(MessageState::default()),
        }
    }

    /// Fetches the conversation.
    ///
    /// Turns appended or settled while the request was outstanding stay after
    /// the fetched list, as do local turns the server never accepted.
    pub async fn load(&self, project_id: &str) -> Result<Vec<Message>> {
        tracing::debug!("[MessageStore] load() project_id={}", project_id);
        let issued = self.state.read().await.clock;
        match self.service.fetch_messages(project_id).await {
            Ok(messages) => {
                self.state.write().await.apply_history(&messages, issued);
                Ok(messages)
            }
            Err(e) => {
                tracing::warn!("[MessageStore] load failed: {}", e);
                let err = DocentError::Fetch(e);
                self.errors.record(&err).await;
                Err(err)
            }
        }
    }

    /// Replaces the composer text.
    pub async fn set_input(&self, text: impl Into<String>) {
        self.state.write().await.input = text.into();
    }

    pub async fn input(&self) -> String {
        self.state.read().await.input.clone()
    }

    /// Sends whatever is in the composer.
    pub async fn submit(&self, project_id: &str) -> Result<SendOutcome> {
        let text = self.input().await;
        self.send(project_id, &text).await
    }

    /// Sends a user turn.
    ///
    /// The raw text is sent; trimming only decides whether there is anything
    /// to send.
    pub async fn send(&self, project_id: &str, text: &str) -> Result<SendOutcome> {
        if text.trim().is_empty() {
            return Ok(SendOutcome::Ignored);
        }

        let local_id = {
            let mut state = self.state.write().await;
            if state.sending {
                tracing::debug!("[MessageStore] send ignored, another send is in flight");
                return Ok(SendOutcome::Ignored);
            }
            let clock = state.tick();
            let entry = StreamEntry::pending(Message::user(text)).stamped(clock);
            let local_id = entry.local_id;
            state.entries.push(entry);
            state.input.clear();
            state.sending = true;
            local_id
        };

        tracing::debug!("[MessageStore] send() project_id={}", project_id);
        let result = self.service.send_message(project_id, text).await;

        let outcome = {
            let mut state = self.state.write().await;
            state.sending = false;
            match result {
                Ok(reply) => {
                    if let Some(id) = local_id {
                        state.set_delivery(id, Delivery::Confirmed);
                    }
                    let clock = state.tick();
                    state
                        .entries
                        .push(StreamEntry::confirmed(reply.clone()).stamped(clock));
                    Ok(reply)
                }
                Err(e) => {
                    if let Some(id) = local_id {
                        state.set_delivery(id, Delivery::Failed);
                    }
                    Err(e)
                }
            }
        };

        match outcome {
            Ok(reply) => {
                self.errors.clear_kind(ErrorKind::Send).await;
                Ok(SendOutcome::Replied(reply))
            }
            Err(e) => {
                tracing::warn!("[MessageStore] send failed: {}", e);
                let err = DocentError::Send(e);
                self.errors.record(&err).await;
                Err(err)
            }
        }
    }

    pub async fn is_sending(&self) -> bool {
        self.state.read().await.sending
    }

    /// The conversation in append order.
    pub async fn messages(&self) -> Vec<Message> {
        self.state
            .read()
            .await
            .entries
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    pub async fn entries(&self) -> Vec<StreamEntry> {
        self.state.read().await.entries.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }
}
