//! Connection registry and fan-out of one reply to many mailboxes.

use super::ReplySender;
use crate::error::{DeliveryError, DeliveryResult};
use crate::reply::Reply;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Mailboxes of every live connection, keyed by connection id.
#[derive(Debug, Default)]
pub struct Mailboxes {
    senders: DashMap<String, ReplySender>,
}

impl Mailboxes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection's mailbox, replacing any previous one.
    pub fn register(&self, conn_id: impl Into<String>, sender: ReplySender) {
        let conn_id = conn_id.into();
        debug!(conn = %conn_id, "Mailbox registered");
        self.senders.insert(conn_id, sender);
    }

    /// Remove a connection's mailbox. Its writer stops once other senders are gone.
    pub fn unregister(&self, conn_id: &str) -> Option<ReplySender> {
        let removed = self.senders.remove(conn_id).map(|(_, sender)| sender);
        if removed.is_some() {
            debug!(conn = %conn_id, "Mailbox unregistered");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }

    fn sender(&self, conn_id: &str) -> Option<ReplySender> {
        // Clone out so no map guard is held across an await
        self.senders.get(conn_id).map(|s| s.value().clone())
    }

    /// Queue a reply for one connection.
    pub async fn send_to(&self, conn_id: &str, reply: impl Into<Arc<Reply>>) -> DeliveryResult {
        let sender = self
            .sender(conn_id)
            .ok_or_else(|| DeliveryError::UnknownConnection(conn_id.to_string()))?;
        sender.send(reply).await
    }

    /// Queue the same reply for every listed connection without waiting.
    ///
    /// A member whose mailbox is full is skipped and reported, so one slow reader
    /// never holds up the rest. Unknown or closed connections are skipped silently.
    pub fn broadcast<'a, I>(&self, conn_ids: I, reply: impl Into<Arc<Reply>>) -> Broadcast
    where
        I: IntoIterator<Item = &'a str>,
    {
        let reply = reply.into();
        let mut outcome = Broadcast::default();

        for conn_id in conn_ids {
            let Some(sender) = self.sender(conn_id) else {
                debug!(conn = %conn_id, "Fan-out target has no mailbox");
                continue;
            };
            match sender.try_send(Arc::clone(&reply)) {
                Ok(()) => outcome.delivered += 1,
                Err(DeliveryError::QueueFull) => {
                    warn!(conn = %conn_id, code = %reply.code(), "Fan-out target queue full");
                    outcome.full.push(conn_id.to_string());
                }
                Err(e) => debug!(conn = %conn_id, error = %e, "Fan-out target dropped"),
            }
        }

        outcome
    }
}

/// Result of [`Mailboxes::broadcast`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Broadcast {
    /// Mailboxes that accepted the reply.
    pub delivered: usize,
    /// Connections whose mailbox was at capacity; the caller decides whether to
    /// drop them.
    pub full: Vec<String>,
}
