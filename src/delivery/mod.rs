//! Per-connection reply delivery.
//!
//! Each connection owns one bounded mailbox. Any number of producers hold a
//! [`ReplySender`]; exactly one [`Writer`] drains the mailbox in FIFO order,
//! renders each reply against the live client and writes the framed line.
//!
//! ```text
//!  handler ─┐                        ┌──────────────────────────────┐
//!  handler ─┼─ Arc<Reply> ─▶ mailbox ─▶ Writer: render(client) ─▶ IO │
//!  fan-out ─┘   (bounded)            └──────────────────────────────┘
//! ```

mod fanout;
mod writer;

pub use fanout::{Broadcast, Mailboxes};
pub use writer::Writer;

use crate::error::{DeliveryError, DeliveryResult};
use crate::reply::Reply;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Create a bounded mailbox for one connection.
///
/// `capacity` must be non-zero.
pub fn mailbox(capacity: usize) -> (ReplySender, ReplyReceiver) {
    let (tx, rx) = mpsc::channel(capacity);
    (ReplySender { tx }, ReplyReceiver { rx })
}

/// Producer handle for one connection's mailbox.
#[derive(Debug, Clone)]
pub struct ReplySender {
    tx: mpsc::Sender<Arc<Reply>>,
}

impl ReplySender {
    /// Queue a reply, waiting for room if the mailbox is full.
    pub async fn send(&self, reply: impl Into<Arc<Reply>>) -> DeliveryResult {
        self.tx
            .send(reply.into())
            .await
            .map_err(|_| DeliveryError::QueueClosed)
    }

    /// Queue a reply without waiting.
    pub fn try_send(&self, reply: impl Into<Arc<Reply>>) -> DeliveryResult {
        self.tx.try_send(reply.into()).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => DeliveryError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => DeliveryError::QueueClosed,
        })
    }

    /// Whether the writer side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer side of a mailbox; owned by exactly one [`Writer`].
#[derive(Debug)]
pub struct ReplyReceiver {
    rx: mpsc::Receiver<Arc<Reply>>,
}

impl ReplyReceiver {
    pub async fn recv(&mut self) -> Option<Arc<Reply>> {
        self.rx.recv().await
    }
}
