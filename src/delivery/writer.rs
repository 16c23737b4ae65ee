//! The single consumer of a connection's mailbox.

use super::ReplyReceiver;
use crate::error::{DeliveryError, DeliveryResult};
use crate::state::SharedClient;
use futures_util::SinkExt;
use nomad_proto::LineCodec;
use tokio::io::AsyncWrite;
use tokio::task::JoinHandle;
use tokio_util::codec::FramedWrite;
use tracing::{debug, info, instrument, warn};

/// Drains one mailbox and writes each rendered reply as a CRLF-terminated line.
pub struct Writer<W> {
    conn_id: String,
    rx: ReplyReceiver,
    recipient: SharedClient,
    sink: FramedWrite<W, LineCodec>,
}

impl<W> Writer<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(conn_id: impl Into<String>, rx: ReplyReceiver, recipient: SharedClient, io: W) -> Self {
        Self {
            conn_id: conn_id.into(),
            rx,
            recipient,
            sink: FramedWrite::new(io, LineCodec::new()),
        }
    }

    /// Write replies until every sender is dropped.
    ///
    /// Returns the number of lines written. A write failure ends the loop; the
    /// replies still queued are discarded with the mailbox.
    #[instrument(skip(self), fields(conn = %self.conn_id), name = "writer")]
    pub async fn run(mut self) -> DeliveryResult<u64> {
        let mut written = 0u64;

        while let Some(reply) = self.rx.recv().await {
            // Render against the client as it is now, not as it was when queued
            let line = {
                let client = self.recipient.read();
                reply.render(&*client)
            };

            let code = reply.code();
            debug!(code = %code, category = code.category(), line = %line, "Writing reply");

            let dropped = dropped_bytes(&line);
            if dropped > 0 {
                debug!(code = %code, dropped, "Line truncated at embedded line break");
            }

            if let Err(e) = self.sink.send(line).await {
                let e = DeliveryError::from(e);
                warn!(error = %e, code = e.error_code(), "Write error");
                return Err(e);
            }
            written += 1;
        }

        info!(written, "Delivery queue closed");
        Ok(written)
    }
}

impl<W> Writer<W>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    /// Run the writer on its own task.
    pub fn spawn(self) -> JoinHandle<DeliveryResult<u64>> {
        tokio::spawn(self.run())
    }
}

/// Bytes the codec will discard after the first line break; zero for lines it
/// rejects outright.
fn dropped_bytes(line: &str) -> usize {
    LineCodec::sanitize(line)
        .map(|clean| line.len() - clean.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::mailbox;
    use crate::reply::Reply;
    use crate::state::{Client, Server};
    use tokio::io::AsyncReadExt;

    #[test]
    fn dropped_bytes_counts_text_after_line_break() {
        assert_eq!(dropped_bytes(":a PRIVMSG #x :hi"), 0);
        assert_eq!(dropped_bytes(":a PRIVMSG #x :hi\r\nQUIT"), 6);
        assert_eq!(dropped_bytes("a\nb"), 2);
        assert_eq!(dropped_bytes("nul\0"), 0);
    }

    #[tokio::test]
    async fn embedded_line_break_is_cut_on_the_wire() {
        let server = Server::new("irc.local");
        let bob = Client::new("bob", "b", "h");
        let client = Client::new("me", "m", "h").into_shared();

        let (tx, rx) = mailbox(2);
        let (ours, mut theirs) = tokio::io::duplex(1024);
        let handle = Writer::new("c1", rx, client, ours).spawn();

        tx.send(Reply::rpl_privmsg(&bob, &server, "hi\r\nQUIT :forged"))
            .await
            .unwrap();
        drop(tx);
        assert_eq!(handle.await.unwrap().unwrap(), 1);

        let mut wire = String::new();
        theirs.read_to_string(&mut wire).await.unwrap();
        assert_eq!(wire, ":bob!b@h PRIVMSG irc.local :hi\r\n");
    }

    #[tokio::test]
    async fn nul_in_line_fails_the_writer() {
        let server = Server::new("irc.local");
        let client = Client::new("me", "m", "h").into_shared();

        let (tx, rx) = mailbox(1);
        let (ours, _theirs) = tokio::io::duplex(1024);
        let handle = Writer::new("c1", rx, client, ours).spawn();

        tx.send(Reply::err_no_such_nick(&server, "bad\0nick"))
            .await
            .unwrap();
        let err = handle.await.unwrap().unwrap_err();
        assert_eq!(err.error_code(), "write_failed");
    }
}
