//! Outbound line codec for tokio.
//!
//! Rendered replies carry no terminator; this codec appends CRLF. Anything after
//! an embedded line break is dropped so a single reply always produces a single
//! line on the wire.

use bytes::BytesMut;
use tokio_util::codec::Encoder;

use crate::error;

/// Encoder that frames one rendered line per item.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineCodec;

impl LineCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self
    }

    /// Strip everything from the first line ending onwards and reject NUL.
    pub fn sanitize(line: &str) -> error::Result<&str> {
        let end = line.find(['\r', '\n']).unwrap_or(line.len());
        let line = &line[..end];
        if line.contains('\0') {
            return Err(error::ProtocolError::IllegalControlChar('\0'));
        }
        Ok(line)
    }
}

impl Encoder<String> for LineCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> error::Result<()> {
        let line = Self::sanitize(&line)?;
        dst.reserve(line.len() + 2);
        dst.extend_from_slice(line.as_bytes());
        dst.extend_from_slice(b"\r\n");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_appends_crlf() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::new();

        codec
            .encode(":irc.local PONG irc.local".to_string(), &mut buf)
            .unwrap();
        assert_eq!(&buf[..], b":irc.local PONG irc.local\r\n");
    }

    #[test]
    fn test_encode_truncates_at_line_break() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::new();

        codec
            .encode(
                ":a!b@c PRIVMSG #x :hello\r\nQUIT :injected".to_string(),
                &mut buf,
            )
            .unwrap();
        assert_eq!(&buf[..], b":a!b@c PRIVMSG #x :hello\r\n");
    }

    #[test]
    fn test_encode_consecutive_lines() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::new();

        codec.encode("one".to_string(), &mut buf).unwrap();
        codec.encode("two".to_string(), &mut buf).unwrap();
        assert_eq!(&buf[..], b"one\r\ntwo\r\n");
    }

    #[test]
    fn test_encode_rejects_nul() {
        let mut codec = LineCodec::new();
        let mut buf = BytesMut::new();

        let result = codec.encode("bad\0line".to_string(), &mut buf);
        assert!(matches!(
            result,
            Err(error::ProtocolError::IllegalControlChar('\0'))
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_sanitize_lone_newline() {
        assert_eq!(LineCodec::sanitize("a\nb").unwrap(), "a");
        assert_eq!(LineCodec::sanitize("plain").unwrap(), "plain");
    }
}
