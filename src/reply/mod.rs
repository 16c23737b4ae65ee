//! Outbound protocol replies.
//!
//! A [`Reply`] is built once per event and may be shared (behind an `Arc`) by
//! every connection it is delivered to. Each connection's writer calls
//! [`Reply::render`] with its own client, so numerics pick up the recipient's
//! nickname at flush time rather than at construction time.
//!
//! Constructors live in three groups:
//! - `messaging`: command-token lines (`JOIN`, `PRIVMSG`, ...)
//! - `numerics`: informational numerics (welcome burst, topic, names)
//! - `errors`: error numerics

mod errors;
mod messaging;
mod numerics;

use crate::identity::{Identity, IdentityView};
use nomad_proto::{Response, Verb};
use std::fmt;

/// The command token or numeric that identifies a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyCode {
    Verb(Verb),
    Numeric(Response),
}

impl ReplyCode {
    /// Log category: the numeric's class, or `"command"` for verbs.
    pub fn category(&self) -> &'static str {
        match self {
            ReplyCode::Verb(_) => "command",
            ReplyCode::Numeric(response) => response.category(),
        }
    }
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyCode::Verb(verb) => fmt::Display::fmt(verb, f),
            ReplyCode::Numeric(response) => fmt::Display::fmt(response, f),
        }
    }
}

/// One outbound protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Recipient-independent line, fully composed at construction.
    Immediate {
        source: IdentityView,
        verb: Verb,
        /// `:<source> <verb> <args>`
        line: String,
    },
    /// Numeric whose first parameter is the recipient's nickname.
    Numeric {
        source: IdentityView,
        response: Response,
        /// Everything after the recipient nickname.
        payload: String,
    },
}

impl Reply {
    /// Compose a recipient-independent line.
    pub fn immediate<S: Identity + ?Sized>(source: &S, verb: Verb, args: impl fmt::Display) -> Self {
        let source = IdentityView::of(source);
        let line = format!(":{} {} {}", source.id, verb, args);
        Reply::Immediate { source, verb, line }
    }

    /// Store a numeric whose recipient is filled in by [`Reply::render`].
    pub fn numeric<S: Identity + ?Sized>(
        source: &S,
        response: Response,
        payload: impl Into<String>,
    ) -> Self {
        Reply::Numeric {
            source: IdentityView::of(source),
            response,
            payload: payload.into(),
        }
    }

    pub fn source(&self) -> &IdentityView {
        match self {
            Reply::Immediate { source, .. } | Reply::Numeric { source, .. } => source,
        }
    }

    pub fn code(&self) -> ReplyCode {
        match self {
            Reply::Immediate { verb, .. } => ReplyCode::Verb(*verb),
            Reply::Numeric { response, .. } => ReplyCode::Numeric(*response),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Reply::Numeric { .. })
    }

    /// Arguments after the code (and, for numerics, after the recipient).
    pub fn payload(&self) -> &str {
        match self {
            Reply::Immediate { source, verb, line } => {
                // ":" + id + " " + verb + " "
                let skip = 1 + source.id.len() + 1 + verb.as_str().len() + 1;
                line.get(skip..).unwrap_or_default()
            }
            Reply::Numeric { payload, .. } => payload,
        }
    }

    /// Produce the wire line for one recipient, without line termination.
    pub fn render<R: Identity + ?Sized>(&self, recipient: &R) -> String {
        match self {
            Reply::Immediate { line, .. } => line.clone(),
            Reply::Numeric {
                source,
                response,
                payload,
            } => format!(
                ":{} {} {} {}",
                source.id,
                response,
                recipient.nick(),
                payload
            ),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Reply::Immediate { line, .. } => line.as_str(),
            Reply::Numeric { payload, .. } => payload.as_str(),
        };
        write!(
            f,
            "Reply(source={}, code={}, message={})",
            self.source(),
            self.code(),
            message
        )
    }
}
