//! # nomad-proto
//!
//! The read-only protocol registry shared by the nomad IRC daemon:
//!
//! - [`Response`]: numeric reply and error codes, rendered as exactly three digits
//! - [`Verb`]: command tokens used for recipient-independent lines
//! - [`VERSION`]: the version string advertised in the registration burst
//! - [`LineCodec`]: an outbound line encoder for tokio (feature `tokio`)
//!
//! ```rust
//! use nomad_proto::{Response, Verb};
//!
//! assert_eq!(Response::RPL_WELCOME.to_string(), "001");
//! assert_eq!(Verb::Join.as_str(), "JOIN");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod response;
pub mod verb;

#[cfg(feature = "tokio")]
pub mod line;

pub use self::error::ProtocolError;
pub use self::response::Response;
pub use self::verb::Verb;

#[cfg(feature = "tokio")]
pub use self::line::LineCodec;

/// Version string advertised in `RPL_YOURHOST` and `RPL_MYINFO`.
pub const VERSION: &str = concat!("nomad-", env!("CARGO_PKG_VERSION"));
