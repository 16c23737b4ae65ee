//! nomad-ircd - outbound reply construction and delivery for an IRC daemon.
//!
//! Handlers build a [`Reply`] from the entities involved in an event, queue it
//! on one or more connection mailboxes, and each connection's [`Writer`]
//! renders it for its own client at flush time.
//!
//! ```
//! use nomad_ircd::{Channel, Client, Reply, Server};
//! use std::sync::Arc;
//!
//! let server = Arc::new(Server::new("irc.local"));
//! let alice = Client::new("alice", "a", "h");
//! let channel = Channel::new("#go", Arc::clone(&server));
//!
//! let welcome = Reply::rpl_welcome(&*server, &alice);
//! assert_eq!(
//!     welcome.render(&alice),
//!     ":irc.local 001 alice :Welcome to the Internet Relay Network alice!a@h"
//! );
//!
//! let join = Reply::rpl_join(&channel, &alice);
//! assert_eq!(join.render(&alice), ":alice!a@h JOIN #go");
//! ```

pub mod config;
pub mod delivery;
pub mod error;
pub mod identity;
pub mod reply;
pub mod state;

pub use delivery::{Broadcast, Mailboxes, ReplyReceiver, ReplySender, Writer, mailbox};
pub use error::{DeliveryError, DeliveryResult};
pub use identity::{Identity, IdentityView};
pub use reply::{Reply, ReplyCode};
pub use state::{Channel, Client, Server, SharedClient, UserModes};
