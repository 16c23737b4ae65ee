//! Entities that supply identities and attributes to the reply catalog.
//!
//! Membership, topic and mode policy live with the command handlers; these
//! types only carry the data a reply needs.

mod channel;
mod client;
mod server;
mod user;

pub use channel::Channel;
pub use client::{Client, SharedClient};
pub use server::Server;
pub use user::UserModes;
