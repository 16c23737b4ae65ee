//! A registered client connection.

use crate::identity::Identity;
use crate::state::UserModes;
use parking_lot::RwLock;
use std::sync::Arc;

/// Client shared between its command handlers and its connection writer.
///
/// The writer takes a read lock only while rendering one line, so a `NICK`
/// processed after a reply was queued is reflected when that reply is flushed.
pub type SharedClient = Arc<RwLock<Client>>;

/// A connected, registered client.
#[derive(Debug, Clone)]
pub struct Client {
    pub nick: String,
    pub user: String,
    pub realname: String,
    pub host: String,
    /// Visible hostname shown to other users (cloaked for privacy).
    pub visible_host: String,
    pub modes: UserModes,
}

impl Client {
    pub fn new(nick: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            nick: nick.into(),
            user: user.into(),
            realname: String::new(),
            visible_host: host.clone(),
            host,
            modes: UserModes::default(),
        }
    }

    pub fn with_visible_host(mut self, visible_host: impl Into<String>) -> Self {
        self.visible_host = visible_host.into();
        self
    }

    pub fn with_realname(mut self, realname: impl Into<String>) -> Self {
        self.realname = realname.into();
        self
    }

    pub fn with_modes(mut self, modes: UserModes) -> Self {
        self.modes = modes;
        self
    }

    /// Wrap in the lock shared with the connection writer.
    pub fn into_shared(self) -> SharedClient {
        Arc::new(RwLock::new(self))
    }

    pub fn set_nick(&mut self, nick: impl Into<String>) {
        self.nick = nick.into();
    }

    /// Mode string for RPL_UMODEIS.
    pub fn umode_string(&self) -> String {
        self.modes.as_mode_string()
    }
}

impl Identity for Client {
    fn id(&self) -> String {
        format!("{}!{}@{}", self.nick, self.user, self.host)
    }

    fn public_id(&self) -> String {
        format!("{}!{}@{}", self.nick, self.user, self.visible_host)
    }

    fn nick(&self) -> String {
        self.nick.clone()
    }
}
