//! Channel attributes consumed by the reply catalog.

use crate::identity::Identity;
use crate::state::Server;
use std::sync::Arc;

/// A channel and its ordered member list.
#[derive(Debug, Clone)]
pub struct Channel {
    pub name: String,
    pub topic: Option<String>,
    /// Server hosting the channel; source of the channel's numeric replies.
    pub server: Arc<Server>,
    /// Member nicknames in join order.
    members: Vec<String>,
}

impl Channel {
    /// Mode letters advertised in RPL_MYINFO.
    pub const SUPPORTED_MODES: &'static str = "ik";

    pub fn new(name: impl Into<String>, server: Arc<Server>) -> Self {
        Self {
            name: name.into(),
            topic: None,
            server,
            members: Vec::new(),
        }
    }

    /// Member nicknames in join order.
    pub fn nicks(&self) -> &[String] {
        &self.members
    }

    pub fn has_member(&self, nick: &str) -> bool {
        self.members.iter().any(|m| m == nick)
    }

    /// Append a member. Returns `false` if the nick was already present.
    pub fn add_member(&mut self, nick: impl Into<String>) -> bool {
        let nick = nick.into();
        if self.has_member(&nick) {
            return false;
        }
        self.members.push(nick);
        true
    }

    /// Remove a member. Returns `false` if the nick was not present.
    pub fn remove_member(&mut self, nick: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != nick);
        self.members.len() != before
    }

    /// Rename a member in place, keeping its position.
    pub fn rename_member(&mut self, old: &str, new: impl Into<String>) -> bool {
        match self.members.iter_mut().find(|m| m.as_str() == old) {
            Some(slot) => {
                *slot = new.into();
                true
            }
            None => false,
        }
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        let topic = topic.into();
        self.topic = if topic.is_empty() { None } else { Some(topic) };
    }
}

impl Identity for Channel {
    fn id(&self) -> String {
        self.name.clone()
    }

    fn public_id(&self) -> String {
        self.name.clone()
    }

    fn nick(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> Channel {
        Channel::new("#chan", Arc::new(Server::new("irc.local")))
    }

    #[test]
    fn members_keep_join_order() {
        let mut chan = channel();
        assert!(chan.add_member("a"));
        assert!(chan.add_member("b"));
        assert!(chan.add_member("c"));
        assert!(!chan.add_member("b"));
        assert_eq!(chan.nicks(), ["a", "b", "c"]);
    }

    #[test]
    fn remove_and_rename() {
        let mut chan = channel();
        chan.add_member("a");
        chan.add_member("b");
        chan.add_member("c");
        assert!(chan.remove_member("b"));
        assert!(!chan.remove_member("b"));
        assert!(chan.rename_member("a", "z"));
        assert_eq!(chan.nicks(), ["z", "c"]);
    }

    #[test]
    fn empty_topic_clears() {
        let mut chan = channel();
        chan.set_topic("hello world");
        assert_eq!(chan.topic.as_deref(), Some("hello world"));
        chan.set_topic("");
        assert!(chan.topic.is_none());
    }
}
