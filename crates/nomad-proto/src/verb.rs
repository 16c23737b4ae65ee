//! Command tokens used by server-originated, recipient-independent lines.

use std::fmt;

/// A textual protocol verb such as `JOIN` or `PRIVMSG`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Verb {
    /// `PRIVMSG <target> :<text>`
    Privmsg,
    /// `NICK <new nick>`
    Nick,
    /// `JOIN <channel>`
    Join,
    /// `PART <channel> :<reason>`
    Part,
    /// `PONG <server>`
    Pong,
    /// `QUIT :<reason>`
    Quit,
    /// `INVITE <nick> <channel>`
    Invite,
}

impl Verb {
    /// The token as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Privmsg => "PRIVMSG",
            Verb::Nick => "NICK",
            Verb::Join => "JOIN",
            Verb::Part => "PART",
            Verb::Pong => "PONG",
            Verb::Quit => "QUIT",
            Verb::Invite => "INVITE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_uppercase() {
        for verb in [
            Verb::Privmsg,
            Verb::Nick,
            Verb::Join,
            Verb::Part,
            Verb::Pong,
            Verb::Quit,
            Verb::Invite,
        ] {
            let token = verb.to_string();
            assert_eq!(token, token.to_ascii_uppercase());
            assert_eq!(token, verb.as_str());
        }
    }
}
