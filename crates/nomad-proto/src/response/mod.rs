//! Numeric reply and error codes.
//!
//! Only the numerics the daemon actually emits are listed. Every numeric line is
//! addressed to the recipient's nickname, which the caller fills in per connection.
//! Names and values follow RFC 2812, including its `ALREADYREGISTRED` spelling.

#![allow(non_camel_case_types)]

mod helpers;

/// A server numeric.
///
/// The discriminant is the wire code. [`Response::category`] groups codes into
/// registration (below 100), replies (200-399) and errors (400-599).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
#[non_exhaustive]
pub enum Response {
    // registration burst
    /// `:Welcome to the Internet Relay Network <nick!user@host>`
    RPL_WELCOME = 1,
    /// `:Your host is <server>, running version <version>`
    RPL_YOURHOST = 2,
    /// `:This server was created <date>`
    RPL_CREATED = 3,
    /// `<server> <version> <user modes> <channel modes>`
    RPL_MYINFO = 4,

    // replies
    /// `<mode string>`
    RPL_UMODEIS = 221,
    /// `<channel> :No topic is set`
    RPL_NOTOPIC = 331,
    /// `<channel> :<topic>`
    RPL_TOPIC = 332,
    /// `<channel> <nick>`
    RPL_INVITING = 341,
    /// `= <channel> :<nicks>`
    RPL_NAMREPLY = 353,
    /// `<channel> :End of NAMES list`
    RPL_ENDOFNAMES = 366,
    /// `:You are now an IRC operator`
    RPL_YOUREOPER = 381,

    // errors
    /// `<nick> :No such nick/channel`
    ERR_NOSUCHNICK = 401,
    /// `<channel> :No such channel`
    ERR_NOSUCHCHANNEL = 403,
    /// `<command> :Unknown command`
    ERR_UNKNOWNCOMMAND = 421,
    /// `<nick> :Nickname is already in use`
    ERR_NICKNAMEINUSE = 433,
    /// `<channel> :You're not on that channel`
    ERR_NOTONCHANNEL = 442,
    /// `<nick> <channel> :is already on channel`
    ERR_USERONCHANNEL = 443,
    /// `<command> :Not enough parameters`
    ERR_NEEDMOREPARAMS = 461,
    /// `:You may not reregister`
    ERR_ALREADYREGISTRED = 462,
    /// `:Password incorrect`
    ERR_PASSWDMISMATCH = 464,
    /// `<channel> :Cannot join channel (+i)`
    ERR_INVITEONLYCHAN = 473,
    /// `<channel> :Cannot join channel (+k)`
    ERR_BADCHANNELKEY = 475,
    /// `<channel> :Channel doesn't support modes`
    ERR_NOCHANMODES = 477,
    /// `:Permission Denied`
    ERR_NOPRIVILEGES = 481,
    /// `:Your connection is restricted!`
    ERR_RESTRICTED = 484,
    /// `:Cannot change mode for other users`
    ERR_USERSDONTMATCH = 502,
}
