//! Error numerics.
//!
//! Each constructor selects the numeric and formats the condition-specific text.
//! Which one to send is decided by the command handler.

use super::Reply;
use crate::identity::Identity;
use crate::state::{Channel, Server};
use nomad_proto::Response;

/// Errors sourced from an arbitrary identity.
macro_rules! impl_err {
    (
        $(#[$meta:meta])*
        $name:ident, $resp:ident, $msg:literal
    ) => {
        $(#[$meta])*
        pub fn $name<S: Identity + ?Sized>(source: &S) -> Self {
            Self::numeric(source, Response::$resp, concat!(":", $msg))
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident, $resp:ident, $arg:ident, $msg:literal
    ) => {
        $(#[$meta])*
        pub fn $name<S: Identity + ?Sized>(source: &S, $arg: &str) -> Self {
            Self::numeric(source, Response::$resp, format!(concat!("{} :", $msg), $arg))
        }
    };
}

/// Errors about a channel, sourced from the channel's server.
macro_rules! impl_chan_err {
    (
        $(#[$meta:meta])*
        $name:ident, $resp:ident, $msg:literal
    ) => {
        $(#[$meta])*
        pub fn $name(channel: &Channel) -> Self {
            Self::numeric(
                &*channel.server,
                Response::$resp,
                format!(concat!("{} :", $msg), channel.name),
            )
        }
    };
}

/// Errors sourced from the local server with a fixed text.
macro_rules! impl_server_err {
    (
        $(#[$meta:meta])*
        $name:ident, $resp:ident, $msg:literal
    ) => {
        $(#[$meta])*
        pub fn $name(server: &Server) -> Self {
            Self::numeric(server, Response::$resp, concat!(":", $msg))
        }
    };
}

impl Reply {
    impl_err!(
        /// `401 ERR_NOSUCHNICK`
        /// `<nickname> :No such nick/channel`
        err_no_such_nick, ERR_NOSUCHNICK, nick, "No such nick/channel"
    );

    impl_err!(
        /// `403 ERR_NOSUCHCHANNEL`
        /// `<channel name> :No such channel`
        err_no_such_channel, ERR_NOSUCHCHANNEL, channel, "No such channel"
    );

    impl_err!(
        /// `421 ERR_UNKNOWNCOMMAND`
        /// `<command> :Unknown command`
        err_unknown_command, ERR_UNKNOWNCOMMAND, command, "Unknown command"
    );

    impl_err!(
        /// `433 ERR_NICKNAMEINUSE`
        /// `<nick> :Nickname is already in use`
        err_nickname_in_use, ERR_NICKNAMEINUSE, nick, "Nickname is already in use"
    );

    impl_chan_err!(
        /// `442 ERR_NOTONCHANNEL`
        /// `<channel> :You're not on that channel`
        err_not_on_channel, ERR_NOTONCHANNEL, "You're not on that channel"
    );

    /// `443 ERR_USERONCHANNEL`
    /// `<user> <channel> :is already on channel`
    pub fn err_user_on_channel<M: Identity + ?Sized>(channel: &Channel, member: &M) -> Self {
        Self::numeric(
            &*channel.server,
            Response::ERR_USERONCHANNEL,
            format!("{} {} :is already on channel", member.nick(), channel.name),
        )
    }

    impl_err!(
        /// `461 ERR_NEEDMOREPARAMS`
        /// `<command> :Not enough parameters`
        err_need_more_params, ERR_NEEDMOREPARAMS, command, "Not enough parameters"
    );

    impl_err!(
        /// `462 ERR_ALREADYREGISTRED`
        /// `:You may not reregister`
        err_already_registered, ERR_ALREADYREGISTRED, "You may not reregister"
    );

    impl_server_err!(
        /// `464 ERR_PASSWDMISMATCH`
        /// `:Password incorrect`
        err_passwd_mismatch, ERR_PASSWDMISMATCH, "Password incorrect"
    );

    impl_chan_err!(
        /// `473 ERR_INVITEONLYCHAN`
        /// `<channel> :Cannot join channel (+i)`
        err_invite_only_chan, ERR_INVITEONLYCHAN, "Cannot join channel (+i)"
    );

    impl_chan_err!(
        /// `475 ERR_BADCHANNELKEY`
        /// `<channel> :Cannot join channel (+k)`
        err_bad_channel_key, ERR_BADCHANNELKEY, "Cannot join channel (+k)"
    );

    impl_chan_err!(
        /// `477 ERR_NOCHANMODES`
        /// `<channel> :Channel doesn't support modes`
        err_no_chan_modes, ERR_NOCHANMODES, "Channel doesn't support modes"
    );

    impl_server_err!(
        /// `481 ERR_NOPRIVILEGES`
        /// `:Permission Denied`
        err_no_privileges, ERR_NOPRIVILEGES, "Permission Denied"
    );

    impl_server_err!(
        /// `484 ERR_RESTRICTED`
        /// `:Your connection is restricted!`
        err_restricted, ERR_RESTRICTED, "Your connection is restricted!"
    );

    impl_err!(
        /// `502 ERR_USERSDONTMATCH`
        /// `:Cannot change mode for other users`
        err_users_dont_match, ERR_USERSDONTMATCH, "Cannot change mode for other users"
    );
}
