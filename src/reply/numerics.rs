//! Informational numerics: registration burst, modes, topic and names.

use super::Reply;
use crate::identity::Identity;
use crate::state::{Channel, Client, Server, UserModes};
use nomad_proto::Response;

/// RFC 1123 date layout, always in UTC.
const RFC1123: &str = "%a, %d %b %Y %H:%M:%S UTC";

impl Reply {
    /// `001 RPL_WELCOME`
    /// `:Welcome to the Internet Relay Network <nick!user@host>`
    pub fn rpl_welcome<S: Identity + ?Sized>(source: &S, client: &Client) -> Self {
        Self::numeric(
            source,
            Response::RPL_WELCOME,
            format!(":Welcome to the Internet Relay Network {}", client.id()),
        )
    }

    /// `002 RPL_YOURHOST`
    /// `:Your host is <servername>, running version <ver>`
    pub fn rpl_your_host(server: &Server) -> Self {
        Self::numeric(
            server,
            Response::RPL_YOURHOST,
            format!(
                ":Your host is {}, running version {}",
                server.name, server.version
            ),
        )
    }

    /// `003 RPL_CREATED`
    /// `:This server was created <date>`
    pub fn rpl_created(server: &Server) -> Self {
        Self::numeric(
            server,
            Response::RPL_CREATED,
            format!(
                ":This server was created {}",
                server.created.format(RFC1123)
            ),
        )
    }

    /// `004 RPL_MYINFO`
    /// `<servername> <version> <available user modes> <available channel modes>`
    pub fn rpl_my_info(server: &Server) -> Self {
        Self::numeric(
            server,
            Response::RPL_MYINFO,
            format!(
                "{} {} {} {}",
                server.name,
                server.version,
                UserModes::SUPPORTED,
                Channel::SUPPORTED_MODES
            ),
        )
    }

    /// `221 RPL_UMODEIS`
    /// `<user mode string>`
    pub fn rpl_umode_is(server: &Server, client: &Client) -> Self {
        Self::numeric(server, Response::RPL_UMODEIS, client.umode_string())
    }

    /// `331 RPL_NOTOPIC`
    pub fn rpl_no_topic(channel: &Channel) -> Self {
        Self::numeric(
            &*channel.server,
            Response::RPL_NOTOPIC,
            format!("{} :No topic is set", channel.name),
        )
    }

    /// `332 RPL_TOPIC`
    ///
    /// Callers check `channel.topic` first and send [`Reply::rpl_no_topic`] when unset.
    pub fn rpl_topic(channel: &Channel) -> Self {
        Self::numeric(
            &*channel.server,
            Response::RPL_TOPIC,
            format!(
                "{} :{}",
                channel.name,
                channel.topic.as_deref().unwrap_or_default()
            ),
        )
    }

    /// `341 RPL_INVITING`
    /// `<channel> <nick>`
    pub fn rpl_inviting_msg<T: Identity + ?Sized>(channel: &Channel, invitee: &T) -> Self {
        Self::numeric(
            &*channel.server,
            Response::RPL_INVITING,
            format!("{} {}", channel.name, invitee.nick()),
        )
    }

    /// `353 RPL_NAMREPLY`
    /// `= <channel> :<nick> <nick> ...`
    ///
    /// Emits every member on one line; long channels can exceed the 512 byte
    /// line limit.
    // TODO: split into several 353 lines once the writer enforces a max line length.
    pub fn rpl_nam_reply(channel: &Channel) -> Self {
        Self::numeric(
            &*channel.server,
            Response::RPL_NAMREPLY,
            format!("= {} :{}", channel.name, channel.nicks().join(" ")),
        )
    }

    /// `366 RPL_ENDOFNAMES`
    /// `<channel> :End of NAMES list`
    pub fn rpl_end_of_names<S: Identity + ?Sized>(source: &S, channel: &str) -> Self {
        Self::numeric(
            source,
            Response::RPL_ENDOFNAMES,
            format!("{channel} :End of NAMES list"),
        )
    }

    /// `381 RPL_YOUREOPER`
    pub fn rpl_youre_oper(server: &Server) -> Self {
        Self::numeric(server, Response::RPL_YOUREOPER, ":You are now an IRC operator")
    }
}
