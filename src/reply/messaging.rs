//! Command-token replies relayed to other clients.
//!
//! These are composed in full at construction; every recipient gets the same line.

use super::Reply;
use crate::identity::Identity;
use crate::state::{Channel, Server};
use nomad_proto::Verb;

impl Reply {
    /// `:<source> PRIVMSG <target> :<message>`
    pub fn rpl_privmsg<S, T>(source: &S, target: &T, message: &str) -> Self
    where
        S: Identity + ?Sized,
        T: Identity + ?Sized,
    {
        Self::immediate(
            source,
            Verb::Privmsg,
            format_args!("{} :{}", target.nick(), message),
        )
    }

    /// `:<source> NICK <new_nick>`
    ///
    /// `source` must be the identity from before the rename.
    pub fn rpl_nick<S: Identity + ?Sized>(source: &S, new_nick: &str) -> Self {
        Self::immediate(source, Verb::Nick, new_nick)
    }

    /// `:<source> PRIVMSG <channel> :<message>`
    pub fn rpl_privmsg_channel<S: Identity + ?Sized>(
        channel: &Channel,
        source: &S,
        message: &str,
    ) -> Self {
        Self::immediate(
            source,
            Verb::Privmsg,
            format_args!("{} :{}", channel.name, message),
        )
    }

    /// `:<user> JOIN <channel>`
    pub fn rpl_join<U: Identity + ?Sized>(channel: &Channel, user: &U) -> Self {
        Self::immediate(user, Verb::Join, &channel.name)
    }

    /// `:<user> PART <channel> :<message>`
    pub fn rpl_part<U: Identity + ?Sized>(channel: &Channel, user: &U, message: &str) -> Self {
        Self::immediate(
            user,
            Verb::Part,
            format_args!("{} :{}", channel.name, message),
        )
    }

    /// `:<server> PONG <server>`
    pub fn rpl_pong(server: &Server) -> Self {
        Self::immediate(server, Verb::Pong, server.id())
    }

    /// `:<client> QUIT :<message>`
    pub fn rpl_quit<C: Identity + ?Sized>(client: &C, message: &str) -> Self {
        Self::immediate(client, Verb::Quit, format_args!(":{message}"))
    }

    /// `:<inviter> INVITE <invitee> <channel>`
    pub fn rpl_invite_msg<I, T>(channel: &Channel, inviter: &I, invitee: &T) -> Self
    where
        I: Identity + ?Sized,
        T: Identity + ?Sized,
    {
        Self::immediate(
            inviter,
            Verb::Invite,
            format_args!("{} {}", invitee.nick(), channel.name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdentityView;
    use crate::state::Client;
    use std::sync::Arc;

    fn server() -> Arc<Server> {
        Arc::new(Server::new("irc.local"))
    }

    fn bob() -> Client {
        Client::new("bob", "b", "h")
    }

    fn someone() -> Client {
        Client::new("x", "x", "elsewhere")
    }

    #[test]
    fn source_is_the_supplied_identity() {
        let chan = Channel::new("#go", server());
        let alice = Client::new("alice", "a", "h");
        let srv = server();

        let from_bob = [
            Reply::rpl_privmsg(&bob(), &alice, "hi"),
            Reply::rpl_nick(&bob(), "robert"),
            Reply::rpl_privmsg_channel(&chan, &bob(), "hi"),
            Reply::rpl_join(&chan, &bob()),
            Reply::rpl_part(&chan, &bob(), "bye"),
            Reply::rpl_quit(&bob(), "bye"),
            Reply::rpl_invite_msg(&chan, &bob(), &alice),
        ];
        for reply in &from_bob {
            assert_eq!(reply.source(), &IdentityView::of(&bob()), "{reply}");
            assert!(!reply.is_numeric());
        }

        assert_eq!(Reply::rpl_pong(&srv).source(), &IdentityView::of(&*srv));
    }

    #[test]
    fn join_is_recipient_independent() {
        let chan = Channel::new("#go", server());
        let reply = Reply::rpl_join(&chan, &bob());
        assert_eq!(reply.render(&someone()), ":bob!b@h JOIN #go");
        assert_eq!(reply.render(&bob()), ":bob!b@h JOIN #go");
        assert_eq!(reply.source(), &IdentityView::of(&bob()));
    }

    #[test]
    fn privmsg_to_user_uses_target_nick() {
        let alice = Client::new("alice", "a", "h");
        let reply = Reply::rpl_privmsg(&bob(), &alice, "hello there");
        assert_eq!(reply.render(&alice), ":bob!b@h PRIVMSG alice :hello there");
        assert_eq!(reply.source(), &IdentityView::of(&bob()));
    }

    #[test]
    fn privmsg_to_channel() {
        let chan = Channel::new("#rust", server());
        let reply = Reply::rpl_privmsg_channel(&chan, &bob(), "hi all");
        assert_eq!(reply.render(&someone()), ":bob!b@h PRIVMSG #rust :hi all");
    }

    #[test]
    fn nick_change_uses_old_prefix() {
        let reply = Reply::rpl_nick(&bob(), "robert");
        assert_eq!(reply.render(&someone()), ":bob!b@h NICK robert");
    }

    #[test]
    fn part_and_quit_carry_trailing_text() {
        let chan = Channel::new("#go", server());
        let part = Reply::rpl_part(&chan, &bob(), "see you later");
        assert_eq!(part.render(&someone()), ":bob!b@h PART #go :see you later");

        let quit = Reply::rpl_quit(&bob(), "Client Quit");
        assert_eq!(quit.render(&someone()), ":bob!b@h QUIT :Client Quit");
        assert_eq!(quit.payload(), ":Client Quit");
    }

    #[test]
    fn pong_echoes_server_name() {
        let srv = server();
        let reply = Reply::rpl_pong(&srv);
        assert_eq!(reply.render(&someone()), ":irc.local PONG irc.local");
        assert_eq!(reply.source(), &IdentityView::of(&*srv));
    }

    #[test]
    fn invite_names_invitee_then_channel() {
        let chan = Channel::new("#go", server());
        let alice = Client::new("alice", "a", "h");
        let reply = Reply::rpl_invite_msg(&chan, &bob(), &alice);
        assert_eq!(reply.render(&alice), ":bob!b@h INVITE alice #go");
    }
}
