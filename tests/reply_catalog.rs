//! Wire-format checks for the reply catalog against literal protocol lines.

use nomad_ircd::{Channel, Client, Identity, IdentityView, Reply, Server};
use nomad_proto::Response;
use std::sync::Arc;

fn irc_local() -> Arc<Server> {
    Arc::new(Server::new("irc.local"))
}

#[test]
fn test_welcome_banner_literal() {
    let server = irc_local();
    let alice = Client::new("alice", "a", "h");
    let reply = Reply::rpl_welcome(&*server, &alice);
    assert_eq!(
        reply.render(&alice),
        ":irc.local 001 alice :Welcome to the Internet Relay Network alice!a@h"
    );
}

#[test]
fn test_join_literal_for_any_recipient() {
    let chan = Channel::new("#go", irc_local());
    let bob = IdentityView::new("bob!b@h", "bob!b@h", "bob");
    let reply = Reply::rpl_join(&chan, &bob);
    for nick in ["alice", "bob", "carol"] {
        let recipient = IdentityView::new(format!("{nick}!x@y"), "", nick);
        assert_eq!(reply.render(&recipient), ":bob!b@h JOIN #go");
    }
}

#[test]
fn test_numeric_line_shape() {
    let server = irc_local();
    let replies = [
        Reply::rpl_your_host(&server),
        Reply::rpl_created(&server),
        Reply::rpl_my_info(&server),
        Reply::rpl_youre_oper(&server),
        Reply::err_no_privileges(&server),
        Reply::err_need_more_params(&*server, "JOIN"),
    ];
    let recipient = Client::new("nick", "u", "h");

    for reply in &replies {
        let Reply::Numeric {
            response, payload, ..
        } = reply
        else {
            panic!("expected numeric: {reply}");
        };
        let expected = format!(
            ":{} {:03} {} {}",
            server.id(),
            response.code(),
            Identity::nick(&recipient),
            payload
        );
        assert_eq!(reply.render(&recipient), expected);
    }
}

#[test]
fn test_codes_are_three_digits() {
    assert_eq!(Response::RPL_WELCOME.to_string(), "001");
    assert_eq!(Response::ERR_NEEDMOREPARAMS.to_string(), "461");
}

#[test]
fn test_names_reply_payload() {
    let mut chan = Channel::new("#chan", irc_local());
    for nick in ["a", "b", "c"] {
        chan.add_member(nick);
    }
    assert_eq!(Reply::rpl_nam_reply(&chan).payload(), "= #chan :a b c");
}

#[test]
fn test_nickname_in_use_payload() {
    let reply = Reply::err_nickname_in_use(&*irc_local(), "foo");
    assert_eq!(reply.payload(), "foo :Nickname is already in use");
}

#[test]
fn test_need_more_params_literal() {
    let server = irc_local();
    let reply = Reply::err_need_more_params(&*server, "PRIVMSG");
    let x = IdentityView::new("x!x@x", "x!x@x", "x");
    assert_eq!(
        reply.render(&x),
        format!(":{} 461 x PRIVMSG :Not enough parameters", server.id())
    );
}

#[test]
fn test_rendering_from_many_threads() {
    let server = irc_local();
    let reply = Arc::new(Reply::err_no_such_channel(&*server, "#void"));

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let reply = Arc::clone(&reply);
            std::thread::spawn(move || {
                let me = IdentityView::new("", "", format!("user{n}"));
                (n, reply.render(&me))
            })
        })
        .collect();

    for handle in handles {
        let (n, line) = handle.join().unwrap();
        assert_eq!(line, format!(":irc.local 403 user{n} #void :No such channel"));
    }
    assert_eq!(reply.payload(), "#void :No such channel");
}
