//! Full IRC ⇄ Discord message flows

use relay_babel::relay::{
    author_prefix, discord_to_irc, irc_lines, irc_to_discord, rewrite_irc_mentions, ChannelMap,
    DiscordMessage, IgnoreList, IrcMessageKind, MemoryDirectory, RelayOptions, ReplyTarget,
};

fn directory() -> MemoryDirectory {
    MemoryDirectory::new()
        .with_user(81, "Grace")
        .with_role(90, "ops", Some(0x0000FF))
        .with_channel(7, "random")
}

#[test]
fn test_irc_message_reaches_discord() {
    let options = RelayOptions::default();
    let channels: ChannelMap = [("#relay", 555)].into_iter().collect();
    let ignored = IgnoreList::parse("ChanServ, /^bot/");

    let incoming = [
        ("heidi", "grace: \x02look\x02 at this"),
        ("ChanServ", "mode change"),
        ("BotServ", "beep"),
    ];

    let relayed: Vec<String> = incoming
        .iter()
        .filter(|(nick, _)| !ignored.is_ignored(nick))
        .map(|(nick, text)| {
            let message = irc_to_discord(nick, text, IrcMessageKind::Message, &options);
            rewrite_irc_mentions(&message, &directory(), options.escape_mass_mentions)
        })
        .collect();

    assert_eq!(channels.discord_channel("#RELAY"), Some(555));
    assert_eq!(relayed, vec!["<heidi> <@81>: **look** at this"]);
}

#[test]
fn test_discord_message_reaches_irc() {
    let options = RelayOptions {
        tint_roles: true,
        ..RelayOptions::default()
    };
    let message = DiscordMessage::new("hey <@&90>, *check* <#7>\n\nsecond line")
        .with_attachment("https://cdn.example/log.txt");

    let text = discord_to_irc(&message, &directory(), &options);
    let author = author_prefix("ivan", Some(ReplyTarget::User("judy")), false);
    let lines = irc_lines(&author, &text, options.max_message_length);

    assert_eq!(
        lines,
        vec![
            "<ivan, replying to judy> [1/3] hey \x0305@ops\x03, \x1Dcheck\x1D #random",
            "<ivan, replying to judy> [2/3] second line",
            "<ivan, replying to judy> [3/3] https://cdn.example/log.txt",
        ]
    );
}

#[test]
fn test_edited_reply_to_relayed_message() {
    let reply = ReplyTarget::RelayBot {
        content: "<heidi> original text",
    };
    let author = author_prefix("ivan", Some(reply), true);
    let lines = irc_lines(&author, "fixed typo", 400);
    assert_eq!(lines, vec!["<ivan, replying to heidi> (edited) fixed typo"]);
}

#[test]
fn test_long_discord_message_is_chunked() {
    let author = author_prefix("ivan", None, false);
    let text = "word ".repeat(100);
    let lines = irc_lines(&author, &text, 400);

    assert_eq!(lines.len(), 2);
    // 400 - "<ivan>".len() - 5 = 389 characters in the first chunk
    assert_eq!(lines[0].len(), "<ivan> [1/2] ".len() + 389);
    assert_eq!(lines[1].len(), "<ivan> [2/2] ".len() + 111);
    assert!(lines[0].starts_with("<ivan> [1/2] word"));
}
