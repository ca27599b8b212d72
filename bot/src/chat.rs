use std::io::{BufRead, Write};

use anyhow::Result;
use minebot_core::PlayerId;
use minebot_protocol::{Reply, ReplyKind};

use crate::handler::Handler;

/// How replies are written back to the chat.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

/// One inbound chat event, as read from a line of input.
///
/// Lines look like `[@<player>] <event>` where the event is either a
/// command (`/start`, `/flag 2 3`) or `tap <callback data>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    Text(PlayerId, &'a str),
    Tap(PlayerId, &'a str),
}

impl<'a> Event<'a> {
    pub fn parse(line: &'a str, default_player: PlayerId) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (player, rest) = match line.strip_prefix('@') {
            Some(tagged) => {
                let (id, rest) = tagged.split_once(char::is_whitespace).unwrap_or((tagged, ""));
                match id.parse() {
                    Ok(id) => (PlayerId(id), rest.trim_start()),
                    Err(_) => (default_player, line),
                }
            }
            None => (default_player, line),
        };

        Some(match rest.strip_prefix("tap ") {
            Some(data) => Self::Tap(player, data.trim()),
            None => Self::Text(player, rest),
        })
    }
}

/// Reads chat events until end of input, answering each one.
pub fn run(
    handler: &Handler,
    default_player: PlayerId,
    output: Output,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(event) = Event::parse(&line, default_player) else {
            continue;
        };

        let (player, replies) = match event {
            Event::Text(player, text) => (player, handler.handle_text(player, text)),
            Event::Tap(player, data) => (player, handler.handle_callback(player, data)),
        };

        for reply in replies {
            match output {
                Output::Text => write_text(&mut out, player, &reply)?,
                Output::Json => writeln!(out, "{}", reply.to_json()?)?,
            }
        }
        out.flush()?;
    }
    Ok(())
}

fn write_text(out: &mut impl Write, player: PlayerId, reply: &Reply) -> Result<()> {
    let label = match reply.kind {
        ReplyKind::Message => "message",
        ReplyKind::Edit => "edit",
        ReplyKind::Toast => "toast",
    };
    if reply.kind == ReplyKind::Toast && reply.text.is_empty() {
        return Ok(());
    }
    writeln!(out, "[{player} {label}] {}", reply.text)?;

    if let Some(keyboard) = &reply.keyboard {
        let width = keyboard.rows.first().map_or(0, Vec::len);
        write!(out, "   ")?;
        for y in 0..width {
            write!(out, "{y:>3}")?;
        }
        writeln!(out)?;
        for (x, row) in keyboard.rows.iter().enumerate() {
            write!(out, "{x:>3}")?;
            for button in row {
                // emoji glyphs are two columns wide, digits and blanks one
                let pad = if button.text.is_ascii() { "  " } else { " " };
                write!(out, "{pad}{}", button.text)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use minebot_core::{GameConfig, SessionRegistry};
    use std::sync::Arc;

    const DEFAULT: PlayerId = PlayerId(1);

    #[test]
    fn parses_player_tags_and_taps() {
        assert_eq!(
            Event::parse("@7 /start", DEFAULT),
            Some(Event::Text(PlayerId(7), "/start"))
        );
        assert_eq!(
            Event::parse("tap minesweeper:1:2", DEFAULT),
            Some(Event::Tap(DEFAULT, "minesweeper:1:2"))
        );
        assert_eq!(
            Event::parse("@-3 tap noop", DEFAULT),
            Some(Event::Tap(PlayerId(-3), "noop"))
        );
        assert_eq!(
            Event::parse("@bob /help", DEFAULT),
            Some(Event::Text(DEFAULT, "@bob /help"))
        );
        assert_eq!(Event::parse("   ", DEFAULT), None);
    }

    fn run_script(script: &str, output: Output) -> String {
        let registry = SessionRegistry::with_seed(GameConfig::default(), 3);
        let handler = Handler::new(Arc::new(registry));
        let mut out = Vec::new();
        run(&handler, DEFAULT, output, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_output_draws_the_board() {
        let out = run_script("/start\n/flag 0 0\n", Output::Text);

        assert!(out.starts_with("[1 message] Here is your board."));
        assert!(out.contains("[1 message] Flag placed on cell (0, 0)."));
        assert!(out.contains("🚩"));
        // eight rows per drawn board
        assert_eq!(out.lines().filter(|line| line.contains('⬜')).count(), 16);
    }

    #[test]
    fn json_output_is_one_reply_per_line() {
        let out = run_script("/help\n@2 /start\n", Output::Json);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.starts_with(r#"{"kind":"message""#)));
        assert!(lines[1].contains("minesweeper:7:7"));
    }
}
