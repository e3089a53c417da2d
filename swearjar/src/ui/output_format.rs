//! Formatting of scan results for the terminal.
//!
//! Colour is applied only when the destination is a terminal; callers pass
//! `supports_color` so output written to pipes and files stays plain.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use swearjar_core::{OwnedMatch, Scorecard};

pub fn print_matches<W: Write>(writer: &mut W, matches: &[OwnedMatch], supports_color: bool) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(writer, "No profanity found.");
    }
    for m in matches {
        let tags = m.types.join(", ");
        if supports_color {
            writeln!(
                writer,
                "{:>6}  {}  [{}]",
                m.offset,
                m.word.red().bold(),
                tags.yellow()
            )?;
        } else {
            writeln!(writer, "{:>6}  {}  [{}]", m.offset, m.word, tags)?;
        }
    }
    Ok(())
}

pub fn print_scorecard<W: Write>(writer: &mut W, scorecard: &Scorecard, supports_color: bool) -> io::Result<()> {
    if scorecard.is_empty() {
        return writeln!(writer, "No profanity found.");
    }
    for (tag, count) in scorecard {
        if supports_color {
            writeln!(writer, "{:<16} {}", tag.yellow(), count.bold())?;
        } else {
            writeln!(writer, "{:<16} {}", tag, count)?;
        }
    }
    Ok(())
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "error:".red().bold(), msg)
    } else {
        writeln!(writer, "error: {}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swearjar_core::MatchSource;

    #[test]
    fn test_print_matches_plain() {
        let matches = vec![OwnedMatch {
            word: "fuck".to_string(),
            offset: 4,
            len: 4,
            types: vec!["sexual".to_string()],
            source: MatchSource::Simple,
        }];
        let mut out = Vec::new();
        print_matches(&mut out, &matches, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "     4  fuck  [sexual]\n");
    }

    #[test]
    fn test_print_scorecard_empty() {
        let mut out = Vec::new();
        print_scorecard(&mut out, &Scorecard::new(), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No profanity found.\n");
    }

    #[test]
    fn test_print_scorecard_plain_is_sorted() {
        let mut card = Scorecard::new();
        card.insert("sexual".to_string(), 2);
        card.insert("insult".to_string(), 1);
        let mut out = Vec::new();
        print_scorecard(&mut out, &card, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "insult           1\nsexual           2\n"
        );
    }
}
