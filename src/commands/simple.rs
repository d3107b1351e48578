//! Simple interactive CLI mode
//!
//! Text-based play without the TUI. Each line is the whole guess box.

use crate::game::Session;
use crate::output::{ShareStatus, TerminalClipboard, print_cards, print_hints};
use colored::Colorize;
use std::io::{self, Write};

/// A line of text mode input, decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Card(usize),
    Hint,
    Delete,
    Clear,
    Share,
    Quit,
}

impl Command {
    /// Decode one input line
    ///
    /// Lines starting with `:` are commands (`:hint`, `:share`, `:del`,
    /// `:clear`, `:quit`, or `:N` to click card N); `?` is a shortcut for a
    /// hint. Anything else is guess text.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line == "?" {
            return Self::Hint;
        }

        let Some(command) = line.strip_prefix(':') else {
            return Self::Guess(line.to_string());
        };

        match command {
            "hint" | "h" => Self::Hint,
            "share" | "s" => Self::Share,
            "del" | "d" => Self::Delete,
            "clear" | "c" => Self::Clear,
            "quit" | "q" | "exit" => Self::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Self::Card(n - 1),
                _ => Self::Guess(line.to_string()),
            },
        }
    }
}

/// Apply a decoded command to `session`; returns false when the player quits
pub fn handle(session: &mut Session, command: Command) -> bool {
    match command {
        Command::Guess(text) => session.submit_guess(&text),
        Command::Card(index) => session.click_card(index),
        Command::Hint => session.request_hint(),
        Command::Delete => session.delete_last(),
        Command::Clear => session.clear_guess(),
        Command::Share => {
            let summary = session.share();
            let status = ShareStatus::from_copy(&mut TerminalClipboard::stdout(), &summary);
            println!("\n  {summary}");
            println!("  {}", status.label().bright_black());
        }
        Command::Quit => return false,
    }
    true
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: Option<Session>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    hold'gram - Text Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let Some(mut session) = session else {
        println!("{}", "dictionary spelunking… no puzzle today.".bright_black());
        return Ok(());
    };

    println!("Type an anagram of the face-up cards to turn the next card.");
    println!("Commands: ':N' click card N, '?' hint, ':del', ':clear', ':share', ':quit'\n");

    let mut celebrated = false;

    loop {
        print_cards(&session);
        print_hints(&session);

        if session.state().won && !celebrated {
            celebrated = true;
            println!("\n{}", "═".repeat(50).bright_cyan());
            println!("{}", format!("  🎉 {}", session.caption()).bright_green().bold());
            println!("{}", "═".repeat(50).bright_cyan());
            println!("\n  ':share' to copy your result, ':quit' to leave.");
        }

        let Some(line) = get_user_input("\n>")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        if !handle(&mut session, Command::parse(&line)) {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt} ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DayIndex;
    use crate::core::Path;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("?"), Command::Hint);
        assert_eq!(Command::parse(":hint"), Command::Hint);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":3"), Command::Card(2));
        assert_eq!(Command::parse(":del"), Command::Delete);
        assert_eq!(Command::parse(" lap "), Command::Guess("lap".to_string()));
    }

    #[test]
    fn parse_unknown_command_is_guess_text() {
        assert_eq!(Command::parse(":0"), Command::Guess(":0".to_string()));
        assert_eq!(Command::parse(":zzz"), Command::Guess(":zzz".to_string()));
    }

    #[test]
    fn handle_drives_session() {
        let path = Path::parse("{dog, god} + s -> {dogs, gods}").unwrap();
        let mut session =
            Session::deal(4, path, &DayIndex::new(0, 0), &mut StdRng::seed_from_u64(2));

        assert!(handle(&mut session, Command::parse("?")));
        assert_eq!(session.state().hint, 1);

        assert!(handle(&mut session, Command::parse("GOD")));
        assert_eq!(session.state().round, 1);

        assert!(handle(&mut session, Command::parse("dogs")));
        assert!(session.state().won);

        assert!(!handle(&mut session, Command::Quit));
    }
}
