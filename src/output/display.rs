//! Display functions for text mode and reports

use crate::core::PathError;
use crate::game::{Card, Session};
use colored::Colorize;

/// Plain card row, e.g. `[T] [E] [N] [ ] [ ]`
#[must_use]
pub fn card_row(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| match card.visible_symbol() {
            Some(symbol) => format!("[{}]", symbol.to_uppercase()),
            None => "[ ]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Card positions under the row, 1-based, as typed in text mode
#[must_use]
pub fn card_numbers(count: usize) -> String {
    (1..=count)
        .map(|i| format!("{i:^3}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the caption, the cards and the guess box
pub fn print_cards(session: &Session) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        "hold'gram #{}  {}",
        session.identifier().to_string().bright_yellow().bold(),
        session.caption().bright_cyan().bold()
    );
    println!("{}", "─".repeat(50).cyan());

    let cards = session.cards();
    let row = cards
        .iter()
        .map(|card| match card.visible_symbol() {
            Some(symbol) => format!("[{}]", symbol.to_uppercase())
                .bright_white()
                .bold()
                .to_string(),
            None => "[ ]".on_red().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    println!("\n  {row}");
    println!("  {}", card_numbers(cards.len()).bright_black());

    let state = session.state();
    if state.guess.is_empty() {
        println!("\n  guess: {}", state.placeholder.bright_black().italic());
    } else {
        println!("\n  guess: {}", state.guess.bright_white().bold());
    }
}

/// Print the hints revealed so far
pub fn print_hints(session: &Session) {
    println!("\n  {}", session.hint_label().bright_black());
    for (i, hint) in session.hints().iter().enumerate() {
        println!("    {}. {}", (i + 1).to_string().bright_black(), hint.yellow());
    }
}

/// Print today's puzzle without playing it
pub fn print_daily(session: &Session, spoil: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HOLD'GRAM".bright_cyan().bold(),
        format!("#{}", session.identifier()).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🃏 {}", card_row(&session.cards()));
    println!("   Rounds:     {}", session.path().len());
    println!("   Face-down:  {}", session.facedown());
    println!("   Share:      {}", session.share());

    if spoil {
        println!("\n📜 {}", "Path:".bright_cyan().bold());
        for (i, round) in session.path().rounds().iter().enumerate() {
            let next = round
                .next()
                .map(|c| format!(" + {}", c.to_string().bright_yellow()))
                .unwrap_or_default();
            println!("   {i}: {}{next}", round.words().join(", ").green());
        }
    }
}

/// Print catalog lines that failed to parse
pub fn print_malformed(total: usize, malformed: &[(usize, PathError)]) {
    if malformed.is_empty() {
        println!(
            "{}",
            format!("✅ All {total} catalog lines parse").green().bold()
        );
        return;
    }

    for (line, err) in malformed {
        println!("  {} {}", format!("line {line}:").red(), err);
    }
    println!(
        "{}",
        format!("❌ {} of {total} catalog lines are malformed", malformed.len())
            .red()
            .bold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_row_hides_facedown() {
        let cards = [
            Card {
                symbol: 'a',
                facedown: false,
            },
            Card {
                symbol: 'e',
                facedown: true,
            },
        ];
        assert_eq!(card_row(&cards), "[A] [ ]");
    }

    #[test]
    fn card_row_empty() {
        assert_eq!(card_row(&[]), "");
    }

    #[test]
    fn card_numbers_align_with_cards() {
        assert_eq!(card_numbers(3), " 1   2   3 ");
        assert_eq!(card_numbers(3).len(), card_row(&[Card { symbol: 'a', facedown: false }; 3]).len());
    }
}
