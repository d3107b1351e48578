//! Round-progression state machine
//!
//! [`step`] is a pure transition: it takes the current [`GameState`] and one
//! player [`Event`] and returns the next state. Nothing else mutates a game.

use super::hints::HINT_COUNT;
use crate::core::Path;
use log::{debug, trace};

/// Placeholder shown in the guess box before any round is solved
pub const INITIAL_PLACEHOLDER: &str = "anagram?";

/// Everything that changes while a path is being played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Index of the round being solved; never decreases
    pub round: usize,
    /// Text currently in the guess box
    pub guess: String,
    /// Set once the final round is solved; terminal
    pub won: bool,
    /// Number of hints revealed for the current round
    pub hint: usize,
    /// Last accepted word, shown greyed out in the empty guess box
    pub placeholder: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            round: 0,
            guess: String::new(),
            won: false,
            hint: 0,
            placeholder: INITIAL_PLACEHOLDER.to_string(),
        }
    }
}

/// Player input, already decoded by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Full, untruncated contents of the guess box after a keystroke
    Input(String),
    /// A card was clicked; `None` for a face-down card, which is ignored
    Symbol(Option<char>),
    /// Reveal one more hint
    Hint,
    /// Drop the last letter of the guess
    Delete,
    /// Empty the guess
    Clear,
}

/// Apply `event` to `state`
///
/// Once the game is won only [`Event::Hint`] has any effect.
///
/// # Examples
/// ```
/// use holdgram::core::Path;
/// use holdgram::game::{Event, GameState, step};
///
/// let path = Path::parse("{alp, lap, pal} + e -> {leap, pale, peal, plea}").unwrap();
///
/// let state = step(&path, GameState::default(), Event::Input("LAP".to_string()));
/// assert_eq!(state.round, 1);
/// assert_eq!(state.placeholder, "lap");
///
/// let state = step(&path, state, Event::Input("peal".to_string()));
/// assert!(state.won);
/// ```
#[must_use]
pub fn step(path: &Path, mut state: GameState, event: Event) -> GameState {
    if state.won && event != Event::Hint {
        trace!("ignoring {event:?} after victory");
        return state;
    }

    let expected = path.solution_length(state.round);

    match event {
        Event::Input(raw) => {
            let guess = keep_trailing(&raw.to_lowercase(), expected);
            check_guess(path, state, guess)
        }
        Event::Symbol(None) => state,
        Event::Symbol(Some(symbol)) => {
            let guess = if state.guess.chars().count() < expected {
                let mut guess = std::mem::take(&mut state.guess);
                guess.push(symbol);
                guess
            } else {
                // Overflow starts the guess over from this card
                symbol.to_string()
            };
            check_guess(path, state, guess)
        }
        Event::Hint => {
            state.hint = (state.hint + 1).min(HINT_COUNT);
            state
        }
        Event::Delete => {
            state.guess.pop();
            state
        }
        Event::Clear => {
            state.guess.clear();
            state
        }
    }
}

/// Accept `guess` if it solves the current round, otherwise just display it
fn check_guess(path: &Path, mut state: GameState, guess: String) -> GameState {
    let correct_length = guess.chars().count() == path.solution_length(state.round);
    let in_dictionary = path
        .round(state.round)
        .is_some_and(|round| round.contains(&guess));

    if !(correct_length && in_dictionary) {
        state.guess = guess;
        return state;
    }

    if state.round == path.last_index() {
        debug!("'{guess}' solves the final round {}", state.round);
        state.won = true;
    } else {
        debug!("'{guess}' solves round {}", state.round);
        state.round += 1;
        state.hint = 0;
    }

    state.placeholder = guess;
    state.guess = String::new();
    state
}

/// Last `n` characters of `text`
fn keep_trailing(text: &str, n: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leap() -> Path {
        Path::parse("{alp, lap, pal} + e -> {leap, pale, peal, plea}").unwrap()
    }

    fn input(text: &str) -> Event {
        Event::Input(text.to_string())
    }

    fn run(path: &Path, events: impl IntoIterator<Item = Event>) -> GameState {
        events
            .into_iter()
            .fold(GameState::default(), |state, event| step(path, state, event))
    }

    #[test]
    fn correct_guess_advances_round() {
        let path = leap();
        let before = GameState {
            hint: 3,
            ..GameState::default()
        };

        let state = step(&path, before, input("lap"));

        assert_eq!(state.round, 1);
        assert_eq!(state.guess, "");
        assert_eq!(state.hint, 0);
        assert_eq!(state.placeholder, "lap");
        assert!(!state.won);
    }

    #[test]
    fn final_round_guess_wins() {
        let path = leap();
        let state = run(&path, [input("lap"), input("peal")]);

        assert!(state.won);
        assert_eq!(state.round, 1);
        assert_eq!(state.guess, "");
        assert_eq!(state.placeholder, "peal");
    }

    #[test]
    fn unknown_word_changes_only_guess() {
        let path = leap();
        let state = step(&path, GameState::default(), input("xyz"));

        assert_eq!(
            state,
            GameState {
                guess: "xyz".to_string(),
                ..GameState::default()
            }
        );
    }

    #[test]
    fn input_is_lowercased_and_truncated_from_front() {
        let path = leap();

        let state = step(&path, GameState::default(), input("QX"));
        assert_eq!(state.guess, "qx");

        // Only the trailing three letters count in round 0
        let state = step(&path, GameState::default(), input("zzPAL"));
        assert_eq!(state.round, 1);
        assert_eq!(state.placeholder, "pal");
    }

    #[test]
    fn word_from_later_round_is_rejected() {
        let path = leap();
        let state = step(&path, GameState::default(), input("leap"));
        assert_eq!(state.round, 0);
        assert_eq!(state.guess, "eap");
    }

    #[test]
    fn symbols_build_a_guess() {
        let path = leap();
        let state = run(
            &path,
            [
                Event::Symbol(Some('p')),
                Event::Symbol(Some('a')),
                Event::Symbol(Some('l')),
            ],
        );
        assert_eq!(state.round, 1);
        assert_eq!(state.placeholder, "pal");
    }

    #[test]
    fn symbol_overflow_starts_over() {
        let path = leap();
        let state = run(
            &path,
            [
                Event::Symbol(Some('x')),
                Event::Symbol(Some('y')),
                Event::Symbol(Some('z')),
                Event::Symbol(Some('l')),
            ],
        );
        assert_eq!(state.guess, "l");
        assert_eq!(state.round, 0);
    }

    #[test]
    fn facedown_symbol_is_ignored() {
        let path = leap();
        let state = run(&path, [input("al"), Event::Symbol(None)]);
        assert_eq!(state.guess, "al");
    }

    #[test]
    fn hint_saturates() {
        let path = leap();
        let state = run(&path, std::iter::repeat_n(Event::Hint, HINT_COUNT + 3));
        assert_eq!(state.hint, HINT_COUNT);
    }

    #[test]
    fn hint_resets_on_advance() {
        let path = leap();
        let state = run(&path, [Event::Hint, Event::Hint, input("alp")]);
        assert_eq!(state.hint, 0);
        assert_eq!(state.round, 1);
    }

    #[test]
    fn delete_and_clear_edit_guess() {
        let path = leap();
        let state = run(&path, [input("la"), Event::Delete]);
        assert_eq!(state.guess, "l");

        let state = run(&path, [input("la"), Event::Clear]);
        assert_eq!(state.guess, "");

        let state = run(&path, [Event::Delete]);
        assert_eq!(state.guess, "");
    }

    #[test]
    fn victory_is_terminal() {
        let path = leap();
        let won = run(&path, [input("lap"), input("plea")]);

        for event in [
            input("pale"),
            input("xyz"),
            Event::Symbol(Some('p')),
            Event::Delete,
            Event::Clear,
        ] {
            let after = step(&path, won.clone(), event);
            assert_eq!(after, won);
        }

        // Hints stay available
        let after = step(&path, won.clone(), Event::Hint);
        assert_eq!(after.hint, won.hint + 1);
        assert!(after.won);
    }

    #[test]
    fn round_never_exceeds_last_index() {
        let path = leap();
        let words = ["alp", "leap", "pale", "lap", "plea", "peal"];
        let state = run(&path, words.iter().map(|w| input(w)));
        assert!(state.round <= path.last_index());
        assert!(state.won);
    }

    #[test]
    fn single_round_path() {
        let path = Path::parse("{air}").unwrap();
        let state = step(&path, GameState::default(), input("air"));
        assert!(state.won);
        assert_eq!(state.round, 0);
    }
}
