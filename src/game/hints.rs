//! Progressive hints for the current round
//!
//! Hint text is always derived from the round being played, never cached.

use crate::core::Round;

/// Number of hints available for every round
pub const HINT_COUNT: usize = 7;

/// All hints for `round`, least to most revealing
#[must_use]
pub fn hints(round: &Round) -> [String; HINT_COUNT] {
    let words = round.words();
    let first_letters = letters(words, |w| w.chars().next());
    let last_letters = letters(words, |w| w.chars().next_back());

    [
        format!("we think there are {} answer(s)", words.len()),
        format!("any of these first letters will do: {first_letters}"),
        format!("any of these last letters will do: {last_letters}"),
        "spill the beans?".to_string(),
        "alright.".to_string(),
        "if any aren't fun, please leave feedback (bit.ly/texasholdgram)!".to_string(),
        format!("the beans: {}", words.join(", ")),
    ]
}

/// The first `level` hints for `round`
#[must_use]
pub fn revealed(round: &Round, level: usize) -> Vec<String> {
    hints(round).into_iter().take(level).collect()
}

fn letters(words: &[String], pick: impl Fn(&str) -> Option<char>) -> String {
    words
        .iter()
        .filter_map(|w| pick(w.as_str()))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round() -> Round {
        "{leap, pale, peal, plea}".parse().unwrap()
    }

    #[test]
    fn hints_describe_round() {
        let all = hints(&round());
        assert_eq!(all[0], "we think there are 4 answer(s)");
        assert_eq!(all[1], "any of these first letters will do: l, p, p, p");
        assert_eq!(all[2], "any of these last letters will do: p, e, l, a");
        assert_eq!(
            all[5],
            "if any aren't fun, please leave feedback (bit.ly/texasholdgram)!"
        );
        assert_eq!(all[6], "the beans: leap, pale, peal, plea");
    }

    #[test]
    fn revealed_takes_prefix() {
        assert!(revealed(&round(), 0).is_empty());
        assert_eq!(revealed(&round(), 2).len(), 2);
        assert_eq!(revealed(&round(), HINT_COUNT + 5).len(), HINT_COUNT);
    }
}
