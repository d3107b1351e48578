//! The flop: the scrambled letters dealt face-up for round 0

use crate::core::{Round, shuffle};
use rand::Rng;

/// Reshuffles allowed before giving up on avoiding a solution
pub const FLOP_ATTEMPTS: usize = 8;

/// Scramble the first word of `round`
///
/// The letters are reshuffled while they still spell one of the round's
/// words, at most [`FLOP_ATTEMPTS`] times. The last shuffle is returned even
/// if it happens to be a solution.
///
/// # Examples
/// ```
/// use holdgram::core::Round;
/// use holdgram::game::flop;
///
/// let round: Round = "{alp, lap, pal} + e".parse().unwrap();
/// let cards = flop(&round, &mut rand::rng());
///
/// let mut letters: Vec<char> = cards.chars().collect();
/// letters.sort_unstable();
/// assert_eq!(letters, ['a', 'l', 'p']);
/// ```
pub fn flop<R: Rng + ?Sized>(round: &Round, rng: &mut R) -> String {
    let Some(first) = round.words().first() else {
        return String::new();
    };

    let mut word = first.clone();
    let mut attempts = 0;

    while round.contains(&word) && attempts < FLOP_ATTEMPTS {
        let mut symbols: Vec<char> = word.chars().collect();
        shuffle(&mut symbols, rng);
        word = symbols.into_iter().collect();
        attempts += 1;
    }

    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::signature;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn flop_is_anagram_of_first_word() {
        let round: Round = "{aster, rates, stare, tares, tears} + l".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let cards = flop(&round, &mut rng);
            assert_eq!(signature(&cards), signature("aster"));
        }
    }

    #[test]
    fn flop_usually_avoids_solutions() {
        // 3 of the 6 orderings are words; 8 reshuffles make a spoiler rare
        let round: Round = "{alp, lap, pal} + e".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let spoilers = (0..200)
            .filter(|_| round.contains(&flop(&round, &mut rng)))
            .count();
        assert!(spoilers < 10, "{spoilers} spoilers out of 200");
    }

    #[test]
    fn flop_gives_up_after_budget() {
        // Every ordering is a solution; the loop must still stop
        let round: Round = "{aaa}".parse().unwrap();
        assert_eq!(flop(&round, &mut StdRng::seed_from_u64(0)), "aaa");

        let round: Round = "{ab, ba}".parse().unwrap();
        let cards = flop(&round, &mut StdRng::seed_from_u64(0));
        assert!(round.contains(&cards));
    }
}
