//! Letter cards on the table
//!
//! The flop is dealt face-up. Each round after the first adds the previous
//! round's next letter, face-down until that round is reached.

use crate::core::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub symbol: char,
    pub facedown: bool,
}

impl Card {
    /// Symbol the player can see, `None` while the card is face-down
    #[inline]
    #[must_use]
    pub const fn visible_symbol(&self) -> Option<char> {
        if self.facedown { None } else { Some(self.symbol) }
    }
}

/// All cards for `path` while `round` is being played
#[must_use]
pub fn deal(flop: &str, path: &Path, round: usize) -> Vec<Card> {
    let faceup = flop.chars().map(|symbol| Card {
        symbol,
        facedown: false,
    });

    // The final round has no next letter, so it adds no card
    let edges = path
        .rounds()
        .iter()
        .enumerate()
        .filter_map(|(index, r)| {
            r.next().map(|symbol| Card {
                symbol,
                facedown: round <= index,
            })
        });

    faceup.chain(edges).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Path {
        Path::parse("{net, ten} + s -> {nest, nets, sent, tens} + o -> {notes, onset, stone, tones}")
            .unwrap()
    }

    #[test]
    fn deal_at_first_round() {
        let cards = deal("etn", &path(), 0);
        let symbols: String = cards.iter().map(|c| c.symbol).collect();

        assert_eq!(symbols, "etnso");
        assert_eq!(cards.iter().filter(|c| c.facedown).count(), 2);
        assert_eq!(cards[3].visible_symbol(), None);
    }

    #[test]
    fn deal_turns_cards_as_rounds_advance() {
        let cards = deal("etn", &path(), 1);
        assert_eq!(cards[3].visible_symbol(), Some('s'));
        assert!(cards[4].facedown);

        let cards = deal("etn", &path(), 2);
        assert!(cards.iter().all(|c| !c.facedown));
    }

    #[test]
    fn single_round_has_only_flop() {
        let path = Path::parse("{air}").unwrap();
        assert_eq!(deal("ria", &path, 0).len(), 3);
    }
}
