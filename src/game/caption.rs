//! Round captions and the victory prize

use crate::catalog::DayIndex;
use crate::core::shuffle;
use rand::Rng;

pub const FLOP_CAPTION: &str = "the flop";

pub const TURNS: [&str; 2] = ["the turn", "fourth street"];

pub const RIVERS: [&str; 2] = ["the river", "fifth street"];

/// Names for rounds past the river
pub const BEYONDS: [&str; 28] = [
    "fourth avenue",
    "scott street",
    "sixth street",
    "the ace of pentacles",
    "the bop",
    "the briars",
    "the cobblestones",
    "the cooper",
    "the elephant",
    "the empress",
    "the fold",
    "the fool",
    "the forest",
    "the hierophant",
    "the lovers",
    "the magician",
    "the meadow",
    "the moon",
    "the pastry",
    "the postman",
    "the radio",
    "the rory",
    "the spin",
    "the tower",
    "the twister",
    "the wisps",
    "the world",
    "twelfth street",
];

pub const PRIZES: [&str; 13] = [
    "🏆", "⭐️", "🎉", "🪅", "💰", "☀️", "🌈", "🍀", "🪩", "🎡", "🎁", "🍒", "🎈",
];

/// Caption set for one session
///
/// Turn and river names rotate daily; names past the river are shuffled once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captions {
    turn: &'static str,
    river: &'static str,
    beyond: Vec<&'static str>,
}

impl Captions {
    pub fn new<R: Rng + ?Sized>(day: &DayIndex, rng: &mut R) -> Self {
        let mut beyond = BEYONDS.to_vec();
        shuffle(&mut beyond, rng);

        Self {
            turn: day.choose(&TURNS).copied().unwrap_or_default(),
            river: day.choose(&RIVERS).copied().unwrap_or_default(),
            beyond,
        }
    }

    /// Caption for `round`, or the victory line once `won`
    #[must_use]
    pub fn caption(&self, round: usize, won: bool, prize: &str) -> String {
        if won {
            return format!("the victory! {prize}");
        }

        match round {
            0 => FLOP_CAPTION.to_string(),
            1 => self.turn.to_string(),
            2 => self.river.to_string(),
            _ => self.beyond[round % self.beyond.len()].to_string(),
        }
    }
}

/// Draw one prize at random
pub fn draw_prize<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let mut prizes = PRIZES;
    shuffle(&mut prizes, rng);
    prizes[prizes.len() - 1]
}
