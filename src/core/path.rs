//! Anagram paths: chains of rounds joined by single-letter additions
//!
//! Catalog text form: `{alp, lap, pal} + e -> {leap, pale, peal, plea}`.

use super::round::{Round, RoundError, signature};
use std::fmt;
use std::str::FromStr;

/// Separator between rounds
pub const ROUND_SEPARATOR: &str = " -> ";

/// Word length of the first round of every catalog path
pub const FLOP_LENGTH: usize = 3;

/// An ordered, non-empty chain of rounds
///
/// Each round's words are one letter longer than the previous round's, and
/// every round but the last carries the letter that leads to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    rounds: Vec<Round>,
}

/// Error type for malformed paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    Empty,
    Round { index: usize, source: RoundError },
    MissingNext { index: usize },
    UnexpectedNext { index: usize },
    LengthStep { index: usize, expected: usize, found: usize },
    FlopLength { expected: usize, found: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path has no rounds"),
            Self::Round { index, source } => write!(f, "round {index}: {source}"),
            Self::MissingNext { index } => {
                write!(f, "round {index}: only the final round may omit its next letter")
            }
            Self::UnexpectedNext { index } => {
                write!(f, "round {index}: the final round must not have a next letter")
            }
            Self::LengthStep {
                index,
                expected,
                found,
            } => write!(
                f,
                "round {index}: words must have {expected} letters, got {found}"
            ),
            Self::FlopLength { expected, found } => write!(
                f,
                "first round words must have {expected} letters, got {found}"
            ),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Round { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Path {
    /// Build a playable path from already-validated rounds
    ///
    /// The first round must have [`FLOP_LENGTH`] letters.
    ///
    /// # Errors
    /// Returns `PathError` if:
    /// - `rounds` is empty
    /// - The first round does not have `FLOP_LENGTH` letters
    /// - A non-final round has no next letter, or the final round has one
    /// - Word length does not grow by exactly one letter per round
    pub fn new(rounds: Vec<Round>) -> Result<Self, PathError> {
        Self::starting_at(rounds, FLOP_LENGTH)
    }

    /// Build a path whose first round has `length` letters
    ///
    /// Used by the generator for word lengths other than the flop's.
    ///
    /// # Errors
    /// Same as [`Path::new`], with `length` in place of `FLOP_LENGTH`.
    pub fn starting_at(rounds: Vec<Round>, length: usize) -> Result<Self, PathError> {
        let Some(first) = rounds.first() else {
            return Err(PathError::Empty);
        };
        if first.word_length() != length {
            return Err(PathError::FlopLength {
                expected: length,
                found: first.word_length(),
            });
        }
        let last = rounds.len() - 1;

        for (index, round) in rounds.iter().enumerate() {
            match (round.next(), index == last) {
                (None, false) => return Err(PathError::MissingNext { index }),
                (Some(_), true) => return Err(PathError::UnexpectedNext { index }),
                _ => {}
            }

            let expected = length + index;
            if round.word_length() != expected {
                return Err(PathError::LengthStep {
                    index,
                    expected,
                    found: round.word_length(),
                });
            }
        }

        Ok(Self { rounds })
    }

    /// Parse a catalog line
    ///
    /// # Errors
    /// Returns `PathError` if the line is empty, any round is malformed, or
    /// the rounds do not form a path.
    ///
    /// # Examples
    /// ```
    /// use holdgram::core::Path;
    ///
    /// let path = Path::parse("{alp, lap, pal} + e -> {leap, pale, peal, plea}").unwrap();
    /// assert_eq!(path.len(), 2);
    /// assert_eq!(path.rounds()[0].next(), Some('e'));
    /// assert!(path.rounds()[1].contains("plea"));
    ///
    /// assert!(Path::parse("{alp, lap, pal} + e").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PathError> {
        if text.trim().is_empty() {
            return Err(PathError::Empty);
        }

        let rounds = text
            .split(ROUND_SEPARATOR)
            .enumerate()
            .map(|(index, round)| {
                round
                    .parse::<Round>()
                    .map_err(|source| PathError::Round { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(rounds)
    }

    /// Rounds in play order
    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Round at `index`, if any
    #[inline]
    #[must_use]
    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    /// Number of rounds (always at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Always false; a path has at least one round
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Index of the final round
    #[inline]
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.rounds.len().saturating_sub(1)
    }

    /// Number of letters a solution to `round` has
    ///
    /// `FLOP_LENGTH + round` for every path built by [`Path::new`].
    #[inline]
    #[must_use]
    pub fn solution_length(&self, round: usize) -> usize {
        self.rounds[0].word_length() + round
    }

    /// Check that each next letter turns a round's anagram class into the following one
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.rounds.windows(2).all(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let sig = from.signature();
            let all_same = from.words().iter().all(|w| signature(w) == sig)
                && to.words().iter().all(|w| signature(w) == to.signature());

            all_same
                && from
                    .next()
                    .is_some_and(|next| signature(&format!("{sig}{next}")) == to.signature())
        })
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, round) in self.rounds.iter().enumerate() {
            if i > 0 {
                f.write_str(ROUND_SEPARATOR)?;
            }
            write!(f, "{round}")?;
        }
        Ok(())
    }
}
