//! A single round of an anagram path
//!
//! Catalog text form: `{alp, lap, pal} + e` for a round with an outgoing
//! letter, `{leap, pale, peal, plea}` for the final round.

use std::fmt;
use std::str::FromStr;

/// Separator between the member list and the next letter
pub const NEXT_SEPARATOR: &str = " + ";

/// Separator between members of a round
pub const MEMBER_SEPARATOR: &str = ", ";

/// One anagram round: the accepted solutions plus the letter leading to the next round
///
/// Word order is the catalog order; it is kept for display and hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    words: Vec<String>,
    next: Option<char>,
}

/// Error type for malformed rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    MissingBraces,
    EmptyMembers,
    EmptyWord,
    DuplicateWord(String),
    InvalidCharacters(String),
    MixedLengths { expected: usize, word: String },
    InvalidNext(String),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBraces => write!(f, "member list must be enclosed in '{{' and '}}'"),
            Self::EmptyMembers => write!(f, "member list is empty"),
            Self::EmptyWord => write!(f, "member list contains an empty word"),
            Self::DuplicateWord(word) => write!(f, "word '{word}' appears more than once"),
            Self::InvalidCharacters(word) => {
                write!(f, "word '{word}' must contain only lowercase letters")
            }
            Self::MixedLengths { expected, word } => write!(
                f,
                "word '{word}' has {} letters, expected {expected}",
                word.chars().count()
            ),
            Self::InvalidNext(next) => {
                write!(f, "next letter '{next}' must be a single lowercase letter")
            }
        }
    }
}

impl std::error::Error for RoundError {}

impl Round {
    /// Create a round from its words and optional next letter
    ///
    /// # Errors
    /// Returns `RoundError` if:
    /// - `words` is empty, or contains an empty or repeated word
    /// - A word contains anything but lowercase letters
    /// - Words differ in length
    /// - `next` is not a lowercase letter
    pub fn new(words: Vec<String>, next: Option<char>) -> Result<Self, RoundError> {
        let Some(first) = words.first() else {
            return Err(RoundError::EmptyMembers);
        };
        let expected = first.chars().count();

        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(RoundError::EmptyWord);
            }
            if !word.chars().all(char::is_lowercase) {
                return Err(RoundError::InvalidCharacters(word.clone()));
            }
            if word.chars().count() != expected {
                return Err(RoundError::MixedLengths {
                    expected,
                    word: word.clone(),
                });
            }
            if words[..i].contains(word) {
                return Err(RoundError::DuplicateWord(word.clone()));
            }
        }

        if let Some(symbol) = next
            && !symbol.is_lowercase()
        {
            return Err(RoundError::InvalidNext(symbol.to_string()));
        }

        Ok(Self { words, next })
    }

    /// Accepted solutions, in catalog order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The letter added to reach the next round, `None` on the final round
    #[inline]
    #[must_use]
    pub const fn next(&self) -> Option<char> {
        self.next
    }

    /// Check whether `word` is an accepted solution
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Length in letters shared by every word of the round
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.words.first().map_or(0, |w| w.chars().count())
    }

    /// Sorted letters of the round's words
    #[must_use]
    pub fn signature(&self) -> String {
        self.words.first().map(|w| signature(w)).unwrap_or_default()
    }
}

/// Letters of `word` in sorted order; two words are anagrams iff their signatures match
///
/// # Examples
/// ```
/// use holdgram::core::signature;
///
/// assert_eq!(signature("peal"), "aelp");
/// assert_eq!(signature("plea"), signature("leap"));
/// ```
#[must_use]
pub fn signature(word: &str) -> String {
    let mut symbols: Vec<char> = word.chars().collect();
    symbols.sort_unstable();
    symbols.into_iter().collect()
}

impl FromStr for Round {
    type Err = RoundError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (members, next) = match text.split_once(NEXT_SEPARATOR) {
            Some((members, next)) => (members, Some(next)),
            None => (text, None),
        };

        let inner = members
            .strip_prefix('{')
            .and_then(|m| m.strip_suffix('}'))
            .ok_or(RoundError::MissingBraces)?;

        if inner.is_empty() {
            return Err(RoundError::EmptyMembers);
        }

        let words = inner.split(MEMBER_SEPARATOR).map(str::to_string).collect();

        let next = match next {
            None => None,
            Some(next) => {
                let mut symbols = next.chars();
                match (symbols.next(), symbols.next()) {
                    (Some(symbol), None) => Some(symbol),
                    _ => return Err(RoundError::InvalidNext(next.to_string())),
                }
            }
        };

        Self::new(words, next)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.words.join(MEMBER_SEPARATOR))?;
        if let Some(next) = self.next {
            write!(f, "{NEXT_SEPARATOR}{next}")?;
        }
        Ok(())
    }
}
