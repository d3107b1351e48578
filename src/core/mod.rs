//! Core domain types for hold'gram
//!
//! Rounds, paths and the shuffle they are scrambled with. Everything here is
//! pure and independent of how a puzzle is presented.

mod path;
mod round;
mod shuffle;

pub use path::{FLOP_LENGTH, Path, PathError, ROUND_SEPARATOR};
pub use round::{MEMBER_SEPARATOR, NEXT_SEPARATOR, Round, RoundError, signature};
pub use shuffle::shuffle;
