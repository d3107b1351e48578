//! Playing a path
//!
//! The guess engine is a pure state machine; [`Session`] wraps it with the
//! things dealt once per play-through (flop, prize, captions).

pub mod caption;
pub mod cards;
mod engine;
mod flop;
pub mod hints;
mod session;

pub use cards::Card;
pub use engine::{Event, GameState, INITIAL_PLACEHOLDER, step};
pub use flop::{FLOP_ATTEMPTS, flop};
pub use hints::HINT_COUNT;
pub use session::Session;
