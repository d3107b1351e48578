//! One play-through of a daily path
//!
//! A session owns the path and everything dealt at the start (flop, prize,
//! caption order) plus the current [`GameState`]. Presentation layers read
//! from it and feed player input back through [`Session::apply`].

use super::caption::{Captions, draw_prize};
use super::cards::{Card, deal};
use super::engine::{Event, GameState, step};
use super::flop::flop;
use super::hints::{HINT_COUNT, revealed};
use crate::catalog::{DayIndex, Daily};
use crate::core::{Path, Round};
use crate::output::share_summary;
use rand::Rng;

/// Today's path as dealt to one player, with their progress through it
#[derive(Debug)]
pub struct Session {
    identifier: usize,
    path: Path,
    flop: String,
    prize: &'static str,
    captions: Captions,
    state: GameState,
}

impl Session {
    /// Deal a new session for today's puzzle
    pub fn new<R: Rng + ?Sized>(daily: Daily, rng: &mut R) -> Self {
        Self::deal(daily.identifier, daily.path, &daily.day, rng)
    }

    /// Deal a new session for an explicit path
    pub fn deal<R: Rng + ?Sized>(
        identifier: usize,
        path: Path,
        day: &DayIndex,
        rng: &mut R,
    ) -> Self {
        let flop = flop(&path.rounds()[0], rng);
        let captions = Captions::new(day, rng);
        let prize = draw_prize(rng);

        Self {
            identifier,
            path,
            flop,
            prize,
            captions,
            state: GameState::default(),
        }
    }

    /// Feed one player event through the engine
    pub fn apply(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = step(&self.path, state, event);
    }

    /// Typed text, as the full contents of the guess box
    pub fn submit_guess(&mut self, text: &str) {
        self.apply(Event::Input(text.to_string()));
    }

    /// A card's symbol, `None` for a face-down card
    pub fn append_symbol(&mut self, symbol: Option<char>) {
        self.apply(Event::Symbol(symbol));
    }

    /// Click the card at `index`; face-down or missing cards do nothing
    pub fn click_card(&mut self, index: usize) {
        let symbol = self.cards().get(index).and_then(Card::visible_symbol);
        self.append_symbol(symbol);
    }

    pub fn request_hint(&mut self) {
        self.apply(Event::Hint);
    }

    pub fn delete_last(&mut self) {
        self.apply(Event::Delete);
    }

    pub fn clear_guess(&mut self) {
        self.apply(Event::Clear);
    }

    #[inline]
    #[must_use]
    pub const fn identifier(&self) -> usize {
        self.identifier
    }

    #[inline]
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn flop(&self) -> &str {
        &self.flop
    }

    #[inline]
    #[must_use]
    pub const fn prize(&self) -> &'static str {
        self.prize
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The round being played
    #[must_use]
    pub fn current_round(&self) -> &Round {
        &self.path.rounds()[self.state.round]
    }

    /// Number of letters the current guess needs
    #[must_use]
    pub fn expected_length(&self) -> usize {
        self.path.solution_length(self.state.round)
    }

    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        deal(&self.flop, &self.path, self.state.round)
    }

    #[must_use]
    pub fn faceup(&self) -> usize {
        self.flop.chars().count() + self.state.round
    }

    #[must_use]
    pub fn facedown(&self) -> usize {
        self.path.last_index() - self.state.round
    }

    /// Hints revealed so far for the current round
    #[must_use]
    pub fn hints(&self) -> Vec<String> {
        revealed(self.current_round(), self.state.hint)
    }

    /// "hint n of 7"
    #[must_use]
    pub fn hint_label(&self) -> String {
        format!("hint {} of {HINT_COUNT}", self.state.hint)
    }

    #[must_use]
    pub fn caption(&self) -> String {
        self.captions.caption(self.state.round, self.state.won, self.prize)
    }

    /// Share line for the current progress
    #[must_use]
    pub fn share(&self) -> String {
        share_summary(
            self.identifier,
            self.faceup(),
            self.facedown(),
            self.state.won,
            self.prize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session {
        let path = Path::parse(
            "{net, ten} + s -> {nest, nets, sent, tens} + o -> {notes, onset, stone, tones}",
        )
        .unwrap();
        Session::deal(7, path, &DayIndex::new(0, 0), &mut StdRng::seed_from_u64(21))
    }

    #[test]
    fn new_session_state() {
        let session = session();
        assert_eq!(session.state(), &GameState::default());
        assert_eq!(session.faceup(), 3);
        assert_eq!(session.facedown(), 2);
        assert_eq!(session.caption(), "the flop");
        assert_eq!(session.expected_length(), 3);
        assert!(session.hints().is_empty());
    }

    #[test]
    fn debug_shows_progress() {
        let session = session();
        let debug = format!("{session:?}");
        assert!(debug.starts_with("Session"));
        assert!(debug.contains("identifier: 7"));
    }

    #[test]
    fn playing_through_reveals_cards() {
        let mut session = session();

        session.submit_guess("ten");
        assert_eq!(session.state().round, 1);
        assert_eq!(session.faceup(), 4);
        assert_eq!(session.facedown(), 1);
        assert_eq!(session.caption(), "the turn");

        session.submit_guess("sent");
        assert_eq!(session.faceup(), 5);
        assert_eq!(session.facedown(), 0);

        session.submit_guess("stone");
        assert!(session.state().won);
        assert_eq!(session.caption(), format!("the victory! {}", session.prize()));
        assert!(session.share().ends_with(session.prize()));
    }

    #[test]
    fn share_tracks_progress() {
        let mut session = session();
        session.submit_guess("net");
        assert_eq!(session.share(), "hold'gram #7 ⬜️⬜️⬜️⬜️🟥");
    }

    #[test]
    fn clicking_cards_spells_guess() {
        let mut session = session();
        let flop: Vec<char> = session.flop().chars().collect();

        session.click_card(0);
        session.click_card(1);
        assert_eq!(session.state().guess, flop[..2].iter().collect::<String>());

        // Face-down card does nothing
        session.click_card(3);
        assert_eq!(session.state().guess.chars().count(), 2);

        // Past the end does nothing
        session.click_card(99);
        assert_eq!(session.state().guess.chars().count(), 2);
    }

    #[test]
    fn hints_follow_current_round() {
        let mut session = session();
        session.request_hint();
        assert_eq!(session.hints(), ["we think there are 2 answer(s)"]);
        assert_eq!(session.hint_label(), "hint 1 of 7");

        session.submit_guess("net");
        assert!(session.hints().is_empty());

        session.request_hint();
        assert_eq!(session.hints(), ["we think there are 4 answer(s)"]);
    }

    #[test]
    fn delete_and_clear() {
        let mut session = session();
        session.submit_guess("ne");
        session.delete_last();
        assert_eq!(session.state().guess, "n");
        session.clear_guess();
        assert_eq!(session.state().guess, "");
    }
}
