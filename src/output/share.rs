//! Shareable plain-text result summary

/// Glyph for a card the player has revealed
pub const FACEUP_GLYPH: &str = "⬜️";

/// Glyph for a card still face-down
pub const FACEDOWN_GLYPH: &str = "🟥";

/// Format the share line
///
/// # Examples
/// ```
/// use holdgram::output::share_summary;
///
/// assert_eq!(share_summary(4, 3, 1, false, "🏆"), "hold'gram #4 ⬜️⬜️⬜️🟥");
/// assert_eq!(share_summary(4, 4, 0, true, "🏆"), "hold'gram #4 ⬜️⬜️⬜️⬜️🏆");
/// ```
#[must_use]
pub fn share_summary(
    identifier: usize,
    faceup: usize,
    facedown: usize,
    won: bool,
    prize: &str,
) -> String {
    let mut readable = format!("hold'gram #{identifier} ");
    readable.push_str(&FACEUP_GLYPH.repeat(faceup));
    readable.push_str(&FACEDOWN_GLYPH.repeat(facedown));
    if won {
        readable.push_str(prize);
    }
    readable
}
