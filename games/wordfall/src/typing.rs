//! Typed-buffer editing and matching it against the falling words.

use wordfall_engine::{Key, Rng};

use crate::session::Session;
use crate::tuning::INPUT_MAX_LEN;
use crate::words::FallingWord;

/// What a key press did to the typed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Appended(char),
    Cleared,
    Ignored,
}

/// What matching the buffer did to one word.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Typed in full at the target size; the word has left the pool.
    Hit(FallingWord),
    /// Typed in full at the wrong size; a life was lost. The word stays.
    WrongSize { text: String },
}

/// Edit the buffer: ASCII letters are appended lowercase up to the maximum
/// length, backspace clears everything, anything else is ignored.
pub fn apply_key(input: &mut String, key: Key) -> KeyOutcome {
    match key {
        Key::Char(c) if c.is_ascii_alphabetic() && input.len() < INPUT_MAX_LEN => {
            let c = c.to_ascii_lowercase();
            input.push(c);
            KeyOutcome::Appended(c)
        }
        Key::Backspace => {
            input.clear();
            KeyOutcome::Cleared
        }
        _ => KeyOutcome::Ignored,
    }
}

/// Compare the buffer against every word in pool order.
///
/// Words the buffer is a prefix of echo it; others lose their echo. A complete
/// word at the target size scores, speeds the game up, resamples the target and
/// (for bonus words) schedules a life at `now` + delay. A complete word at another
/// size costs a life. Both clear the buffer, so later words see an empty one.
pub fn match_input(session: &mut Session, rng: &mut Rng, now: f64) -> Vec<MatchOutcome> {
    let mut outcomes = Vec::new();
    let mut i = 0;
    while let Some(word) = session.words.get_mut(i) {
        if !word.text.starts_with(session.input.as_str()) {
            word.typed.clear();
            i += 1;
            continue;
        }

        word.typed.clone_from(&session.input);
        if word.text != session.input {
            i += 1;
            continue;
        }

        if word.size() == session.target.value {
            let word = session.words.remove(i);
            session.input.clear();
            if word.bonus {
                session.schedule_bonus_life(now);
            }
            session.score += 1;
            session.speed_up();
            session.next_target(rng);
            log::debug!("hit '{}', score {}", word.text, session.score);
            outcomes.push(MatchOutcome::Hit(word));
        } else {
            word.typed.clear();
            session.input.clear();
            session.lives -= 1;
            log::debug!(
                "'{}' has size {}, wanted {}; lives {}",
                word.text,
                word.size(),
                session.target.value,
                session.lives
            );
            outcomes.push(MatchOutcome::WrongSize {
                text: word.text.clone(),
            });
            i += 1;
        }
    }
    outcomes
}
