// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT

//! Pure keypad transitions.
//!
//! `transition` is the whole calculator: an explicit reducer from one
//! `CalcState` value to the next, one keypad event at a time. It is total and
//! infallible on purpose — every event is accepted in every state, and numeric
//! anomalies flow through as `NaN`/`Infinity` display strings rather than
//! errors (see `crate::format`).

use std::fmt;

use smol_str::format_smolstr;

use crate::format::{format_number, lenient_parse};
use crate::model::{CalcState, Digit, Operator};

/// One keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcEvent {
    Digit(Digit),
    Operator(Operator),
    Equals,
    Clear,
}

impl CalcEvent {
    /// Maps a keypad character (`0-9`, `+ - * /`, `=`, `c`/`C`) to its event.
    pub fn from_char(ch: char) -> Option<Self> {
        if let Ok(digit) = Digit::try_from(ch) {
            return Some(Self::Digit(digit));
        }
        if let Ok(op) = Operator::try_from(ch) {
            return Some(Self::Operator(op));
        }
        match ch {
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }
}

/// Applies one keypad event, producing the next state.
///
/// - Digit: a `"0"` display is replaced, anything else is appended to. This
///   holds in every phase, including right after equals (a digit extends the
///   previous result). No length cap, no decimal point.
/// - Operator: snapshots the display into the first operand, resets the
///   display to `"0"`. A second operator press before equals re-snapshots and
///   overwrites; there is no chained computation.
/// - Equals: with nothing pending it is the identity. Otherwise both operands
///   are leniently parsed, combined, and formatted back into the display, and
///   the pending operator and first operand are cleared.
/// - Clear: back to the initial state, unconditionally.
pub fn transition(state: &CalcState, event: CalcEvent) -> CalcState {
    match event {
        CalcEvent::Digit(digit) => {
            let display = if state.display() == "0" {
                format_smolstr!("{digit}")
            } else {
                format_smolstr!("{}{}", state.display(), digit)
            };
            CalcState::from_parts(display, state.pending_operator(), state.first_operand())
        }
        CalcEvent::Operator(op) => CalcState::from_parts("0", Some(op), state.display()),
        CalcEvent::Equals => match state.pending_operator() {
            None => state.clone(),
            Some(op) => {
                let lhs = lenient_parse(state.first_operand());
                let rhs = lenient_parse(state.display());
                CalcState::from_parts(format_number(op.apply(lhs, rhs)), None, "")
            }
        },
        CalcEvent::Clear => CalcState::default(),
    }
}

/// Folds a sequence of events over a starting state.
pub fn apply_all(state: &CalcState, events: impl IntoIterator<Item = CalcEvent>) -> CalcState {
    events
        .into_iter()
        .fold(state.clone(), |state, event| transition(&state, event))
}

/// Parses a key tape like `"5+3="` into events. Whitespace is ignored; any
/// other character not on the keypad is rejected with its byte position.
pub fn parse_tape(tape: &str) -> Result<Vec<CalcEvent>, TapeError> {
    let mut events = Vec::with_capacity(tape.len());
    for (position, ch) in tape.char_indices() {
        if ch.is_whitespace() {
            continue;
        }
        match CalcEvent::from_char(ch) {
            Some(event) => events.push(event),
            None => return Err(TapeError { position, ch }),
        }
    }
    Ok(events)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapeError {
    pub position: usize,
    pub ch: char,
}

impl fmt::Display for TapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported key '{}' at byte {} (expected 0-9, + - * /, =, or c)",
            self.ch, self.position
        )
    }
}

impl std::error::Error for TapeError {}
