// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT

//! Core calculator data model.
//!
//! A `CalcState` holds the display string, the pending operator, and the first
//! operand snapshot. All mutation happens through the pure transitions in
//! `crate::ops`.

pub mod digit;
pub mod operator;
pub mod state;

pub use digit::{Digit, DigitError};
pub use operator::{Operator, ParseOperatorError};
pub use state::{CalcState, Phase, StateSnapshot};
