// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT

//! Tally — terminal four-function calculator.
//!
//! The arithmetic core is a pure keypad state machine (`ops::transition`) over the
//! `model::CalcState` value; the `tui` module renders a keypad on top of it.

pub mod format;
pub mod model;
pub mod ops;
pub mod tui;
