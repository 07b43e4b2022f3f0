// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT

use serde::Serialize;
use smol_str::SmolStr;

use super::operator::Operator;

/// The running calculation the keypad operates on.
///
/// Exactly three fields, all transient: the display string (the only value a
/// user ever sees), the pending operator, and the first-operand snapshot taken
/// when that operator was pressed. The pending operator and the first operand
/// are set together and cleared together; the display is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcState {
    display: SmolStr,
    pending_operator: Option<Operator>,
    first_operand: SmolStr,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            display: SmolStr::new_static("0"),
            pending_operator: None,
            first_operand: SmolStr::default(),
        }
    }
}

impl CalcState {
    /// Builds a state from raw parts. Intended for tests and replays; the
    /// normal way to produce states is `crate::ops::transition`.
    pub fn from_parts(
        display: impl Into<SmolStr>,
        pending_operator: Option<Operator>,
        first_operand: impl Into<SmolStr>,
    ) -> Self {
        Self {
            display: display.into(),
            pending_operator,
            first_operand: first_operand.into(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn first_operand(&self) -> &str {
        &self.first_operand
    }

    pub fn phase(&self) -> Phase {
        match self.pending_operator {
            None => Phase::Entering,
            Some(_) => Phase::OperatorChosen,
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            display: self.display.to_string(),
            pending_operator: self.pending_operator.map(|op| op.as_str().to_owned()),
            first_operand: self.first_operand.to_string(),
            phase: self.phase(),
        }
    }
}

/// The two reachable phases: entering a number, or entering the second operand
/// after an operator press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Entering,
    OperatorChosen,
}

/// Serializable view of a `CalcState`, used by the `--json` output surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub display: String,
    pub pending_operator: Option<String>,
    pub first_operand: String,
    pub phase: Phase,
}
