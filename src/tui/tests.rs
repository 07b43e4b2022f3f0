// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT

use crossterm::event::{KeyCode, KeyEvent};

use super::theme::TuiTheme;
use super::{
    display_is_sentinel, footer_help_line, keypad_event, keypad_label, App, KEYPAD_COLS,
    KEYPAD_ROWS,
};
use crate::model::CalcState;
use crate::ops::CalcEvent;

fn app() -> App {
    App::new(CalcState::default(), TuiTheme::default())
}

fn type_keys(app: &mut App, keys: &str) {
    for ch in keys.chars() {
        app.handle_key(KeyEvent::from(KeyCode::Char(ch)));
    }
}

#[test]
fn every_keypad_cell_maps_to_an_event() {
    for row in 0..KEYPAD_ROWS {
        for col in 0..KEYPAD_COLS {
            // Panics here would mean the key table and the event mapping diverged.
            let _ = keypad_event(row, col);
            assert!(!keypad_label(row, col).is_empty());
        }
    }
}

#[test]
fn keypad_matches_the_classic_grid() {
    let labels: Vec<String> = (0..KEYPAD_ROWS)
        .map(|row| {
            (0..KEYPAD_COLS)
                .map(|col| keypad_label(row, col).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    assert_eq!(labels, ["7 8 9 ÷", "4 5 6 ×", "1 2 3 −", "0 = + C"]);
}

#[test]
fn typed_keys_drive_the_calculator() {
    let mut app = app();
    type_keys(&mut app, "5+3");
    app.handle_key(KeyEvent::from(KeyCode::Enter));
    assert_eq!(app.state.display(), "8");
}

#[test]
fn equals_key_and_enter_are_equivalent() {
    let mut typed = app();
    type_keys(&mut typed, "8/0=");

    let mut entered = app();
    type_keys(&mut entered, "8/0");
    entered.handle_key(KeyEvent::from(KeyCode::Enter));

    assert_eq!(typed.state, entered.state);
    assert_eq!(typed.state.display(), "Infinity");
}

#[test]
fn uppercase_c_clears() {
    let mut app = app();
    type_keys(&mut app, "12+34C");
    assert_eq!(app.state, CalcState::default());
}

#[test]
fn space_presses_the_focused_button() {
    let mut app = app();
    assert_eq!(app.cursor, (0, 0));
    assert_eq!(keypad_event(0, 0), CalcEvent::from_char('7').expect("event"));

    app.handle_key(KeyEvent::from(KeyCode::Char(' ')));
    assert_eq!(app.state.display(), "7");
}

#[test]
fn cursor_moves_and_wraps_around_the_grid() {
    let mut app = app();

    app.handle_key(KeyEvent::from(KeyCode::Right));
    assert_eq!(app.cursor, (0, 1));
    app.handle_key(KeyEvent::from(KeyCode::Down));
    assert_eq!(app.cursor, (1, 1));

    app.cursor = (0, 0);
    app.handle_key(KeyEvent::from(KeyCode::Left));
    assert_eq!(app.cursor, (0, 3));
    app.handle_key(KeyEvent::from(KeyCode::Up));
    assert_eq!(app.cursor, (3, 3));

    app.handle_key(KeyEvent::from(KeyCode::Char('l')));
    assert_eq!(app.cursor, (3, 0));
    app.handle_key(KeyEvent::from(KeyCode::Char('j')));
    assert_eq!(app.cursor, (0, 0));
}

#[test]
fn q_and_esc_quit() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = app();
        app.handle_key(KeyEvent::from(code));
        assert!(app.should_quit, "key {code:?}");
    }
}

#[test]
fn unmapped_keys_are_ignored() {
    let mut app = app();
    type_keys(&mut app, "x.%");
    app.handle_key(KeyEvent::from(KeyCode::Tab));
    assert_eq!(app.state, CalcState::default());
    assert!(!app.should_quit);
}

#[test]
fn sentinel_displays_are_flagged_for_the_error_style() {
    assert!(display_is_sentinel("NaN"));
    assert!(display_is_sentinel("Infinity"));
    assert!(display_is_sentinel("-Infinity"));
    assert!(!display_is_sentinel("0"));
    assert!(!display_is_sentinel("812"));
}

#[test]
fn footer_mentions_the_key_bindings() {
    let line = footer_help_line();
    let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
    assert!(text.contains("equals"));
    assert!(text.contains("clear"));
    assert!(text.contains("quit"));
}
