// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT

//! Terminal UI.
//!
//! Renders the classic keypad (ratatui + crossterm) over the pure calculator
//! core: every key press is mapped to a `CalcEvent` and folded into the state
//! with `ops::transition`. Buttons can also be pressed by moving a cursor over
//! the grid and hitting Space.

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use smol_str::{format_smolstr, SmolStr};

use crate::model::CalcState;
use crate::ops::{transition, CalcEvent};

mod theme;

use theme::TuiTheme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅃 🄰 🄻 🄻 🅈 ";

const KEYPAD_ROWS: usize = 4;
const KEYPAD_COLS: usize = 4;
const BUTTON_HEIGHT: u16 = 3;
const DISPLAY_HEIGHT: u16 = 3;

/// Key characters per keypad cell, matching the classic grid:
/// `7 8 9 ÷` / `4 5 6 ×` / `1 2 3 −` / `0 = + C`.
const KEYPAD_KEYS: [[char; KEYPAD_COLS]; KEYPAD_ROWS] = [
    ['7', '8', '9', '/'],
    ['4', '5', '6', '*'],
    ['1', '2', '3', '-'],
    ['0', '=', '+', 'c'],
];

/// Runs the interactive terminal UI from the initial state.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_state(CalcState::default())
}

pub fn run_with_state(state: CalcState) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(state, theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

pub(crate) struct App {
    pub(crate) state: CalcState,
    pub(crate) cursor: (usize, usize),
    pub(crate) should_quit: bool,
    theme: TuiTheme,
}

impl App {
    pub(crate) fn new(state: CalcState, theme: TuiTheme) -> Self {
        Self {
            state,
            cursor: (0, 0),
            should_quit: false,
            theme,
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.press(CalcEvent::Equals),
            KeyCode::Char(' ') => self.press(keypad_event(self.cursor.0, self.cursor.1)),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Char(ch) => {
                if let Some(event) = CalcEvent::from_char(ch) {
                    self.press(event);
                }
            }
            _ => {}
        }
    }

    pub(crate) fn press(&mut self, event: CalcEvent) {
        self.state = transition(&self.state, event);
    }

    fn move_cursor(&mut self, row_delta: isize, col_delta: isize) {
        let row = (self.cursor.0 as isize + row_delta).rem_euclid(KEYPAD_ROWS as isize);
        let col = (self.cursor.1 as isize + col_delta).rem_euclid(KEYPAD_COLS as isize);
        self.cursor = (row as usize, col as usize);
    }
}

/// The event behind a keypad cell. The grid is static, so the mapping is total.
pub(crate) fn keypad_event(row: usize, col: usize) -> CalcEvent {
    CalcEvent::from_char(KEYPAD_KEYS[row][col]).expect("keypad key maps to an event")
}

pub(crate) fn keypad_label(row: usize, col: usize) -> SmolStr {
    match keypad_event(row, col) {
        CalcEvent::Digit(digit) => format_smolstr!("{digit}"),
        CalcEvent::Operator(op) => SmolStr::new_static(op.keypad_glyph()),
        CalcEvent::Equals => SmolStr::new_static("="),
        CalcEvent::Clear => SmolStr::new_static("C"),
    }
}

/// Sentinel renderings get the error style in the display line.
pub(crate) fn display_is_sentinel(display: &str) -> bool {
    matches!(display, "NaN" | "Infinity" | "-Infinity")
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.size();
    frame.render_widget(Block::default().style(app.theme.base_style()), area);

    let rows = Layout::vertical([
        Constraint::Length(DISPLAY_HEIGHT),
        Constraint::Length(KEYPAD_ROWS as u16 * BUTTON_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    draw_display(frame, app, rows[0]);
    draw_keypad(frame, app, rows[1]);
    frame.render_widget(Paragraph::new(footer_help_line()), rows[3]);
}

fn draw_display(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let display = app.state.display();
    let style = if display_is_sentinel(display) {
        app.theme.error_style()
    } else {
        app.theme.base_style()
    };

    let widget = Paragraph::new(display.to_owned())
        .alignment(Alignment::Right)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(app.theme.base_style()));
    frame.render_widget(widget, area);
}

fn draw_keypad(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let row_rects =
        Layout::vertical(vec![Constraint::Length(BUTTON_HEIGHT); KEYPAD_ROWS]).split(area);

    for (row, row_rect) in row_rects.iter().enumerate() {
        let col_rects =
            Layout::horizontal(vec![Constraint::Ratio(1, KEYPAD_COLS as u32); KEYPAD_COLS])
                .split(*row_rect);

        for (col, cell) in col_rects.iter().enumerate() {
            let accented = !matches!(keypad_event(row, col), CalcEvent::Digit(_));
            let style = if app.cursor == (row, col) {
                app.theme.selection_style()
            } else {
                app.theme.button_style(accented)
            };

            let button = Paragraph::new(keypad_label(row, col).to_string())
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(app.theme.button_style(accented)),
                );
            frame.render_widget(button, *cell);
        }
    }
}

pub(crate) fn footer_help_line() -> Line<'static> {
    let key = Style::default().fg(FOOTER_KEY_COLOR);
    let label = Style::default().fg(FOOTER_LABEL_COLOR);

    Line::from(vec![
        Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR)),
        Span::styled("0-9 + - * /", key),
        Span::styled(" type  ", label),
        Span::styled("=/Enter", key),
        Span::styled(" equals  ", label),
        Span::styled("c", key),
        Span::styled(" clear  ", label),
        Span::styled("arrows+Space", key),
        Span::styled(" press  ", label),
        Span::styled("q", key),
        Span::styled(" quit", label),
    ])
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
