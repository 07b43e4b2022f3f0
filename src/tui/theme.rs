// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

/// Keypad color theme, optionally overridden from the environment.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    /// Reads `TALLY_PALETTE` (`fg,bg,accent,error`, `#RRGGBB` or named colors).
    /// An unset or empty variable keeps the terminal defaults.
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    pub(crate) fn accent_color(&self) -> Color {
        match &self.palette {
            Some(palette) => palette.accent,
            None => Color::Cyan,
        }
    }

    pub(crate) fn button_style(&self, accented: bool) -> Style {
        if accented {
            self.base_style().fg(self.accent_color())
        } else {
            self.base_style()
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        let color = match &self.palette {
            Some(palette) => palette.error,
            None => Color::Red,
        };
        self.base_style().fg(color).add_modifier(Modifier::BOLD)
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    accent: Color,
    error: Color,
}

impl TuiPalette {
    const CSV_LEN: usize = 4;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(|part| part.trim()).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg,accent,error), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        Ok(Self {
            fg: parse_palette_color(parts[0])?,
            bg: parse_palette_color(parts[1])?,
            accent: parse_palette_color(parts[2])?,
            error: parse_palette_color(parts[3])?,
        })
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    const NAME: &str = "TALLY_PALETTE";

    let value = match env::var(NAME) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ThemeError::InvalidEnv {
                name: NAME.to_string(),
                value: "<non-unicode>".to_string(),
            });
        }
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = TuiPalette::parse_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
        name: NAME.to_string(),
        value: format!("{trimmed} ({error})"),
    })?;

    Ok(Some(parsed))
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_string());
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "black" => return Ok(Color::Black),
        "red" => return Ok(Color::Red),
        "green" => return Ok(Color::Green),
        "yellow" => return Ok(Color::Yellow),
        "blue" => return Ok(Color::Blue),
        "magenta" => return Ok(Color::Magenta),
        "cyan" => return Ok(Color::Cyan),
        "white" => return Ok(Color::White),
        "gray" | "grey" => return Ok(Color::Gray),
        _ => {}
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid color: {trimmed} (expected #RRGGBB or a name)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Ok(Color::Rgb(r, g, b))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ThemeError {}
