// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};

use crate::model::ColorToken;
use crate::scene::{Emphasis, Tone};

pub const PALETTE_ENV: &str = "PROTEUS_TUI_PALETTE";
pub const PALETTE_ENV_FALLBACK: &str = "PROTEUS_PALETTE";

/// Colours for the TUI. Without a palette override the terminal's own ANSI colours are used.
///
/// Light mode uses the palette foreground on its background; dark mode swaps them. Without an
/// override both modes fall back to fixed black/white bases.
#[derive(Debug, Clone, Default)]
pub struct TuiTheme {
    palette: Option<TuiPalette>,
    dark: bool,
}

impl TuiTheme {
    pub fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self {
            palette,
            dark: false,
        })
    }

    pub fn with_dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    pub fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub(crate) fn base_style(&self) -> Style {
        let (fg, bg) = match (&self.palette, self.dark) {
            (Some(palette), false) => (palette.fg, palette.bg),
            (Some(palette), true) => (palette.bg, palette.fg),
            (None, false) => (Color::Black, Color::White),
            (None, true) => (Color::Gray, Color::Black),
        };
        Style::default().fg(fg).bg(bg)
    }

    fn ansi_color(&self, color: Ansi16) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi_color(color.idx()),
            None => color.into(),
        }
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.ansi_color(Ansi16::Cyan))
        } else {
            self.base_style().fg(self.ansi_color(Ansi16::BrightBlack))
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style()
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::Red))
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(self.ansi_color(Ansi16::BrightBlack))
    }

    pub(crate) fn key_style(&self) -> Style {
        self.base_style()
            .fg(self.ansi_color(Ansi16::Cyan))
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn header_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::BOLD)
    }

    pub(crate) fn category_color(&self, token: ColorToken) -> Color {
        self.ansi_color(match token {
            ColorToken::Blue => Ansi16::Blue,
            ColorToken::Emerald => Ansi16::Green,
            ColorToken::Orange => Ansi16::Yellow,
            ColorToken::Purple => Ansi16::Magenta,
        })
    }

    /// Badge: category colour as background.
    pub(crate) fn badge_style(&self, token: ColorToken) -> Style {
        self.base_style()
            .fg(self.ansi_color(Ansi16::BrightWhite))
            .bg(self.category_color(token))
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn tone_color(&self, tone: Tone) -> Color {
        self.ansi_color(match tone {
            Tone::Accent => Ansi16::Cyan,
            Tone::Success => Ansi16::Green,
            Tone::Warning => Ansi16::Yellow,
            Tone::Danger => Ansi16::Red,
        })
    }

    pub(crate) fn emphasis_style(&self, emphasis: Emphasis) -> Style {
        match emphasis {
            Emphasis::Normal | Emphasis::Hidden => self.base_style(),
            Emphasis::Muted => self.muted_style(),
            Emphasis::Highlight(tone) => self
                .base_style()
                .fg(self.tone_color(tone))
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const CSV_LEN: usize = 18;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(|part| part.trim()).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg,black,red,green,yellow,blue,magenta,cyan,white,bright_black,bright_red,bright_green,bright_yellow,bright_blue,bright_magenta,bright_cyan,bright_white), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let fg = parse_palette_color(parts[0])?;
        let bg = parse_palette_color(parts[1])?;

        let mut ansi = [Color::Reset; 16];
        for (idx, part) in parts.iter().skip(2).enumerate() {
            ansi[idx] = parse_palette_color(part)?;
        }

        Ok(Self { fg, bg, ansi })
    }

    fn ansi_color(&self, idx: usize) -> Color {
        self.ansi[idx]
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    let Some((name, value)) = read_palette_env()? else {
        return Ok(None);
    };
    parse_palette_override(name, &value)
}

fn read_palette_env() -> Result<Option<(&'static str, String)>, ThemeError> {
    for name in [PALETTE_ENV, PALETTE_ENV_FALLBACK] {
        match env::var(name) {
            Ok(value) => return Ok(Some((name, value))),
            Err(env::VarError::NotPresent) => continue,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: name.to_owned(),
                    value: "<non-unicode>".to_owned(),
                });
            }
        }
    }
    Ok(None)
}

fn parse_palette_override(name: &str, value: &str) -> Result<Option<TuiPalette>, ThemeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = TuiPalette::parse_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
        name: name.to_owned(),
        value: format!("{trimmed} ({error})"),
    })?;

    Ok(Some(parsed))
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != 3 {
            return Err(format!("invalid rgb: value: {trimmed}"));
        }
        let r = parse_hex_channel(parts[0])?;
        let g = parse_hex_channel(parts[1])?;
        let b = parse_hex_channel(parts[2])?;
        return Ok(Color::Rgb(r, g, b));
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Ok(Color::Rgb(r, g, b))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}")),
        4 => u16::from_str_radix(value, 16)
            .map(|parsed| (parsed >> 8) as u8)
            .map_err(|_| format!("invalid rgb: component {value}")),
        _ => Err(format!(
            "invalid rgb: component {value} (expected 2 or 4 hex digits)"
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ansi16 {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightBlack,
    BrightWhite,
}

impl Ansi16 {
    const fn idx(self) -> usize {
        match self {
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Magenta => 5,
            Self::Cyan => 6,
            Self::BrightBlack => 8,
            Self::BrightWhite => 15,
        }
    }
}

impl From<Ansi16> for Color {
    fn from(value: Ansi16) -> Self {
        match value {
            Ansi16::Red => Color::Red,
            Ansi16::Green => Color::Green,
            Ansi16::Yellow => Color::Yellow,
            Ansi16::Blue => Color::Blue,
            Ansi16::Magenta => Color::Magenta,
            Ansi16::Cyan => Color::Cyan,
            Ansi16::BrightBlack => Color::DarkGray,
            Ansi16::BrightWhite => Color::White,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: String, value: String },
}
