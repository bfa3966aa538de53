// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the bytescope CLI.
//!
//! The colored dump uses the same layout as `ByteBuffer::dump`, with each
//! byte tinted by class: zero bytes dim, printable ASCII green, whitespace
//! and control bytes yellow, everything else blue. OneDark for dark
//! terminals, One Light for light ones.
//!
//! # Theme detection order
//!
//! 1. `BYTESCOPE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme
//!
//! Colors are off when `NO_COLOR` is set, `--no-color` is passed, or stdout
//! is not a TTY.

use std::fmt::Write as _;
use std::sync::OnceLock;

use bytescope::{ByteBuffer, DUMP_WIDTH};

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("BYTESCOPE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used
pub fn use_colors(disabled_by_flag: bool) -> bool {
    if disabled_by_flag || std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORED DUMP
// ═══════════════════════════════════════════════════════════════════════════

fn byte_color(byte: u8) -> String {
    match byte {
        0x00 => GRAY(),
        0x20..=0x7E => GREEN(),
        0x01..=0x1F | 0x7F => YELLOW(),
        _ => BLUE(),
    }
}

/// Render the tabular dump with ANSI colors.
///
/// Column positions match the plain dump exactly; only escape codes are
/// added around each cell.
pub fn colored_dump(buffer: &ByteBuffer) -> String {
    let mut out = String::new();
    let gray = GRAY();

    let _ = write!(out, "{}{}      ", BOLD, CYAN());
    for column in 0..DUMP_WIDTH {
        let _ = write!(out, "{:02X} ", column);
    }
    let _ = writeln!(out, " ASCII{}", RESET);

    for (row, chunk) in buffer.as_slice().chunks(DUMP_WIDTH).enumerate() {
        let _ = write!(out, "{}{:04X}{}  ", gray, row * DUMP_WIDTH, RESET);
        for &byte in chunk {
            let _ = write!(out, "{}{:02X}{} ", byte_color(byte), byte, RESET);
        }
        for _ in chunk.len()..DUMP_WIDTH {
            out.push_str("   ");
        }
        out.push(' ');
        for &byte in chunk {
            let c = if (0x20..=0x7E).contains(&byte) {
                byte as char
            } else {
                '.'
            };
            let _ = write!(out, "{}{}{}", byte_color(byte), c, RESET);
        }
        out.push('\n');
    }
    out
}

/// Strip ANSI escape codes (used to compare against the plain dump).
#[cfg(test)]
fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            out.push(c);
        }
    }
    out
}
