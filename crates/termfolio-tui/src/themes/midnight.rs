//! Midnight theme, the default.
//!
//! Dark slate backgrounds with a blue/purple accent pair.

use crate::theme::Theme;
use ratatui::style::Color;

pub fn midnight() -> Theme {
    Theme {
        bg0: Color::Rgb(0x0f, 0x17, 0x2a),
        bg1: Color::Rgb(0x1e, 0x29, 0x3b),
        bg2: Color::Rgb(0x33, 0x41, 0x55),
        bg3: Color::Rgb(0x47, 0x55, 0x69),
        fg0: Color::Rgb(0xf1, 0xf5, 0xf9),
        fg1: Color::Rgb(0xcb, 0xd5, 0xe1),
        grey0: Color::Rgb(0x47, 0x55, 0x69),
        grey1: Color::Rgb(0x64, 0x74, 0x8b),
        grey2: Color::Rgb(0x94, 0xa3, 0xb8),
        red: Color::Rgb(0xef, 0x44, 0x44),
        orange: Color::Rgb(0xf9, 0x73, 0x16),
        yellow: Color::Rgb(0xea, 0xb3, 0x08),
        green: Color::Rgb(0x22, 0xc5, 0x5e),
        aqua: Color::Rgb(0x06, 0xb6, 0xd4),
        blue: Color::Rgb(0x3b, 0x82, 0xf6),
        purple: Color::Rgb(0xa8, 0x55, 0xf7),
        selection: Color::Rgb(0x33, 0x41, 0x55),
        error: Color::Rgb(0xef, 0x44, 0x44),
        success: Color::Rgb(0x22, 0xc5, 0x5e),
        warning: Color::Rgb(0xf9, 0x73, 0x16),
        info: Color::Rgb(0x06, 0xb6, 0xd4),
        accent: Color::Rgb(0x3b, 0x82, 0xf6),
        accent_alt: Color::Rgb(0xa8, 0x55, 0xf7),
    }
}
