use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,
    pub bg3: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,
    pub grey2: Color,

    // Palette colors
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub aqua: Color,
    pub blue: Color,
    pub purple: Color,

    // Semantic colors
    pub selection: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub accent: Color,
    /// Second accent, paired with `accent` for gradient-style headings
    pub accent_alt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::midnight()
    }
}

impl Theme {
    /// Fade a foreground color toward the page background.
    ///
    /// `alpha` 1.0 returns the color unchanged, 0.0 returns `bg0`. This is
    /// how opacity values from the animator land on terminal cells, which
    /// have no alpha channel of their own.
    pub fn fade(&self, color: Color, alpha: f64) -> Color {
        blend(self.bg0, color, alpha)
    }

    /// Same fade but toward an explicit backdrop (e.g. a card surface).
    pub fn fade_onto(&self, color: Color, backdrop: Color, alpha: f64) -> Color {
        blend(backdrop, color, alpha)
    }

    /// Map a named badge color from content data onto the palette.
    /// Unknown names fall back to the accent color.
    pub fn badge_color(&self, name: &str) -> Color {
        match name {
            "red" => self.red,
            "orange" => self.orange,
            "yellow" => self.yellow,
            "green" => self.green,
            "aqua" | "cyan" | "teal" => self.aqua,
            "blue" => self.blue,
            "purple" | "indigo" => self.purple,
            "pink" => self.red,
            "grey" | "gray" => self.grey2,
            _ => self.accent,
        }
    }
}

/// Linear mix from `a` (t = 0) to `b` (t = 1) in RGB space.
/// Non-RGB colors cannot be mixed; the nearer endpoint wins.
pub fn blend(a: Color, b: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(ar, ag, ab), Color::Rgb(br, bg, bb)) => {
            let mix = |x: u8, y: u8| -> u8 {
                (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8
            };
            Color::Rgb(mix(ar, br), mix(ag, bg), mix(ab, bb))
        }
        _ => {
            if t < 0.5 {
                a
            } else {
                b
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
    }

    #[test]
    fn test_blend_midpoint() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_fade_full_alpha_is_identity() {
        let theme = Theme::default();
        let c = Color::Rgb(0x12, 0x34, 0x56);
        assert_eq!(theme.fade(c, 1.0), c);
    }

    #[test]
    fn test_fade_zero_alpha_is_background() {
        let theme = Theme::default();
        assert_eq!(theme.fade(Color::Rgb(0xff, 0xff, 0xff), 0.0), theme.bg0);
    }

    #[test]
    fn test_badge_color_known_and_unknown() {
        let theme = Theme::default();
        assert_eq!(theme.badge_color("green"), theme.green);
        assert_eq!(theme.badge_color("teal"), theme.aqua);
        assert_eq!(theme.badge_color("chartreuse"), theme.accent);
    }
}
