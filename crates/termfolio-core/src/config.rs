use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::motion::easing::EasingType;
use crate::motion::lifecycle::EngineOptions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            motion: MotionConfig::default(),
            ui: UiConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (logs)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Optional TOML file overriding the built-in page content
    #[serde(default)]
    pub content_path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            content_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Enable smooth scrolling (virtual offset lags raw input)
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Smoothing duration in milliseconds
    #[serde(default = "default_smooth_time")]
    pub smooth_time_ms: u64,
    /// Animation frame rate while motion is active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Rows per scroll step (j/k, wheel)
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
    /// Easing curve for smooth scrolling
    #[serde(default)]
    pub easing: EasingType,
    /// Disable decorative motion; scroll input is presented raw
    #[serde(default)]
    pub reduced_motion: bool,
    /// Seed for the hero particle field
    #[serde(default = "default_particle_seed")]
    pub particle_seed: u64,
    /// Number of hero particles
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            smooth_time_ms: default_smooth_time(),
            animation_fps: default_animation_fps(),
            scroll_step: default_scroll_step(),
            easing: EasingType::default(),
            reduced_motion: false,
            particle_seed: default_particle_seed(),
            particle_count: default_particle_count(),
        }
    }
}

impl MotionConfig {
    /// Engine tunables derived from this section.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            smooth_enabled: self.smooth_enabled,
            smooth_time_ms: self.smooth_time_ms,
            reduced_motion: self.reduced_motion,
            particle_seed: self.particle_seed,
            particle_count: self.particle_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the page progress bar along the top edge
    #[serde(default = "default_true")]
    pub show_progress_bar: bool,
    /// Show the status bar
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_progress_bar: default_true(),
            show_status_bar: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "midnight", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            // Accept a simple string as just the theme name
            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            // Accept a map/struct with 'name' and optional 'colors'
            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            // Ignore unknown fields
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Secondary background (cards, panels)
    pub bg1: Option<String>,
    /// Tertiary background (selection, highlights)
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground (slightly dimmer)
    pub fg1: Option<String>,
    /// Accent color (headings, active dot, bar fills)
    pub accent: Option<String>,
    /// Secondary accent (gradients, badges)
    pub accent_alt: Option<String>,
    /// Selection background
    pub selection: Option<String>,
    /// Error color
    pub error: Option<String>,
    /// Success color
    pub success: Option<String>,
    /// Warning color
    pub warning: Option<String>,
    /// Info color
    pub info: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    // Application control
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Scrolling
    /// Scroll down by one step
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll up by one step
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll half page down
    #[serde(default = "default_key_half_page_down")]
    pub half_page_down: String,
    /// Scroll half page up
    #[serde(default = "default_key_half_page_up")]
    pub half_page_up: String,
    /// Jump to top of the page
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to bottom of the page
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Section navigation
    /// Smooth-scroll to the next section
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Smooth-scroll to the previous section
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,

    // Project cards
    /// Show the next project card
    #[serde(default = "default_key_next_card")]
    pub next_card: String,
    /// Show the previous project card
    #[serde(default = "default_key_prev_card")]
    pub prev_card: String,

    // Actions
    /// Re-resolve scroll regions against the current layout
    #[serde(default = "default_key_refresh")]
    pub refresh: String,
    /// Toggle reduced motion
    #[serde(default = "default_key_toggle_motion")]
    pub toggle_motion: String,
    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            half_page_down: default_key_half_page_down(),
            half_page_up: default_key_half_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            next_card: default_key_next_card(),
            prev_card: default_key_prev_card(),
            refresh: default_key_refresh(),
            toggle_motion: default_key_toggle_motion(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String {
    "q".to_string()
}
fn default_key_scroll_down() -> String {
    "j".to_string()
}
fn default_key_scroll_up() -> String {
    "k".to_string()
}
fn default_key_half_page_down() -> String {
    "d".to_string()
}
fn default_key_half_page_up() -> String {
    "u".to_string()
}
fn default_key_jump_to_top() -> String {
    "gg".to_string()
}
fn default_key_jump_to_bottom() -> String {
    "G".to_string()
}
fn default_key_next_section() -> String {
    "J".to_string()
}
fn default_key_prev_section() -> String {
    "K".to_string()
}
fn default_key_next_card() -> String {
    "l".to_string()
}
fn default_key_prev_card() -> String {
    "h".to_string()
}
fn default_key_refresh() -> String {
    "r".to_string()
}
fn default_key_toggle_motion() -> String {
    "m".to_string()
}
fn default_key_help() -> String {
    "?".to_string()
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("termfolio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_smooth_time() -> u64 {
    800 // matches the page's scroll smoothing
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_step() -> u16 {
    3
}

fn default_particle_seed() -> u64 {
    1977
}

fn default_particle_count() -> usize {
    48
}

fn default_tick_rate() -> u64 {
    100
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path. Unlike `load`, a missing
    /// file is an error here since the caller asked for it by name.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let body =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        let content = format!(
            "# Termfolio configuration\n# Every key is optional; run `termfolio themes` for theme names.\n\n{body}"
        );
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/termfolio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("termfolio")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the content override path (with tilde expansion)
    pub fn content_path(&self) -> Option<PathBuf> {
        self.general.content_path.as_ref().map(|p| expand_tilde(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.motion.smooth_enabled);
        assert_eq!(config.motion.smooth_time_ms, 800);
        assert_eq!(config.motion.scroll_step, 3);
        assert_eq!(config.ui.theme.name, "midnight");
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_theme_accepts_plain_string() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "nord"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_accepts_map_with_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "midnight"

            [ui.theme.colors]
            accent = "#6c63ff"
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "midnight");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#6c63ff"));
    }

    #[test]
    fn test_partial_motion_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [motion]
            reduced_motion = true
            easing = "quad"
            "#,
        )
        .unwrap();
        assert!(config.motion.reduced_motion);
        assert_eq!(config.motion.easing, EasingType::Quad);
        assert_eq!(config.motion.smooth_time_ms, 800);
    }
}
