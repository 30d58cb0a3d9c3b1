use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::present::KeywordTier;

/// All available built-in theme names.
pub const BUILTIN_THEME_NAMES: &[&str] = &["default", "paper", "midnight"];

/// Data-driven theme: every color in one struct.
/// Constructed from built-in presets or loaded from TOML files.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ── Brand / Primary ──────────────────────────────────────
    pub accent: Color,
    pub bg_dark: Color,
    pub bg_panel: Color,

    // ── Text ─────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_dim: Color,
    pub text_muted: Color,

    // ── Semantic ─────────────────────────────────────────────
    pub danger: Color,
    pub warning: Color,

    // ── Verdict palettes ─────────────────────────────────────
    pub real_accent: Color,
    pub real_bg: Color,
    pub fake_accent: Color,
    pub fake_bg: Color,
    pub gauge_bg: Color,

    // ── Keyword tiers ────────────────────────────────────────
    pub tier_high: Color,
    pub tier_mid: Color,
    pub tier_low: Color,

    // ── Secondary (Gemini) panel ─────────────────────────────
    pub gemini_accent: Color,

    // ── Borders ──────────────────────────────────────────────
    pub border: Color,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────

    /// Default dark theme: brand blue with the web palette's red/emerald
    /// verdict colors.
    pub fn default_dark() -> Self {
        Self {
            name: "default".to_string(),
            accent: Color::Rgb(19, 91, 236),
            bg_dark: Color::Rgb(16, 22, 34),
            bg_panel: Color::Rgb(30, 41, 59),
            text_primary: Color::Rgb(226, 232, 240),
            text_dim: Color::Rgb(148, 163, 184),
            text_muted: Color::Rgb(100, 116, 139),
            danger: Color::Rgb(239, 68, 68),
            warning: Color::Rgb(245, 158, 11),
            real_accent: Color::Rgb(16, 185, 129),
            real_bg: Color::Rgb(22, 44, 40),
            fake_accent: Color::Rgb(239, 68, 68),
            fake_bg: Color::Rgb(48, 24, 28),
            gauge_bg: Color::Rgb(45, 55, 72),
            tier_high: Color::Rgb(129, 140, 248),
            tier_mid: Color::Rgb(94, 106, 210),
            tier_low: Color::Rgb(71, 85, 105),
            gemini_accent: Color::Rgb(217, 143, 255),
            border: Color::Rgb(51, 65, 85),
        }
    }

    /// Light palette for bright terminals.
    pub fn paper() -> Self {
        Self {
            name: "paper".to_string(),
            accent: Color::Rgb(19, 91, 236),
            bg_dark: Color::Rgb(246, 246, 248),
            bg_panel: Color::Rgb(255, 255, 255),
            text_primary: Color::Rgb(15, 23, 42),
            text_dim: Color::Rgb(71, 85, 105),
            text_muted: Color::Rgb(148, 163, 184),
            danger: Color::Rgb(220, 38, 38),
            warning: Color::Rgb(217, 119, 6),
            real_accent: Color::Rgb(5, 150, 105),
            real_bg: Color::Rgb(209, 250, 229),
            fake_accent: Color::Rgb(220, 38, 38),
            fake_bg: Color::Rgb(254, 226, 226),
            gauge_bg: Color::Rgb(226, 232, 240),
            tier_high: Color::Rgb(79, 70, 229),
            tier_mid: Color::Rgb(99, 102, 241),
            tier_low: Color::Rgb(148, 163, 184),
            gemini_accent: Color::Rgb(147, 51, 234),
            border: Color::Rgb(203, 213, 225),
        }
    }

    /// Deep blue-black variant.
    pub fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            accent: Color::Rgb(96, 165, 250),
            bg_dark: Color::Rgb(8, 10, 18),
            bg_panel: Color::Rgb(17, 22, 38),
            text_primary: Color::Rgb(203, 213, 225),
            text_dim: Color::Rgb(120, 130, 155),
            text_muted: Color::Rgb(70, 80, 105),
            danger: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(251, 191, 36),
            real_accent: Color::Rgb(52, 211, 153),
            real_bg: Color::Rgb(12, 36, 30),
            fake_accent: Color::Rgb(248, 113, 113),
            fake_bg: Color::Rgb(40, 16, 22),
            gauge_bg: Color::Rgb(30, 38, 60),
            tier_high: Color::Rgb(165, 180, 252),
            tier_mid: Color::Rgb(110, 125, 220),
            tier_low: Color::Rgb(60, 70, 100),
            gemini_accent: Color::Rgb(192, 132, 252),
            border: Color::Rgb(40, 50, 80),
        }
    }

    /// Look up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default_dark()),
            "paper" => Some(Self::paper()),
            "midnight" => Some(Self::midnight()),
            _ => None,
        }
    }

    /// Load a custom theme from a TOML file. Missing fields inherit from
    /// the default theme.
    pub fn from_toml_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let file: ThemeFile = toml::from_str(&content).ok()?;
        let name = path.file_stem()?.to_str()?.to_string();
        Some(file.into_theme(&name))
    }

    // ── Styles ───────────────────────────────────────────────

    /// Accent color for a verdict: red palette for fake, emerald for real.
    /// Pure function of `is_fake` only.
    pub fn verdict_accent(&self, is_fake: bool) -> Color {
        if is_fake {
            self.fake_accent
        } else {
            self.real_accent
        }
    }

    /// Background tint matching `verdict_accent`.
    pub fn verdict_bg(&self, is_fake: bool) -> Color {
        if is_fake {
            self.fake_bg
        } else {
            self.real_bg
        }
    }

    /// Chip color for a keyword tier.
    pub fn tier_color(&self, tier: KeywordTier) -> Color {
        match tier {
            KeywordTier::High => self.tier_high,
            KeywordTier::Mid => self.tier_mid,
            KeywordTier::Low => self.tier_low,
        }
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// ── TOML deserialization for custom themes ──────────────────

/// Intermediate struct for parsing theme TOML files.
/// All fields are optional — missing fields inherit from the default theme.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    accent: Option<String>,
    bg_dark: Option<String>,
    bg_panel: Option<String>,
    text_primary: Option<String>,
    text_dim: Option<String>,
    text_muted: Option<String>,
    danger: Option<String>,
    warning: Option<String>,
    real_accent: Option<String>,
    real_bg: Option<String>,
    fake_accent: Option<String>,
    fake_bg: Option<String>,
    gauge_bg: Option<String>,
    tier_high: Option<String>,
    tier_mid: Option<String>,
    tier_low: Option<String>,
    gemini_accent: Option<String>,
    border: Option<String>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Theme {
        let base = Theme::default_dark();
        Theme {
            name: name.to_string(),
            accent: parse_color(&self.accent).unwrap_or(base.accent),
            bg_dark: parse_color(&self.bg_dark).unwrap_or(base.bg_dark),
            bg_panel: parse_color(&self.bg_panel).unwrap_or(base.bg_panel),
            text_primary: parse_color(&self.text_primary).unwrap_or(base.text_primary),
            text_dim: parse_color(&self.text_dim).unwrap_or(base.text_dim),
            text_muted: parse_color(&self.text_muted).unwrap_or(base.text_muted),
            danger: parse_color(&self.danger).unwrap_or(base.danger),
            warning: parse_color(&self.warning).unwrap_or(base.warning),
            real_accent: parse_color(&self.real_accent).unwrap_or(base.real_accent),
            real_bg: parse_color(&self.real_bg).unwrap_or(base.real_bg),
            fake_accent: parse_color(&self.fake_accent).unwrap_or(base.fake_accent),
            fake_bg: parse_color(&self.fake_bg).unwrap_or(base.fake_bg),
            gauge_bg: parse_color(&self.gauge_bg).unwrap_or(base.gauge_bg),
            tier_high: parse_color(&self.tier_high).unwrap_or(base.tier_high),
            tier_mid: parse_color(&self.tier_mid).unwrap_or(base.tier_mid),
            tier_low: parse_color(&self.tier_low).unwrap_or(base.tier_low),
            gemini_accent: parse_color(&self.gemini_accent).unwrap_or(base.gemini_accent),
            border: parse_color(&self.border).unwrap_or(base.border),
        }
    }
}

/// Parse a hex color string like "#FF8800" or "FF8800" into a ratatui Color.
fn parse_color(opt: &Option<String>) -> Option<Color> {
    let s = opt.as_ref()?;
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_resolve() {
        for name in BUILTIN_THEME_NAMES {
            let theme = Theme::by_name(name).unwrap();
            assert_eq!(&theme.name, name);
        }
        assert!(Theme::by_name("nope").is_none());
    }

    #[test]
    fn verdict_palette_is_pure_function_of_is_fake() {
        let theme = Theme::default_dark();
        assert_eq!(theme.verdict_accent(true), theme.fake_accent);
        assert_eq!(theme.verdict_accent(false), theme.real_accent);
        assert_eq!(theme.verdict_bg(true), theme.fake_bg);
        assert_eq!(theme.verdict_bg(false), theme.real_bg);
    }

    #[test]
    fn parse_color_variants() {
        assert_eq!(
            parse_color(&Some("#135bec".to_string())),
            Some(Color::Rgb(19, 91, 236))
        );
        assert_eq!(
            parse_color(&Some("135BEC".to_string())),
            Some(Color::Rgb(19, 91, 236))
        );
        assert_eq!(parse_color(&Some("#fff".to_string())), None);
        assert_eq!(parse_color(&None), None);
    }

    #[test]
    fn theme_file_inherits_missing_fields() {
        let file: ThemeFile = toml::from_str(r##"accent = "#FF0000""##).unwrap();
        let theme = file.into_theme("custom");
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
        assert_eq!(theme.border, Theme::default_dark().border);
        assert_eq!(theme.name, "custom");
    }
}
