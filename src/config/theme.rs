use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub focus: FocusStyle,
    pub sidebar: SidebarStyle,
    pub shelf: ShelfStyle,
    pub command_palette: CommandPaletteStyle,
    pub status_bar: StatusBarStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
            focus: FocusStyle::default(),
            sidebar: SidebarStyle::default(),
            shelf: ShelfStyle::default(),
            command_palette: CommandPaletteStyle::default(),
            status_bar: StatusBarStyle::default(),
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self::default()
    }

    pub fn vibrant() -> Self {
        Self {
            name: "vibrant".to_string(),
            colors: ThemeColors {
                background: HexColor::new("#0a0a0f"),
                foreground: HexColor::new("#e0e0e0"),
                primary: HexColor::new("#ff6b6b"),
                secondary: HexColor::new("#4ecdc4"),
                accent: HexColor::new("#ffe66d"),
                success: HexColor::new("#95e1a3"),
                warning: HexColor::new("#ffd93d"),
                error: HexColor::new("#ff6b6b"),
                muted: HexColor::new("#6c757d"),
            },
            focus: FocusStyle {
                focused_border: HexColor::new("#ff6b6b"),
                unfocused_border: HexColor::new("#3d3d4d"),
                focused_title: HexColor::new("#ffe66d"),
                unfocused_title: HexColor::new("#6c757d"),
                use_bold_focused: true,
                focus_indicator: "▶".to_string(),
            },
            ..Default::default()
        }
    }

    /// Look up a preset by name; unknown names get the default theme.
    pub fn preset(name: &str) -> Self {
        match name {
            "vibrant" => Self::vibrant(),
            _ => Self::dark(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub background: HexColor,
    pub foreground: HexColor,
    pub primary: HexColor,
    pub secondary: HexColor,
    pub accent: HexColor,
    pub success: HexColor,
    pub warning: HexColor,
    pub error: HexColor,
    pub muted: HexColor,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: HexColor::new("#1a1b26"),
            foreground: HexColor::new("#c0caf5"),
            primary: HexColor::new("#7aa2f7"),
            secondary: HexColor::new("#9ece6a"),
            accent: HexColor::new("#bb9af7"),
            success: HexColor::new("#9ece6a"),
            warning: HexColor::new("#e0af68"),
            error: HexColor::new("#f7768e"),
            muted: HexColor::new("#565f89"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusStyle {
    pub focused_border: HexColor,
    pub unfocused_border: HexColor,
    pub focused_title: HexColor,
    pub unfocused_title: HexColor,
    pub use_bold_focused: bool,
    pub focus_indicator: String,
}

impl Default for FocusStyle {
    fn default() -> Self {
        Self {
            focused_border: HexColor::new("#7aa2f7"),
            unfocused_border: HexColor::new("#3b4261"),
            focused_title: HexColor::new("#bb9af7"),
            unfocused_title: HexColor::new("#565f89"),
            use_bold_focused: true,
            focus_indicator: "●".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarStyle {
    pub item_fg: HexColor,
    pub selected_fg: HexColor,
    pub selected_bg: HexColor,
    pub count_fg: HexColor,
    pub active_marker_fg: HexColor,
}

impl Default for SidebarStyle {
    fn default() -> Self {
        Self {
            item_fg: HexColor::new("#c0caf5"),
            selected_fg: HexColor::new("#1a1b26"),
            selected_bg: HexColor::new("#7aa2f7"),
            count_fg: HexColor::new("#565f89"),
            active_marker_fg: HexColor::new("#9ece6a"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfStyle {
    pub title_fg: HexColor,
    pub meta_fg: HexColor,
    pub note_fg: HexColor,
    pub section_fg: HexColor,
    pub tag_fg: HexColor,
    pub recommended_fg: HexColor,
    pub link_fg: HexColor,
    pub empty_fg: HexColor,
    /// Book spines cycle through these.
    pub spine_colors: Vec<HexColor>,
}

impl Default for ShelfStyle {
    fn default() -> Self {
        Self {
            title_fg: HexColor::new("#c0caf5"),
            meta_fg: HexColor::new("#7aa2f7"),
            note_fg: HexColor::new("#565f89"),
            section_fg: HexColor::new("#bb9af7"),
            tag_fg: HexColor::new("#9ece6a"),
            recommended_fg: HexColor::new("#e0af68"),
            link_fg: HexColor::new("#7dcfff"),
            empty_fg: HexColor::new("#565f89"),
            spine_colors: vec![
                HexColor::new("#7aa2f7"),
                HexColor::new("#9ece6a"),
                HexColor::new("#bb9af7"),
                HexColor::new("#e0af68"),
                HexColor::new("#f7768e"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandPaletteStyle {
    pub border: HexColor,
    pub input_fg: HexColor,
    pub item_fg: HexColor,
    pub selected_fg: HexColor,
    pub selected_bg: HexColor,
    pub match_highlight: HexColor,
    pub description_fg: HexColor,
}

impl Default for CommandPaletteStyle {
    fn default() -> Self {
        Self {
            border: HexColor::new("#7aa2f7"),
            input_fg: HexColor::new("#c0caf5"),
            item_fg: HexColor::new("#c0caf5"),
            selected_fg: HexColor::new("#1a1b26"),
            selected_bg: HexColor::new("#7aa2f7"),
            match_highlight: HexColor::new("#bb9af7"),
            description_fg: HexColor::new("#565f89"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarStyle {
    pub bg: HexColor,
    pub fg: HexColor,
    pub mode_fg: HexColor,
    pub tip_fg: HexColor,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            bg: HexColor::new("#24283b"),
            fg: HexColor::new("#c0caf5"),
            mode_fg: HexColor::new("#9ece6a"),
            tip_fg: HexColor::new("#565f89"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn new(hex: &str) -> Self {
        Self(hex.to_string())
    }

    pub fn to_color(&self) -> Color {
        self.parse_hex().unwrap_or(Color::Reset)
    }

    fn parse_hex(&self) -> Option<Color> {
        let hex = self.0.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color::Rgb(r, g, b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self("#ffffff".to_string())
    }
}

impl Theme {
    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.focus.focused_border.to_color()
        } else {
            self.focus.unfocused_border.to_color()
        };

        let mut style = Style::default().fg(color);
        if focused && self.focus.use_bold_focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    pub fn title_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.focus.focused_title.to_color()
        } else {
            self.focus.unfocused_title.to_color()
        };

        let mut style = Style::default().fg(color);
        if focused && self.focus.use_bold_focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    pub fn spine_color(&self, index: usize) -> Color {
        if self.shelf.spine_colors.is_empty() {
            return self.colors.primary.to_color();
        }
        self.shelf.spine_colors[index % self.shelf.spine_colors.len()].to_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parsing() {
        let color = HexColor::new("#ff0000");
        assert_eq!(color.to_color(), Color::Rgb(255, 0, 0));

        let color = HexColor::new("#00ff00");
        assert_eq!(color.to_color(), Color::Rgb(0, 255, 0));

        let color = HexColor::new("#0000ff");
        assert_eq!(color.to_color(), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_hex_color_invalid_falls_back_to_reset() {
        assert_eq!(HexColor::new("#xyz").to_color(), Color::Reset);
        assert_eq!(HexColor::new("red").to_color(), Color::Reset);
    }

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.name, "default");
        assert!(theme.focus.use_bold_focused);
    }

    #[test]
    fn test_theme_serialization() {
        let theme = Theme::default();
        let toml_str = toml::to_string_pretty(&theme).unwrap();
        let parsed: Theme = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.name, theme.name);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(Theme::preset("vibrant").name, "vibrant");
        assert_eq!(Theme::preset("nope").name, "default");
    }

    #[test]
    fn test_spine_colors_cycle() {
        let theme = Theme::default();
        let n = theme.shelf.spine_colors.len();
        assert_eq!(theme.spine_color(0), theme.spine_color(n));
    }
}
