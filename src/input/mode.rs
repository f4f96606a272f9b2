#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    Palette,
}

impl InputMode {
    pub fn is_normal(&self) -> bool {
        matches!(self, InputMode::Normal)
    }

    pub fn is_search(&self) -> bool {
        matches!(self, InputMode::Search)
    }

    pub fn is_palette(&self) -> bool {
        matches!(self, InputMode::Palette)
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Normal => "NORMAL",
            InputMode::Search => "SEARCH",
            InputMode::Palette => "PALETTE",
        }
    }
}
