use std::path::PathBuf;

use crate::input::focus::FocusArea;
use crate::shelf::ContentKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Tick,

    FocusNext,
    FocusPrev,
    FocusArea(FocusArea),

    // Page navigation
    ShelfSelect(ContentKind),
    ShowAbout,

    // Sidebar
    SidebarSelectNext,
    SidebarSelectPrev,
    SidebarActivate,

    // Shelf interaction
    SelectNext,
    SelectPrev,
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollToTop,
    ScrollToBottom,
    SearchStart,
    SearchClose,
    SearchChanged,
    CopyLink,

    // Command palette
    PaletteShow,
    PaletteHide,

    // Configuration
    ThemeReload,
    ConfigChanged(PathBuf),

    None,
}
