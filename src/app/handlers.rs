// Event routing and action dispatch

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

use super::{App, Page};
use crate::action::Action;
use crate::components::search::SearchAction;
use crate::components::sidebar::SidebarEntry;
use crate::components::Component;
use crate::error::Result;
use crate::input::focus::FocusArea;
use crate::input::mode::InputMode;

impl App {
    /// Turn a raw terminal event into an action, honoring input mode and
    /// focus. Layered: palette first, then search entry, then global keys,
    /// then the focused component.
    pub(super) fn route_event(&mut self, event: &CrosstermEvent) -> Option<Action> {
        if let CrosstermEvent::Resize(_, _) = event {
            return Some(Action::None);
        }

        // Ignore key releases (Windows terminals report both edges).
        if let CrosstermEvent::Key(key) = event {
            if key.kind == KeyEventKind::Release {
                return None;
            }
        }

        if self.command_palette.is_visible() {
            // The palette mutates its own query state on most keys; redraw
            // regardless of whether a command fired.
            let action = self.command_palette.handle_event(event);
            return Some(action.unwrap_or(Action::None));
        }

        if self.input_mode.is_search() {
            if let CrosstermEvent::Key(key) = event {
                return self.route_search_key(*key);
            }
            return None;
        }

        debug_assert!(self.input_mode.is_normal());

        if let Some(action) = self.route_global_key(event) {
            return Some(action);
        }

        match self.focus.current() {
            FocusArea::Sidebar => self.sidebar.handle_event(event),
            FocusArea::Page => match self.page {
                Page::About => self.about.handle_event(event),
                Page::Shelf(idx) => self.shelves.get_mut(idx)?.handle_event(event),
            },
        }
        // Mouse clicks land on the sidebar from anywhere.
        .or_else(|| match event {
            CrosstermEvent::Mouse(_) if !self.focus.is_focused(FocusArea::Sidebar) => {
                self.sidebar.handle_event(event)
            }
            _ => None,
        })
    }

    fn route_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        let shelf = self.active_shelf_mut()?;
        match shelf.search_mut().handle_key(key) {
            SearchAction::Changed => Some(Action::SearchChanged),
            SearchAction::Close | SearchAction::Accept => Some(Action::SearchClose),
            SearchAction::None => None,
        }
    }

    fn route_global_key(&mut self, event: &CrosstermEvent) -> Option<Action> {
        let key = match event {
            CrosstermEvent::Key(key) => key,
            _ => return None,
        };

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Char(':') => Some(Action::PaletteShow),
            KeyCode::Char('a') => Some(Action::ShowAbout),
            KeyCode::Char(c @ '1'..='6') => {
                let idx = (c as usize) - ('1' as usize);
                self.shelves
                    .get(idx)
                    .map(|shelf| Action::ShelfSelect(shelf.config().kind))
            }
            KeyCode::Esc => {
                // Esc drops an applied filter on the open shelf.
                let shelf = self.active_shelf_mut()?;
                if shelf.query().is_empty() {
                    None
                } else {
                    shelf.search_mut().deactivate();
                    Some(Action::SearchClose)
                }
            }
            _ => None,
        }
    }

    pub(super) fn dispatch(&mut self, action: Action) -> Result<()> {
        match &action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Tick => {}
            Action::None => {}

            Action::FocusNext => self.focus.next(),
            Action::FocusPrev => self.focus.prev(),
            Action::FocusArea(area) => self.focus.focus(*area),

            Action::ShowAbout => {
                self.page = Page::About;
                self.sidebar.select_entry(SidebarEntry::About);
                self.focus.focus(FocusArea::Page);
            }
            Action::ShelfSelect(kind) => {
                if let Some(idx) = self.shelves.iter().position(|s| s.config().kind == *kind) {
                    self.page = Page::Shelf(idx);
                    self.sidebar.select_entry(SidebarEntry::Shelf(idx));
                    self.focus.focus(FocusArea::Page);
                }
            }

            Action::SidebarSelectNext | Action::SidebarSelectPrev => {
                self.sidebar.update(&action);
            }
            Action::SidebarActivate => {
                let follow_up = match self.sidebar.selected_entry() {
                    SidebarEntry::About => Action::ShowAbout,
                    SidebarEntry::Shelf(idx) => self
                        .shelves
                        .get(idx)
                        .map(|shelf| Action::ShelfSelect(shelf.config().kind))
                        .unwrap_or(Action::None),
                };
                self.dispatch(follow_up)?;
            }

            Action::SearchStart => {
                if let Some(shelf) = self.active_shelf_mut() {
                    shelf.search_mut().activate();
                    self.input_mode = InputMode::Search;
                }
            }
            Action::SearchClose => {
                self.input_mode = InputMode::Normal;
                if let Some(shelf) = self.active_shelf_mut() {
                    shelf.update(&Action::SearchClose);
                }
            }
            Action::SearchChanged => {
                if let Some(shelf) = self.active_shelf_mut() {
                    shelf.update(&Action::SearchChanged);
                }
            }

            Action::SelectNext
            | Action::SelectPrev
            | Action::ScrollUp(_)
            | Action::ScrollDown(_)
            | Action::ScrollToTop
            | Action::ScrollToBottom => match self.page {
                Page::About => self.about.update(&action),
                Page::Shelf(idx) => {
                    if let Some(shelf) = self.shelves.get_mut(idx) {
                        shelf.update(&action);
                    }
                }
            },

            Action::CopyLink => self.copy_selected_link(),

            Action::PaletteShow => {
                self.command_palette.show();
                self.input_mode = InputMode::Palette;
            }
            Action::PaletteHide => {
                self.input_mode = InputMode::Normal;
            }

            Action::ThemeReload => {
                self.config_manager.reload_theme();
                tracing::info!("theme reloaded: {}", self.config_manager.theme().name);
            }
            Action::ConfigChanged(path) => {
                tracing::info!("config changed on disk: {}", path.display());
                self.config_manager.reload_file(path);
            }
        }

        // Leaving the palette any way but Esc also returns to normal mode.
        if !self.command_palette.is_visible() && self.input_mode.is_palette() {
            self.input_mode = InputMode::Normal;
        }

        Ok(())
    }

    fn copy_selected_link(&mut self) {
        let link = match self.active_shelf().and_then(|shelf| shelf.selected_link()) {
            Some(link) => link,
            None => return,
        };

        match &mut self.clipboard {
            Some(clipboard) => match clipboard.set_text(link.clone()) {
                Ok(()) => tracing::info!("copied link: {}", link),
                Err(e) => tracing::warn!("clipboard write failed: {}", e),
            },
            None => tracing::warn!("no clipboard; cannot copy {}", link),
        }
    }
}
