// App module - split into submodules for maintainability
// - mod.rs: App struct, constructors, accessors
// - event_loop.rs: Main run() loop and config watcher polling
// - rendering.rs: All UI drawing (draw method)
// - handlers.rs: Event routing and action dispatch

use std::io::{self, Stdout};

use arboard::Clipboard;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::cli::Cli;
use crate::components::about::About;
use crate::components::command_palette::{CommandPalette, CommandRegistry};
use crate::components::shelf::Shelf;
use crate::components::sidebar::{Sidebar, SidebarEntry};
use crate::components::status_bar::StatusBar;
use crate::config::{ConfigManager, ConfigWatcherMode};
use crate::content::ContentStore;
use crate::error::Result;
use crate::input::focus::FocusManager;
use crate::input::mode::InputMode;
use crate::shelf::{builtin_shelves, Collection, ContentKind};

mod event_loop;
mod handlers;
mod rendering;

/// Which page fills the main pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    About,
    Shelf(usize),
}

pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    should_quit: bool,
    dirty: bool,
    input_mode: InputMode,
    focus: FocusManager,
    config_manager: ConfigManager,
    config_watcher: Option<ConfigWatcherMode>,
    sidebar: Sidebar,
    shelves: Vec<Shelf>,
    about: About,
    page: Page,
    command_palette: CommandPalette,
    status_bar: StatusBar,
    clipboard: Option<Clipboard>,
}

impl App {
    pub fn with_cli(cli: &Cli) -> Result<Self> {
        let config_manager = ConfigManager::new(cli.theme.as_deref())?;

        let content_dir = cli
            .content_dir
            .clone()
            .or_else(|| config_manager.app_config().content.dir.clone());
        let store = ContentStore::load(content_dir.as_deref());

        let shelf_configs = builtin_shelves();
        let shelves: Vec<Shelf> = shelf_configs
            .iter()
            .cloned()
            .map(|config| {
                let collection = Collection::for_kind(config.kind, &store);
                Shelf::new(config, collection)
            })
            .collect();

        // A bad tag on the CLI is a hard error naming the tag; a bad tag in
        // the config file degrades to the first shelf with a warning.
        let start_kind = match &cli.shelf {
            Some(tag) => tag.parse::<ContentKind>()?,
            None => {
                let configured = &config_manager.app_config().content.start_shelf;
                configured.parse::<ContentKind>().unwrap_or_else(|e| {
                    tracing::warn!("invalid start_shelf in config: {}", e);
                    ContentKind::Book
                })
            }
        };
        let start_index = shelves
            .iter()
            .position(|s| s.config().kind == start_kind)
            .unwrap_or(0);

        let mut sidebar = Sidebar::new(shelves.len());
        sidebar.select_entry(SidebarEntry::Shelf(start_index));

        let config_watcher = if config_manager.app_config().general.watch_config {
            match ConfigWatcherMode::notify(config_manager.config_dir()) {
                Ok(watcher) => Some(watcher),
                Err(e) => {
                    tracing::warn!("config watcher unavailable, falling back to mtime polling: {}", e);
                    Some(ConfigWatcherMode::tick(
                        config_manager.config_dir().to_path_buf(),
                        2000,
                    ))
                }
            }
        } else {
            None
        };

        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("clipboard unavailable: {}", e);
                None
            }
        };

        let command_palette =
            CommandPalette::new(CommandRegistry::for_shelves(&shelf_configs));
        let about = About::new(store.profile.clone());

        let terminal = Self::setup_terminal()?;

        Ok(Self {
            terminal,
            should_quit: false,
            dirty: true,
            input_mode: InputMode::Normal,
            focus: FocusManager::new(),
            config_manager,
            config_watcher,
            sidebar,
            shelves,
            about,
            page: Page::Shelf(start_index),
            command_palette,
            status_bar: StatusBar::new(),
            clipboard,
        })
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(terminal)
    }

    fn restore_terminal(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }

    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn active_shelf_mut(&mut self) -> Option<&mut Shelf> {
        match self.page {
            Page::Shelf(idx) => self.shelves.get_mut(idx),
            Page::About => None,
        }
    }

    fn active_shelf(&self) -> Option<&Shelf> {
        match self.page {
            Page::Shelf(idx) => self.shelves.get(idx),
            Page::About => None,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.restore_terminal();
    }
}
