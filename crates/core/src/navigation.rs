//! Navigation state machine.
//!
//! `NavigationController` owns the current path, the selection and the
//! scroll offset. Each [`Action`] is processed to completion, including any
//! directory rescan, before the visible window is recomputed. A directory
//! that cannot be read leaves the previous path and listing in place.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::action::{Action, Transition};
use crate::entry::{Entry, PARENT_NAME};
use crate::error::{BrowserError, Result};
use crate::provider::FileSystem;
use crate::store::{EntryStore, DEFAULT_CAPACITY};
use crate::view::BrowserView;
use crate::viewport::{ScrollViewport, VisibleWindow};

/// Knobs for a [`NavigationController`].
#[derive(Debug, Clone)]
pub struct NavigatorSettings {
    /// Initial capacity of the entry store
    pub initial_capacity: usize,
    /// Names starting with this prefix are left out of listings
    /// (empty shows everything)
    pub hidden_prefix: String,
    /// Rows available for entries and indicators
    pub rows: usize,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            hidden_prefix: ".".to_string(),
            rows: 20,
        }
    }
}

pub struct NavigationController<F> {
    fs: F,
    path: PathBuf,
    store: EntryStore,
    selection: usize,
    scroll_offset: usize,
    viewport: ScrollViewport,
    window: VisibleWindow,
    hidden_prefix: String,
}

impl<F: FileSystem> NavigationController<F> {
    /// Open the browser at `path`.
    ///
    /// Fails if the entry store cannot be allocated or the starting
    /// directory cannot be listed.
    pub fn new(fs: F, path: impl Into<PathBuf>, settings: &NavigatorSettings) -> Result<Self> {
        let path = path.into();
        let store = EntryStore::with_capacity(settings.initial_capacity)?;
        let viewport = ScrollViewport::new(settings.rows);

        let mut nav = Self {
            fs,
            path,
            store,
            selection: 0,
            scroll_offset: 0,
            window: viewport.layout_at(0, 0),
            viewport,
            hidden_prefix: settings.hidden_prefix.clone(),
        };

        let names = nav.read_listing(&nav.path)?;
        nav.populate(names)?;
        nav.update_window();
        log::info!(
            "Browsing {} ({} entries)",
            nav.path.display(),
            nav.store.len()
        );
        Ok(nav)
    }

    /// Current directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Index of the selected entry in the listing
    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Current listing, `..` first
    pub fn entries(&self) -> &EntryStore {
        &self.store
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.store.get(self.selection)
    }

    /// Window computed after the last action
    pub fn window(&self) -> &VisibleWindow {
        &self.window
    }

    pub fn viewport(&self) -> ScrollViewport {
        self.viewport
    }

    /// Change the number of rows available for the listing
    pub fn resize(&mut self, rows: usize) {
        if self.viewport.rows() != rows {
            log::debug!("Viewport resized to {} rows", rows);
            self.viewport.resize(rows);
        }
        self.update_window();
    }

    /// Apply one user action.
    ///
    /// Only an allocation failure is returned as an error; unreadable
    /// directories are logged and ignored.
    pub fn handle(&mut self, action: Action) -> Result<Transition> {
        match action {
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::Activate => self.activate()?,
            Action::Ascend => self.ascend()?,
            Action::Refresh => self.refresh()?,
            Action::Quit => return Ok(Transition::Quit),
        }
        self.update_window();
        Ok(Transition::Continue)
    }

    /// Snapshot of what should be on screen
    pub fn view(&self) -> BrowserView<'_> {
        let visible = self.window.visible.clone();
        let selected = self
            .window
            .contains(self.selection)
            .then(|| self.selection - visible.start);
        BrowserView {
            path: &self.path,
            entries: self.store.slice(visible.clone()),
            selected,
            first_index: visible.start,
            total: self.store.len(),
            top_indicator: self.window.top_indicator,
            bottom_indicator: self.window.bottom_indicator,
        }
    }

    fn move_up(&mut self) {
        let count = self.store.len();
        if count == 0 {
            return;
        }
        self.selection = if self.selection > 0 {
            self.selection - 1
        } else {
            count - 1
        };
    }

    fn move_down(&mut self) {
        let count = self.store.len();
        if count == 0 {
            return;
        }
        self.selection = if self.selection + 1 < count {
            self.selection + 1
        } else {
            0
        };
    }

    fn activate(&mut self) -> Result<()> {
        if self.selection == 0 {
            return self.ascend();
        }

        let target = match self.store.try_get(self.selection) {
            Ok(entry) => self.path.join(entry.raw_name()),
            Err(err) => {
                log::warn!("Cannot activate selection: {}", err);
                return Ok(());
            }
        };

        if self.fs.is_directory(&target) {
            self.change_directory(target)
        } else {
            log::debug!("{} is not a directory, ignoring", target.display());
            Ok(())
        }
    }

    fn ascend(&mut self) -> Result<()> {
        match self.path.parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.change_directory(parent)
            }
            None => {
                // Already at the root
                self.selection = 0;
                self.scroll_offset = 0;
                Ok(())
            }
        }
    }

    /// Re-read the current directory, keeping the scroll position.
    fn refresh(&mut self) -> Result<()> {
        match self.read_listing(&self.path) {
            Ok(names) => self.populate(names),
            Err(err) => {
                log::warn!("{}", err);
                Ok(())
            }
        }
    }

    fn change_directory(&mut self, target: PathBuf) -> Result<()> {
        // List first so a failure leaves the old path and entries intact
        let names = match self.read_listing(&target) {
            Ok(names) => names,
            Err(err) => {
                log::warn!("{}", err);
                return Ok(());
            }
        };

        self.path = target;
        self.selection = 0;
        self.scroll_offset = 0;
        self.populate(names)?;
        log::debug!(
            "Entered {} ({} entries)",
            self.path.display(),
            self.store.len()
        );
        Ok(())
    }

    fn read_listing(&self, path: &Path) -> Result<Vec<OsString>> {
        self.fs.list(path).map_err(|source| BrowserError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rebuild the store from raw names: `..` first, hidden names dropped,
    /// everything else described once and appended in listing order.
    fn populate(&mut self, names: Vec<OsString>) -> Result<()> {
        self.store.clear();
        self.store.push(Entry::parent())?;

        for name in names {
            if self.is_hidden(&name) {
                continue;
            }
            let details = self.fs.describe(&self.path.join(&name));
            self.store.push(Entry::from_os_name(name, details))?;
        }

        self.clamp_selection();
        Ok(())
    }

    fn is_hidden(&self, name: &OsStr) -> bool {
        name == "."
            || name == PARENT_NAME
            || (!self.hidden_prefix.is_empty()
                && name
                    .as_encoded_bytes()
                    .starts_with(self.hidden_prefix.as_bytes()))
    }

    fn clamp_selection(&mut self) {
        self.selection = self.selection.min(self.store.len().saturating_sub(1));
    }

    fn update_window(&mut self) {
        let window = self
            .viewport
            .compute(self.store.len(), self.selection, self.scroll_offset);
        self.scroll_offset = window.scroll_offset;
        self.window = window;
    }
}
