//! Snapshot handed to the renderer on every redraw.

use std::path::Path;

use crate::entry::Entry;

/// What to draw: the controller decides the content, the renderer decides
/// the layout.
#[derive(Debug, Clone, Copy)]
pub struct BrowserView<'a> {
    /// Directory being browsed
    pub path: &'a Path,
    /// Visible entries, top to bottom
    pub entries: &'a [Entry],
    /// Position of the selected entry within `entries`
    pub selected: Option<usize>,
    /// Index of `entries[0]` in the full listing
    pub first_index: usize,
    /// Size of the full listing
    pub total: usize,
    pub top_indicator: bool,
    pub bottom_indicator: bool,
}

impl BrowserView<'_> {
    /// Entries above the window
    pub fn hidden_above(&self) -> usize {
        self.first_index
    }

    /// Entries below the window
    pub fn hidden_below(&self) -> usize {
        self.total
            .saturating_sub(self.first_index + self.entries.len())
    }
}

/// Something that can draw a [`BrowserView`].
pub trait Renderer {
    type Error;

    fn render(&mut self, view: &BrowserView<'_>) -> Result<(), Self::Error>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn render(&mut self, view: &BrowserView<'_>) -> Result<(), Self::Error> {
        (**self).render(view)
    }
}
