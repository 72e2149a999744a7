//! Drawing the browser window.

use std::path::Path;

use anyhow::Result;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use unicode_width::UnicodeWidthStr;

use tbrowse_core::entry::{KIND_DIRECTORY, KIND_WIDTH, SIZE_DIRECTORY, SIZE_WIDTH};
use tbrowse_core::{BrowserView, Entry, Renderer};
use tbrowse_keyboard::KEY_HINTS;

use crate::text::{fit_width, pad_to, truncate_left};

const SEPARATOR: &str = " │ ";
const SEPARATOR_WIDTH: usize = 3;
const TIME_COLUMN_WIDTH: usize = 19;
/// Icon plus the space after it
const ICON_COLUMN_WIDTH: usize = 2;
const DETAILS_WIDTH: usize =
    SEPARATOR_WIDTH + SIZE_WIDTH + SEPARATOR_WIDTH + TIME_COLUMN_WIDTH + SEPARATOR_WIDTH + KIND_WIDTH;
/// Rows taken by the block borders
const BORDER_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 1;
/// Border columns plus the spaces around the title
const TITLE_OVERHEAD: u16 = 4;

/// Layout knobs taken from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Widest a name column may get
    pub name_width: usize,
    /// Inner width from which size, date and kind columns are shown
    pub extended_view_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            name_width: 32,
            extended_view_width: 70,
        }
    }
}

/// Number of list rows (indicator rows included) that fit in a screen of
/// the given size.
pub fn entry_rows(area: Rect) -> usize {
    area.height.saturating_sub(BORDER_ROWS + FOOTER_ROWS) as usize
}

/// Draw the browser window and the key hint footer.
pub fn render_browser(frame: &mut Frame, view: &BrowserView<'_>, options: &RenderOptions) {
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_ROWS)])
        .split(frame.area());
    let (browser_area, footer_area) = (chunks[0], chunks[1]);

    let title = display_title(view.path, browser_area.width);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title));
    let inner_width = block.inner(browser_area).width as usize;

    let mut lines = Vec::with_capacity(view.entries.len() + 2);
    if view.top_indicator {
        lines.push(indicator_line("↑", view.hidden_above()));
    }
    for (i, entry) in view.entries.iter().enumerate() {
        let is_selected = view.selected == Some(i);
        lines.push(entry_line(entry, is_selected, inner_width, options));
    }
    if view.bottom_indicator {
        lines.push(indicator_line("↓", view.hidden_below()));
    }

    frame.render_widget(Paragraph::new(lines).block(block), browser_area);
    frame.render_widget(Paragraph::new(footer_line()), footer_area);
}

/// Path for the window title, cut from the left when the window is narrow
fn display_title(path: &Path, available_width: u16) -> String {
    let max_len = available_width.saturating_sub(TITLE_OVERHEAD) as usize;
    truncate_left(&path.display().to_string(), max_len)
}

fn icon_for(entry: &Entry) -> &'static str {
    if entry.is_parent() {
        "↑"
    } else if entry.kind() == KIND_DIRECTORY {
        "▶"
    } else if entry.size() == SIZE_DIRECTORY {
        // Link to a directory
        "▷"
    } else {
        "•"
    }
}

fn entry_line(
    entry: &Entry,
    is_selected: bool,
    width: usize,
    options: &RenderOptions,
) -> Line<'static> {
    let base = if is_selected {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default()
    };
    let name_style = if !is_selected && entry.size() == SIZE_DIRECTORY {
        base.fg(Color::Cyan)
    } else {
        base
    };
    let separator_style = if is_selected {
        base
    } else {
        base.fg(Color::DarkGray)
    };

    let show_extended = width >= options.extended_view_width;
    let name_room = width.saturating_sub(ICON_COLUMN_WIDTH);
    let name_column = if show_extended {
        name_room.saturating_sub(DETAILS_WIDTH).min(options.name_width)
    } else {
        name_room.min(options.name_width)
    };
    let name = fit_width(entry.name(), name_column);

    let mut spans = vec![
        Span::styled(icon_for(entry), name_style),
        Span::styled(" ", base),
    ];
    let used = if show_extended {
        spans.extend([
            Span::styled(pad_to(&name, name_column), name_style),
            Span::styled(SEPARATOR, separator_style),
            Span::styled(pad_to(entry.size(), SIZE_WIDTH), base),
            Span::styled(SEPARATOR, separator_style),
            Span::styled(
                pad_to(&fit_width(entry.modified(), TIME_COLUMN_WIDTH), TIME_COLUMN_WIDTH),
                base,
            ),
            Span::styled(SEPARATOR, separator_style),
            Span::styled(entry.kind().to_string(), base),
        ]);
        ICON_COLUMN_WIDTH + name_column + DETAILS_WIDTH - KIND_WIDTH + entry.kind().width()
    } else {
        let used = ICON_COLUMN_WIDTH + name.width();
        spans.push(Span::styled(name, name_style));
        used
    };

    // Fill the row so the selection highlight spans the whole width
    spans.push(Span::styled(" ".repeat(width.saturating_sub(used)), base));
    Line::from(spans)
}

fn indicator_line(arrow: &str, hidden: usize) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {} {} more", arrow, hidden),
        Style::default().fg(Color::DarkGray),
    ))
}

fn footer_line() -> Line<'static> {
    let key_style = Style::default().add_modifier(Modifier::REVERSED);
    let spans: Vec<Span> = KEY_HINTS
        .iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(format!(" {} ", key), key_style),
                Span::raw(format!(" {}  ", description)),
            ]
        })
        .collect();
    Line::from(spans)
}

/// [`Renderer`] drawing into a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    options: RenderOptions,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, options: RenderOptions) -> Self {
        Self { terminal, options }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// List rows available at the current terminal size
    pub fn entry_rows(&self) -> Result<usize> {
        let size = self.terminal.size()?;
        Ok(entry_rows(Rect::new(0, 0, size.width, size.height)))
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    type Error = anyhow::Error;

    fn render(&mut self, view: &BrowserView<'_>) -> Result<()> {
        let options = &self.options;
        self.terminal
            .draw(|frame| render_browser(frame, view, options))?;
        Ok(())
    }
}
