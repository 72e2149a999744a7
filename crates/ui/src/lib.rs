//! Terminal front end for tbrowse.
//!
//! - [`EventHandler`] turns raw crossterm input into [`Event`]s
//! - [`render_browser`] draws a [`BrowserView`](tbrowse_core::BrowserView) into a frame
//! - [`TerminalRenderer`] owns a ratatui terminal and implements the core
//!   [`Renderer`](tbrowse_core::Renderer) seam

pub mod event;
pub mod render;
pub mod text;

pub use event::{Event, EventHandler};
pub use render::{entry_rows, render_browser, RenderOptions, TerminalRenderer};
