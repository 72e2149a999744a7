//! Core types for tbrowse.
//!
//! This crate holds everything that decides *what* the browser shows:
//! the entry container, the scrolling window computation and the
//! navigation state machine. Filesystem access and drawing are reached
//! through the traits in [`provider`] and [`view`], so the whole crate
//! can be exercised without a terminal or a real directory tree.

pub mod action;
pub mod entry;
pub mod error;
pub mod navigation;
pub mod provider;
pub mod store;
pub mod view;
pub mod viewport;

pub use action::{Action, Transition};
pub use entry::{Entry, EntryDetails};
pub use error::{BrowserError, Result};
pub use navigation::{NavigationController, NavigatorSettings};
pub use provider::{DirectoryLister, FileSystem, MetadataResolver, PathClassifier};
pub use store::EntryStore;
pub use view::{BrowserView, Renderer};
pub use viewport::{ScrollViewport, VisibleWindow};
