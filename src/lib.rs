//! Card deck carousel.
//!
//! [`carousel`] is the navigation engine: gesture interpretation, the
//! navigation state machine and index mapping. [`deck`] supplies the cards and
//! [`tui`] is a terminal front-end that renders the carousel and feeds it
//! mouse and keyboard input.

pub mod carousel;
pub mod deck;
pub mod error;
pub mod tui;

pub use carousel::{Navigator, NavigatorConfig, Snapshot};
pub use deck::{Card, Category, CategoryId, Deck};
pub use error::{Error, Result};
