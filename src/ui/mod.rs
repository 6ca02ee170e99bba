//! Terminal presentation.
//!
//! This module provides:
//! - [`MessageBox`] for bordered, centred text
//! - [`NotifierTheme`] for the colours used in notifications
//!
//! # Example
//!
//! ```
//! use update_notifier::ui::{BorderStyle, BoxStyle, MessageBox};
//!
//! let rendered = MessageBox::new("hello")
//!     .style(BoxStyle { border_style: BorderStyle::Classic, padding: 1 })
//!     .render();
//! assert!(rendered.contains("| hello |"));
//! ```

pub mod boxed;
pub mod theme;

pub use boxed::{BorderChars, BorderStyle, BoxStyle, MessageBox, DEFAULT_PADDING, MAX_PADDING};
pub use theme::{should_use_colors, NotifierTheme};
