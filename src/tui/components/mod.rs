//! # TUI Components
//!
//! Both components are stateless and props-based: they are built fresh each
//! frame from the session and hold nothing between frames.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── status_view.rs  (the rendered session text)
//! └── help_bar.rs     (bottom line listing the quit keys)
//! ```

mod help_bar;
mod status_view;

pub use help_bar::HelpBar;
pub use status_view::StatusView;
