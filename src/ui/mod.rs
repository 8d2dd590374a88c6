//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, panel switching
//! - **[`panels`]** — per-panel state wiring operations to the recorder and
//!   replay scheduler
//! - **[`panes`]** — stateless render functions for each visible pane
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a starting
//! [`app::PanelKind`] and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod input;
pub mod panels;
pub mod panes;
pub mod theme;

pub use app::App;
