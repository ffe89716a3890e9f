//! Ratatui front-end for the seat picker. The `App` state machine owns the
//! booking stores and routes key presses; the submodules keep per-screen
//! state, drawing helpers, and terminal plumbing apart.

mod app;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
