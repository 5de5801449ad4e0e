//! Application module: exposes the form model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the chosen directory,
//! field toggles, focus and the outcome of the last run.

mod model;

pub use model::*;
