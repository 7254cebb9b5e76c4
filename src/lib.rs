//! TUI Frogger (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches can use `tui_frogger::{core,input,term,types}`.

pub use tui_frogger_core as core;
pub use tui_frogger_input as input;
pub use tui_frogger_term as term;
pub use tui_frogger_types as types;
