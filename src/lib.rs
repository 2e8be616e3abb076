//! TUI OFC (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so binaries and integration
//! tests can use `tui_ofc::{core,client,term,input,types}`.

pub mod telemetry;

pub use ofc_client as client;
pub use ofc_core as core;
pub use ofc_input as input;
pub use ofc_term as term;
pub use ofc_types as types;
