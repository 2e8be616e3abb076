//! Terminal presentation layer.
//!
//! A small, game-oriented rendering layer: the table is projected into a plain
//! framebuffer which is then flushed to the terminal. No widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Derive geometry once per frame and share it between drawing and hit-testing
//! - Full, idempotent redraws of the table; diffing only at the terminal boundary

pub mod fb;
pub mod layout;
pub mod renderer;
pub mod table_view;

pub use ofc_core as core;
pub use ofc_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use layout::{CardElement, LineRegion, Rect, TableLayout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use table_view::TableView;
