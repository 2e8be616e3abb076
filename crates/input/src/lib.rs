//! Terminal input module (table-facing).
//!
//! Two gesture modalities drive the same [`GestureHandler`](crate::core::GestureHandler):
//!
//! - [`PointerAdapter`]: mouse drag-and-drop in absolute coordinates
//! - [`PanAdapter`]: keyboard pan, relative deltas from the pan start
//!
//! Plus [`handle_key_event`], which maps the remaining keys to [`TableAction`](crate::types::TableAction)s.

pub mod map;
pub mod pan;
pub mod pointer;

pub use ofc_core as core;
pub use ofc_types as types;

pub use map::{handle_key_event, should_quit};
pub use pan::PanAdapter;
pub use pointer::PointerAdapter;

use crate::core::{DropOutcome, GestureStart};

/// What an adapter did with one input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureEffect {
    Started(GestureStart),
    Moved,
    Dropped(DropOutcome),
    /// Idle keyboard cursor moved; no gesture involved.
    CursorMoved,
}
