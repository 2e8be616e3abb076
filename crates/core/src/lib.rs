//! Core client logic - pure, deterministic, and testable
//!
//! This crate holds the table model and the card placement rules. It has **no
//! dependencies** on terminal I/O or networking, so everything here can be
//! driven from unit tests.
//!
//! # Module Structure
//!
//! - [`board`]: one seat's three ordered lines and the move-to-end operation
//! - [`game_state`]: authoritative snapshots and round results from the service
//! - [`placement`]: drag sessions, drop targeting, highlight tracking
//! - [`table`]: the owned UI state (local view + confirmed snapshot + notices)
//!
//! # Placement Rules
//!
//! - Only cards on the player's own board can be picked up
//! - A released card is appended to the end of the target line
//! - Releasing over anything but one of the player's lines cancels the move
//! - A line at capacity rejects cards coming from another line
//! - At most one drag session and at most one highlighted line exist at a time
//!
//! # Example
//!
//! ```
//! use ofc_core::{Board, CardRef, GameState, GestureHandler, Grab, Table};
//! use ofc_types::{Card, Line, LineTarget, Point, Seat};
//!
//! let mut table = Table::default();
//! table.replace_state(GameState::new(
//!     Board::new().with(Line::Bottom, &["Ah", "Kd"]),
//!     Board::new(),
//! ));
//!
//! let grab = Grab {
//!     card: CardRef { seat: Seat::Player, line: Line::Bottom, index: 1, card: Card::new("Kd") },
//!     anchor: Point::new(0, 0),
//! };
//! table.gesture_start(grab);
//! table.gesture_end(Some(LineTarget::new(Seat::Player, Line::Middle)));
//!
//! assert_eq!(table.board(Seat::Player).line(Line::Bottom), &[Card::new("Ah")]);
//! assert_eq!(table.board(Seat::Player).line(Line::Middle), &[Card::new("Kd")]);
//! ```

pub mod board;
pub mod game_state;
pub mod placement;
pub mod table;

pub use ofc_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use game_state::{GameState, Royalty, RoundResult};
pub use placement::{
    CancelReason, CardRef, DragPhase, DragSession, DropOutcome, GestureHandler, GestureStart,
    Grab, HitTest, IgnoreReason, PlacementEngine,
};
pub use table::{Notice, NoticeKind, Table};
