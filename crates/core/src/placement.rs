//! Placement interaction engine.
//!
//! Tracks the single in-progress drag gesture and decides whether a released card
//! is committed to a new line or returned to where it came from.
//!
//! ```text
//! Idle --start--> Dragging --end(valid line)--> Placed    --> Idle
//!                          --end(no target)---> Cancelled --> Idle
//!                          --cancel-----------> Cancelled --> Idle
//! ```
//!
//! Input modalities (pointer drag, keyboard pan) talk to the engine only through
//! [`GestureHandler`]. Geometry is resolved by a [`HitTest`] implementation owned
//! by the renderer.
//!
//! The board is never touched before a drop commits, so a cancelled gesture is a
//! no-op by construction.

use tracing::debug;

use crate::board::{Board, BoardError};
use crate::types::{Card, Line, LineCapacity, LineTarget, Offset, Point, Seat};

/// A rendered card element: which card sits where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRef {
    pub seat: Seat,
    pub line: Line,
    pub index: usize,
    pub card: Card,
}

/// What the pointer picked up at gesture start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grab {
    pub card: CardRef,
    /// Top-left of the card element when the gesture started.
    pub anchor: Point,
}

/// Geometry queries the input adapters need from the rendered table.
pub trait HitTest {
    /// Card element under `p`, if any.
    fn grab_at(&self, p: Point) -> Option<Grab>;

    /// Line region under `p`, if any (either seat).
    fn line_at(&self, p: Point) -> Option<LineTarget>;
}

/// Transient record of an in-progress relocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub card: Card,
    pub origin: Line,
    pub anchor: Point,
    pub offset: Offset,
}

impl DragSession {
    /// Where the detached card element is drawn right now.
    pub fn position(&self) -> Point {
        self.anchor.translate(self.offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    AlreadyDragging,
    OpponentCard,
    StaleElement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureStart {
    Started,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelReason {
    /// Released over something that is not a line region.
    NoTarget,
    /// Released over a line of the opponent's board.
    OpponentLine(Line),
    LineFull { line: Line, capacity: usize },
    /// The card left its origin line under the session (authoritative refresh).
    CardMissing,
    /// Explicit abort (Esc, lost pointer).
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Placed { card: Card, from: Line, to: Line },
    Cancelled { card: Card, reason: CancelReason },
    /// End/cancel arrived with no open session.
    NoSession,
}

impl DropOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, DropOutcome::Placed { .. })
    }
}

/// Unified start/update/end surface shared by every input modality.
pub trait GestureHandler {
    fn gesture_start(&mut self, grab: Grab) -> GestureStart;

    /// `hover` is the line region currently under the pointer.
    fn gesture_update(&mut self, offset: Offset, hover: Option<LineTarget>);

    /// `target` is the line region under the final pointer position.
    fn gesture_end(&mut self, target: Option<LineTarget>) -> DropOutcome;

    fn gesture_cancel(&mut self) -> DropOutcome;

    fn is_dragging(&self) -> bool;
}

/// Drag session and highlight bookkeeping.
///
/// At most one session is open; a start while one is open is ignored.
#[derive(Debug, Clone, Default)]
pub struct PlacementEngine {
    session: Option<DragSession>,
    highlight: Option<Line>,
}

impl PlacementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The single highlighted line of the player's board, if any.
    pub fn highlight(&self) -> Option<Line> {
        self.highlight
    }

    /// Open a session for `grab` if it names a card on the player's own board.
    pub fn begin(&mut self, board: &Board, grab: Grab) -> GestureStart {
        if self.session.is_some() {
            return GestureStart::Ignored(IgnoreReason::AlreadyDragging);
        }
        if grab.card.seat != Seat::Player {
            return GestureStart::Ignored(IgnoreReason::OpponentCard);
        }
        let line = board.line(grab.card.line);
        if line.get(grab.card.index) != Some(&grab.card.card) {
            return GestureStart::Ignored(IgnoreReason::StaleElement);
        }

        debug!(card = %grab.card.card, origin = %grab.card.line, "drag started");
        self.session = Some(DragSession {
            card: grab.card.card,
            origin: grab.card.line,
            anchor: grab.anchor,
            offset: Offset::ZERO,
        });
        self.highlight = None;
        GestureStart::Started
    }

    /// Track the pointer and move the highlight to the line under it.
    pub fn update(&mut self, offset: Offset, hover: Option<LineTarget>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.offset = offset;
        self.highlight = hover.and_then(droppable);
    }

    /// Close the session, committing the move when `target` is a valid line.
    pub fn finish(
        &mut self,
        board: &mut Board,
        target: Option<LineTarget>,
        capacity: &LineCapacity,
    ) -> DropOutcome {
        self.highlight = None;
        let Some(session) = self.session.take() else {
            return DropOutcome::NoSession;
        };

        let to = match target {
            None => return cancelled(session.card, CancelReason::NoTarget),
            Some(t) if t.seat != Seat::Player => {
                return cancelled(session.card, CancelReason::OpponentLine(t.line))
            }
            Some(t) => t.line,
        };

        match board.move_to_end(&session.card, session.origin, to, capacity) {
            Ok(()) => {
                debug!(card = %session.card, from = %session.origin, to = %to, "card placed");
                DropOutcome::Placed {
                    card: session.card,
                    from: session.origin,
                    to,
                }
            }
            Err(BoardError::LineFull { line, capacity }) => {
                cancelled(session.card, CancelReason::LineFull { line, capacity })
            }
            Err(BoardError::CardNotInLine { .. }) => {
                cancelled(session.card, CancelReason::CardMissing)
            }
        }
    }

    pub fn cancel(&mut self) -> DropOutcome {
        self.highlight = None;
        match self.session.take() {
            Some(session) => cancelled(session.card, CancelReason::Aborted),
            None => DropOutcome::NoSession,
        }
    }

    /// Re-check the open session against a freshly replaced board.
    ///
    /// The captured anchor and offset are kept as-is; the session is dropped only
    /// when its card is no longer in the origin line.
    pub fn reconcile(&mut self, board: &Board) -> Option<DropOutcome> {
        let session = self.session.as_ref()?;
        if board.position(session.origin, &session.card).is_some() {
            return None;
        }
        self.highlight = None;
        let session = self.session.take()?;
        Some(cancelled(session.card, CancelReason::CardMissing))
    }
}

fn droppable(target: LineTarget) -> Option<Line> {
    (target.seat == Seat::Player).then_some(target.line)
}

fn cancelled(card: Card, reason: CancelReason) -> DropOutcome {
    debug!(card = %card, ?reason, "drag cancelled");
    DropOutcome::Cancelled { card, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grab(board: &Board, seat: Seat, line: Line, index: usize) -> Grab {
        Grab {
            card: CardRef {
                seat,
                line,
                index,
                card: board.line(line)[index].clone(),
            },
            anchor: Point::new(10, 5),
        }
    }

    fn player(line: Line) -> Option<LineTarget> {
        Some(LineTarget::new(Seat::Player, line))
    }

    #[test]
    fn test_start_opens_session_with_zero_offset() {
        let board = Board::new().with(Line::Bottom, &["Ah", "Kd"]);
        let mut engine = PlacementEngine::new();
        let g = grab(&board, Seat::Player, Line::Bottom, 1);
        assert_eq!(engine.begin(&board, g), GestureStart::Started);
        let s = engine.session().unwrap();
        assert_eq!(s.card, Card::new("Kd"));
        assert_eq!(s.origin, Line::Bottom);
        assert_eq!(s.offset, Offset::ZERO);
        assert_eq!(engine.phase(), DragPhase::Dragging);
    }

    #[test]
    fn test_second_start_is_ignored() {
        let board = Board::new().with(Line::Bottom, &["Ah", "Kd"]);
        let mut engine = PlacementEngine::new();
        engine.begin(&board, grab(&board, Seat::Player, Line::Bottom, 0));
        let second = engine.begin(&board, grab(&board, Seat::Player, Line::Bottom, 1));
        assert_eq!(second, GestureStart::Ignored(IgnoreReason::AlreadyDragging));
        assert_eq!(engine.session().unwrap().card, Card::new("Ah"));
    }

    #[test]
    fn test_opponent_card_not_draggable() {
        let board = Board::new().with(Line::Top, &["Ah"]);
        let mut engine = PlacementEngine::new();
        let res = engine.begin(&board, grab(&board, Seat::Ai, Line::Top, 0));
        assert_eq!(res, GestureStart::Ignored(IgnoreReason::OpponentCard));
        assert_eq!(engine.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_stale_element_ignored() {
        let board = Board::new().with(Line::Top, &["Ah"]);
        let mut engine = PlacementEngine::new();
        let mut g = grab(&board, Seat::Player, Line::Top, 0);
        g.card.index = 3;
        assert_eq!(
            engine.begin(&board, g),
            GestureStart::Ignored(IgnoreReason::StaleElement)
        );
    }

    #[test]
    fn test_highlight_follows_hover_and_ignores_opponent_lines() {
        let board = Board::new().with(Line::Bottom, &["Ah"]);
        let mut engine = PlacementEngine::new();
        engine.begin(&board, grab(&board, Seat::Player, Line::Bottom, 0));

        engine.update(Offset::new(1, -3), player(Line::Middle));
        assert_eq!(engine.highlight(), Some(Line::Middle));
        engine.update(Offset::new(2, -6), player(Line::Top));
        assert_eq!(engine.highlight(), Some(Line::Top));
        engine.update(Offset::new(2, -9), Some(LineTarget::new(Seat::Ai, Line::Bottom)));
        assert_eq!(engine.highlight(), None);
        engine.update(Offset::new(40, 40), None);
        assert_eq!(engine.highlight(), None);
        assert_eq!(engine.session().unwrap().offset, Offset::new(40, 40));
    }

    #[test]
    fn test_update_without_session_does_nothing() {
        let mut engine = PlacementEngine::new();
        engine.update(Offset::new(1, 1), player(Line::Top));
        assert_eq!(engine.highlight(), None);
    }

    #[test]
    fn test_drop_on_player_line_commits() {
        let mut board = Board::new().with(Line::Bottom, &["Ah", "Kd"]);
        let mut engine = PlacementEngine::new();
        engine.begin(&board, grab(&board, Seat::Player, Line::Bottom, 1));
        engine.update(Offset::new(0, -3), player(Line::Middle));
        let out = engine.finish(&mut board, player(Line::Middle), &LineCapacity::default());
        assert_eq!(
            out,
            DropOutcome::Placed {
                card: Card::new("Kd"),
                from: Line::Bottom,
                to: Line::Middle
            }
        );
        assert_eq!(board.line(Line::Bottom), &[Card::new("Ah")]);
        assert_eq!(board.line(Line::Middle), &[Card::new("Kd")]);
        assert_eq!(engine.phase(), DragPhase::Idle);
        assert_eq!(engine.highlight(), None);
    }

    #[test]
    fn test_drop_nowhere_cancels() {
        let mut board = Board::new().with(Line::Bottom, &["Ah", "Kd"]);
        let before = board.clone();
        let mut engine = PlacementEngine::new();
        engine.begin(&board, grab(&board, Seat::Player, Line::Bottom, 0));
        engine.update(Offset::new(0, -3), player(Line::Middle));
        let out = engine.finish(&mut board, None, &LineCapacity::default());
        assert!(matches!(
            out,
            DropOutcome::Cancelled {
                reason: CancelReason::NoTarget,
                ..
            }
        ));
        assert_eq!(board, before);
        assert_eq!(engine.highlight(), None);
    }

    #[test]
    fn test_drop_on_opponent_line_cancels() {
        let mut board = Board::new().with(Line::Bottom, &["Ah"]);
        let before = board.clone();
        let mut engine = PlacementEngine::new();
        engine.begin(&board, grab(&board, Seat::Player, Line::Bottom, 0));
        let out = engine.finish(
            &mut board,
            Some(LineTarget::new(Seat::Ai, Line::Top)),
            &LineCapacity::default(),
        );
        assert!(matches!(
            out,
            DropOutcome::Cancelled {
                reason: CancelReason::OpponentLine(Line::Top),
                ..
            }
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_drop_on_full_line_cancels() {
        let mut board = Board::new()
            .with(Line::Top, &["2c", "3c", "4c"])
            .with(Line::Bottom, &["Ah"]);
        let before = board.clone();
        let mut engine = PlacementEngine::new();
        engine.begin(&board, grab(&board, Seat::Player, Line::Bottom, 0));
        let out = engine.finish(&mut board, player(Line::Top), &LineCapacity::default());
        assert!(matches!(
            out,
            DropOutcome::Cancelled {
                reason: CancelReason::LineFull {
                    line: Line::Top,
                    capacity: 3
                },
                ..
            }
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn test_end_without_session() {
        let mut board = Board::new();
        let mut engine = PlacementEngine::new();
        assert_eq!(
            engine.finish(&mut board, player(Line::Top), &LineCapacity::default()),
            DropOutcome::NoSession
        );
        assert_eq!(engine.cancel(), DropOutcome::NoSession);
    }

    #[test]
    fn test_reconcile_keeps_session_when_card_still_in_origin() {
        let board = Board::new().with(Line::Bottom, &["Ah", "Kd"]);
        let mut engine = PlacementEngine::new();
        engine.begin(&board, grab(&board, Seat::Player, Line::Bottom, 1));
        engine.update(Offset::new(5, -2), player(Line::Middle));

        let refreshed = Board::new().with(Line::Bottom, &["Kd", "7s"]);
        assert_eq!(engine.reconcile(&refreshed), None);
        let s = engine.session().unwrap();
        assert_eq!(s.offset, Offset::new(5, -2));
        assert_eq!(s.anchor, Point::new(10, 5));
        assert_eq!(engine.highlight(), Some(Line::Middle));
    }

    #[test]
    fn test_reconcile_drops_session_when_card_gone() {
        let board = Board::new().with(Line::Bottom, &["Ah"]);
        let mut engine = PlacementEngine::new();
        engine.begin(&board, grab(&board, Seat::Player, Line::Bottom, 0));
        let out = engine.reconcile(&Board::new()).unwrap();
        assert!(matches!(
            out,
            DropOutcome::Cancelled {
                reason: CancelReason::CardMissing,
                ..
            }
        ));
        assert_eq!(engine.phase(), DragPhase::Idle);
    }
}
