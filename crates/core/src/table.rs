//! Table - the owned UI state shared by the round controller and the placement engine.

use tracing::info;

use crate::board::Board;
use crate::game_state::{GameState, RoundResult};
use crate::placement::{
    DragSession, DropOutcome, GestureHandler, GestureStart, Grab, PlacementEngine,
};
use crate::types::{Line, LineCapacity, LineTarget, Offset, Seat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line status message shown under the boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Everything the client displays: the local board view, the last confirmed
/// snapshot, the drag engine and the result/notice surfaces.
#[derive(Debug, Clone)]
pub struct Table {
    confirmed: GameState,
    local: GameState,
    placement: PlacementEngine,
    capacity: LineCapacity,
    result: Option<RoundResult>,
    notice: Option<Notice>,
    alert: Option<Vec<String>>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(LineCapacity::default())
    }
}

impl Table {
    pub fn new(capacity: LineCapacity) -> Self {
        Self {
            confirmed: GameState::default(),
            local: GameState::default(),
            placement: PlacementEngine::new(),
            capacity,
            result: None,
            notice: None,
            alert: None,
        }
    }

    /// Local view: the confirmed snapshot plus any committed placements.
    pub fn state(&self) -> &GameState {
        &self.local
    }

    pub fn board(&self, seat: Seat) -> &Board {
        self.local.board(seat)
    }

    /// Last snapshot received from the service.
    pub fn confirmed(&self) -> &GameState {
        &self.confirmed
    }

    pub fn capacity(&self) -> &LineCapacity {
        &self.capacity
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.placement.session()
    }

    pub fn highlighted(&self) -> Option<Line> {
        self.placement.highlight()
    }

    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn alert(&self) -> Option<&[String]> {
        self.alert.as_deref()
    }

    /// Replace both boards wholesale with an authoritative snapshot.
    ///
    /// An open drag session survives only if its card is still in its origin line.
    pub fn replace_state(&mut self, state: GameState) -> Option<DropOutcome> {
        info!(
            player_cards = state.player.len(),
            ai_cards = state.ai.len(),
            "game state replaced"
        );
        self.confirmed = state.clone();
        self.local = state;
        self.placement.reconcile(&self.local.player)
    }

    /// Record a round result: persistent score lines plus a modal alert.
    ///
    /// The scored round is final, so the local view falls back to the confirmed
    /// snapshot and any open drag session is cancelled.
    pub fn show_result(&mut self, result: RoundResult) -> Option<DropOutcome> {
        let cancelled = self
            .placement
            .session()
            .is_some()
            .then(|| self.placement.cancel());
        self.local = self.confirmed.clone();
        info!(
            player = result.score(Seat::Player),
            ai = result.score(Seat::Ai),
            "round scored"
        );
        self.alert = Some(vec![
            result.summary(Seat::Player),
            result.summary(Seat::Ai),
        ]);
        self.result = Some(result);
        cancelled
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }
}

impl GestureHandler for Table {
    fn gesture_start(&mut self, grab: Grab) -> GestureStart {
        self.placement.begin(&self.local.player, grab)
    }

    fn gesture_update(&mut self, offset: Offset, hover: Option<LineTarget>) {
        self.placement.update(offset, hover);
    }

    fn gesture_end(&mut self, target: Option<LineTarget>) -> DropOutcome {
        self.placement
            .finish(&mut self.local.player, target, &self.capacity)
    }

    fn gesture_cancel(&mut self) -> DropOutcome {
        self.placement.cancel()
    }

    fn is_dragging(&self) -> bool {
        self.placement.session().is_some()
    }
}
