//! Round controller tests - replies applied to the table through a mock service.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use tui_ofc::client::{
    apply_reply, dispatch, RoundController, RoundError, RoundLink, RoundOutcome, RoundReply,
    RoundRequest, RoundService,
};
use tui_ofc::core::{
    Board, CancelReason, CardRef, DropOutcome, GameState, GestureHandler, Grab, Notice,
    NoticeKind, Royalty, RoundResult, Table,
};
use tui_ofc::types::{Card, Line, LineTarget, Point, Seat, TableAction};

/// Scripted service: every call answers from the fields below and records what it saw.
#[derive(Default)]
struct MockService {
    state: Option<GameState>,
    result: Option<RoundResult>,
    error: Option<RoundError>,
    submitted: Mutex<Vec<Board>>,
}

impl MockService {
    fn answer<T: Clone>(&self, value: &Option<T>) -> Result<T, RoundError> {
        if let Some(e) = &self.error {
            return Err(e.clone());
        }
        value
            .clone()
            .ok_or_else(|| RoundError::protocol("mock has no answer"))
    }
}

#[async_trait]
impl RoundService for MockService {
    async fn start_round(&self) -> Result<GameState, RoundError> {
        self.answer(&self.state)
    }

    async fn end_round(&self) -> Result<RoundResult, RoundError> {
        self.answer(&self.result)
    }

    async fn submit_move(&self, player: &Board) -> Result<GameState, RoundError> {
        self.submitted.lock().unwrap().push(player.clone());
        self.answer(&self.state)
    }

    async fn fetch_state(&self) -> Result<GameState, RoundError> {
        self.answer(&self.state)
    }
}

fn dealt() -> GameState {
    GameState::new(
        Board::new().with(Line::Bottom, &["Ah", "Kd"]),
        Board::new().with(Line::Top, &["2c"]),
    )
    .with_remaining_deck(47)
}

fn scored() -> RoundResult {
    RoundResult {
        player_score: 15.0,
        ai_score: 9.0,
        player_royalty: Royalty {
            total: 4.0,
            breakdown: vec![("bottom".into(), 4.0)],
        },
        ai_royalty: Royalty::default(),
    }
}

#[test]
fn test_start_replaces_state() {
    let service = MockService {
        state: Some(dealt()),
        ..Default::default()
    };
    let reply = tokio_test::block_on(dispatch(&service, RoundRequest::Start));
    assert!(reply.is_ok());

    let mut table = Table::default();
    let outcome = apply_reply(&mut table, reply);
    assert_eq!(
        outcome,
        RoundOutcome::StateReplaced {
            action: TableAction::StartRound,
            cancelled_drag: None,
        }
    );
    assert_eq!(table.state(), &dealt());
    assert_eq!(table.notice().unwrap().kind, NoticeKind::Info);
}

#[test]
fn test_start_failure_keeps_state_and_raises_notice() {
    let mut table = Table::default();
    table.replace_state(dealt());
    let before = table.state().clone();

    let service = MockService {
        error: Some(RoundError::request_failed("connection refused")),
        ..Default::default()
    };
    let reply = tokio_test::block_on(dispatch(&service, RoundRequest::Start));
    let outcome = apply_reply(&mut table, reply);

    assert!(outcome.is_failure());
    assert_eq!(table.state(), &before);
    let notice = table.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.starts_with("Start round failed"), "{}", notice.text);
    assert!(notice.text.contains("connection refused"));
}

#[test]
fn test_protocol_error_surfaces_as_failure() {
    let mut table = Table::default();
    let outcome = apply_reply(
        &mut table,
        RoundReply::Refreshed(Err(RoundError::protocol("missing field `ai_board`"))),
    );
    match outcome {
        RoundOutcome::Failed { action, error } => {
            assert_eq!(action, TableAction::Refresh);
            assert_eq!(error.code(), "PROTOCOL_ERROR");
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(table.state(), &GameState::default());
}

#[test]
fn test_end_round_shows_scores() {
    let service = MockService {
        result: Some(scored()),
        ..Default::default()
    };
    let mut table = Table::default();
    table.replace_state(dealt());

    let reply = tokio_test::block_on(dispatch(&service, RoundRequest::End));
    assert_eq!(
        apply_reply(&mut table, reply),
        RoundOutcome::ResultShown {
            cancelled_drag: None
        }
    );

    let result = table.result().unwrap();
    assert_eq!(result.summary(Seat::Player), "Player: 15 points (+4 royalties)");
    let alert = table.alert().unwrap();
    assert!(alert[0].contains("15"));
    assert!(alert[0].contains("4"));
    // Boards are untouched by scoring.
    assert_eq!(table.state(), &dealt());
}

#[test]
fn test_end_round_restores_confirmed_boards() {
    let service = MockService {
        result: Some(scored()),
        ..Default::default()
    };
    let mut table = Table::default();
    table.replace_state(dealt());

    let kd = Grab {
        card: CardRef {
            seat: Seat::Player,
            line: Line::Bottom,
            index: 1,
            card: Card::new("Kd"),
        },
        anchor: Point::new(19, 18),
    };
    table.gesture_start(kd);
    table.gesture_end(Some(LineTarget::new(Seat::Player, Line::Middle)));
    assert_ne!(table.state(), table.confirmed());

    // A second drag is still in flight when the scores arrive.
    let ah = Grab {
        card: CardRef {
            seat: Seat::Player,
            line: Line::Bottom,
            index: 0,
            card: Card::new("Ah"),
        },
        anchor: Point::new(14, 18),
    };
    table.gesture_start(ah);

    let reply = tokio_test::block_on(dispatch(&service, RoundRequest::End));
    match apply_reply(&mut table, reply) {
        RoundOutcome::ResultShown {
            cancelled_drag: Some(DropOutcome::Cancelled { card, reason }),
        } => {
            assert_eq!(card, Card::new("Ah"));
            assert_eq!(reason, CancelReason::Aborted);
        }
        other => panic!("unexpected outcome {other:?}"),
    }

    assert_eq!(table.state(), table.confirmed());
    assert_eq!(table.state(), &dealt());
    table.dismiss_alert();
    assert!(!table.is_dragging());
}

#[test]
fn test_submit_sends_local_arrangement() {
    let service = MockService {
        state: Some(dealt()),
        ..Default::default()
    };
    let moved = Board::new()
        .with(Line::Bottom, &["Ah"])
        .with(Line::Middle, &["Kd"]);
    let reply = tokio_test::block_on(dispatch(&service, RoundRequest::Submit(moved.clone())));
    assert_eq!(reply.action(), TableAction::SubmitMove);
    assert_eq!(service.submitted.lock().unwrap().as_slice(), &[moved]);
}

fn poll_until(controller: &mut RoundController, table: &mut Table, n: usize) -> Vec<RoundOutcome> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut outcomes = Vec::new();
    while outcomes.len() < n && Instant::now() < deadline {
        outcomes.extend(controller.poll(table));
        thread::sleep(Duration::from_millis(5));
    }
    outcomes
}

#[test]
fn test_controller_round_trip_over_link() {
    let service = Arc::new(MockService {
        state: Some(dealt()),
        result: Some(scored()),
        ..Default::default()
    });
    let link = RoundLink::start(service.clone()).unwrap();
    let mut controller = RoundController::new(link);
    let mut table = Table::default();

    table.notify(Notice::error("Start round failed: request failed: earlier"));
    controller.request(TableAction::StartRound, &mut table);
    assert_eq!(table.notice(), None);
    let outcomes = poll_until(&mut controller, &mut table, 1);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(table.state(), &dealt());

    controller.request(TableAction::SubmitMove, &mut table);
    poll_until(&mut controller, &mut table, 1);
    let submitted = service.submitted.lock().unwrap().clone();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].line(Line::Bottom), &[Card::new("Ah"), Card::new("Kd")]);

    controller.request(TableAction::EndRound, &mut table);
    let outcomes = poll_until(&mut controller, &mut table, 1);
    assert_eq!(
        outcomes,
        vec![RoundOutcome::ResultShown {
            cancelled_drag: None
        }]
    );
    assert!(table.result().is_some());
}
