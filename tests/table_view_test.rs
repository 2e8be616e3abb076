//! TableView tests - what the player sees for a given table.

use tui_ofc::core::{
    Board, GameState, GestureHandler, HitTest, Notice, Royalty, RoundResult, Table,
};
use tui_ofc::term::layout::line_row;
use tui_ofc::term::{TableLayout, TableView, Viewport};
use tui_ofc::types::{Line, LineTarget, Offset, Point, Seat};

fn table() -> Table {
    let mut t = Table::default();
    t.replace_state(
        GameState::new(
            Board::new().with(Line::Bottom, &["Ah", "Kd"]),
            Board::new().with(Line::Middle, &["2c"]),
        )
        .with_remaining_deck(47),
    );
    t
}

fn render(table: &Table) -> tui_ofc::term::FrameBuffer {
    let layout = TableLayout::compute(table, Viewport::new(80, 24));
    TableView::new().without_help().render(table, &layout, None)
}

#[test]
fn test_render_is_idempotent() {
    let t = table();
    assert_eq!(render(&t), render(&t));
}

#[test]
fn test_cards_render_in_stored_order() {
    let fb = render(&table());
    let row = fb.row_text((line_row(Seat::Player, Line::Bottom) + 1) as u16);
    let ah = row.find("Ah").expect("Ah drawn");
    let kd = row.find("Kd").expect("Kd drawn");
    assert!(ah < kd, "{row:?}");

    let ai = fb.row_text((line_row(Seat::Ai, Line::Middle) + 1) as u16);
    assert!(ai.contains("2c"), "{ai:?}");
}

#[test]
fn test_title_shows_remaining_deck() {
    let fb = render(&table());
    assert!(fb.row_text(0).contains("deck 47"));
}

#[test]
fn test_highlight_changes_only_target_line() {
    let mut t = table();
    let layout = TableLayout::compute(&t, Viewport::new(80, 24));
    let plain = TableView::new().render(&t, &layout, None);

    let grab = layout.grab_at(Point::new(15, 19)).expect("Ah under point");
    t.gesture_start(grab);
    t.gesture_update(Offset::new(0, -6), Some(LineTarget::new(Seat::Player, Line::Top)));

    let layout = TableLayout::compute(&t, Viewport::new(80, 24));
    let lit = TableView::new().render(&t, &layout, None);

    // An empty cell of each region, away from the dragged card.
    let x = 70;
    let top = (line_row(Seat::Player, Line::Top) + 1) as u16;
    let middle = (line_row(Seat::Player, Line::Middle) + 1) as u16;
    assert_ne!(plain.get(x, top).unwrap().style, lit.get(x, top).unwrap().style);
    assert_eq!(
        plain.get(x, middle).unwrap().style,
        lit.get(x, middle).unwrap().style
    );
}

#[test]
fn test_dragged_card_floats_at_session_position() {
    let mut t = table();
    let layout = TableLayout::compute(&t, Viewport::new(80, 24));
    let grab = layout.grab_at(Point::new(15, 19)).expect("Ah under point");
    t.gesture_start(grab);
    t.gesture_update(Offset::new(20, -6), None);

    let layout = TableLayout::compute(&t, Viewport::new(80, 24));
    // Out of flow: Kd now leads the bottom line.
    let first = layout
        .cards_in(LineTarget::new(Seat::Player, Line::Bottom))
        .next()
        .unwrap();
    assert_eq!(first.slot.card.as_str(), "Kd");

    let fb = TableView::new().render(&t, &layout, None);
    let session = t.drag_session().unwrap();
    let p = session.position();
    let (x, y) = ((p.x + 1) as u16, (p.y + 1) as u16);
    assert_eq!(fb.get(x, y).unwrap().ch, 'A');
    assert_eq!(fb.get(x + 1, y).unwrap().ch, 'h');
}

#[test]
fn test_scores_persist_on_table() {
    let mut t = table();
    t.show_result(RoundResult {
        player_score: 15.0,
        ai_score: 9.0,
        player_royalty: Royalty {
            total: 4.0,
            breakdown: vec![("bottom".into(), 4.0)],
        },
        ai_royalty: Royalty::default(),
    });
    t.dismiss_alert();

    let fb = render(&t);
    let text = fb.text();
    assert!(text.contains("Player: 15 points (+4 royalties)"), "{text}");
    assert!(text.contains("AI: 9 points (+0 royalties)"), "{text}");
}

#[test]
fn test_alert_overlay_until_dismissed() {
    let mut t = table();
    t.show_result(RoundResult::default());
    assert!(render(&t).text().contains("press any key"));
    assert!(t.dismiss_alert());
    assert!(!render(&t).text().contains("press any key"));
}

#[test]
fn test_error_notice_is_shown() {
    let mut t = table();
    t.notify(Notice::error("Start round failed: request failed: boom"));
    assert!(render(&t).text().contains("Start round failed"));
}
