//! TableView: projects a [`Table`] onto a terminal framebuffer.
//!
//! This module is pure (no I/O). Every frame is drawn from scratch: each line
//! region is cleared and its cards re-created in stored order, so rendering the
//! same table twice yields identical buffers.

use crate::core::{Board, NoticeKind, Table};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{card_size, TableLayout, Viewport, LABEL_W};
use crate::types::{Card, Line, LineTarget, Point, Seat};

const BG: Rgb = Rgb::new(0, 0, 0);
const FELT: Rgb = Rgb::new(20, 60, 40);
const FELT_AI: Rgb = Rgb::new(30, 30, 40);
const FELT_HIGHLIGHT: Rgb = Rgb::new(60, 120, 70);
const CARD_FG: Rgb = Rgb::new(235, 235, 235);
const CARD_RED: Rgb = Rgb::new(235, 90, 90);
const DRAG_FG: Rgb = Rgb::new(250, 210, 80);
const CURSOR_BG: Rgb = Rgb::new(90, 90, 160);

const HELP: &str = "[s] start  [e] end  [p] submit  [r] refresh  [q] quit  mouse/space: move cards";

/// Renders the two boards, score lines, status row and result alert.
#[derive(Debug, Clone)]
pub struct TableView {
    show_help: bool,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView {
    pub fn new() -> Self {
        Self { show_help: true }
    }

    pub fn without_help(mut self) -> Self {
        self.show_help = false;
        self
    }

    /// Render the whole table into an existing framebuffer.
    ///
    /// `cursor` is the keyboard pan cursor, drawn as an inverted cell.
    pub fn render_into(
        &self,
        table: &Table,
        layout: &TableLayout,
        cursor: Option<Point>,
        fb: &mut FrameBuffer,
    ) {
        let vp = layout.viewport();
        fb.resize(vp.width, vp.height);
        fb.clear(CellStyle::default().cell(' '));

        self.draw_title(fb, table, layout);

        let highlight = table.highlighted();
        for seat in [Seat::Ai, Seat::Player] {
            self.draw_header(fb, table, layout, seat);
            let hl = if seat == Seat::Player { highlight } else { None };
            self.render_board(fb, layout, table.board(seat), seat, hl, table);
        }

        self.draw_scores(fb, table, layout);
        self.draw_notice(fb, table, layout);

        if let Some(session) = table.drag_session() {
            let p = session.position();
            draw_card(fb, p.x, p.y, &session.card, CellStyle::fg_bg(DRAG_FG, BG).bold());
        }

        if let Some(p) = cursor {
            let style = fb
                .get(p.x.max(0) as u16, p.y.max(0) as u16)
                .map(|c| CellStyle {
                    bg: CURSOR_BG,
                    ..c.style
                })
                .unwrap_or_else(|| CellStyle::fg_bg(CARD_FG, CURSOR_BG));
            fb.restyle(p.x, p.y, style);
        }

        if let Some(lines) = table.alert() {
            draw_alert(fb, vp, lines);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, table: &Table, layout: &TableLayout, cursor: Option<Point>) -> FrameBuffer {
        let vp = layout.viewport();
        let mut fb = FrameBuffer::new(vp.width, vp.height);
        self.render_into(table, layout, cursor, &mut fb);
        fb
    }

    /// Redraw the three line regions of one seat's board.
    ///
    /// Each region is wiped and its cards re-created from `layout`, tagged by
    /// seat and line. `highlight` marks the current drop target.
    pub fn render_board(
        &self,
        fb: &mut FrameBuffer,
        layout: &TableLayout,
        board: &Board,
        seat: Seat,
        highlight: Option<Line>,
        table: &Table,
    ) {
        for line in Line::DISPLAY {
            let target = LineTarget::new(seat, line);
            let Some(region) = layout.region(target) else {
                continue;
            };
            let r = region.rect;

            let felt = match (seat, highlight == Some(line)) {
                (Seat::Ai, _) => FELT_AI,
                (Seat::Player, true) => FELT_HIGHLIGHT,
                (Seat::Player, false) => FELT,
            };
            fb.fill_rect(r.x, r.y, r.w, r.h, ' ', CellStyle::fg_bg(CARD_FG, felt));

            let label_style = CellStyle::default().bold();
            let count = board.line(line).len();
            let label = match table.capacity().limit(line) {
                Some(max) => format!("{:<6} {}/{}", line.as_str(), count, max),
                None => format!("{:<6} {}", line.as_str(), count),
            };
            fb.put_str(1, r.y + 1, &label[..label.len().min(LABEL_W as usize - 1)], label_style);

            for el in layout.cards_in(target) {
                draw_card(fb, el.rect.x, el.rect.y, &el.slot.card, card_style(&el.slot.card, felt));
            }
        }
    }

    fn draw_title(&self, fb: &mut FrameBuffer, table: &Table, layout: &TableLayout) {
        let y = layout.title_row();
        let mut x = 0;
        let title = CellStyle::default().bold();
        fb.put_str(x, y, "OFC", title);
        x += 4;
        if let Some(n) = table.state().remaining_deck {
            let deck = format!("deck {n}");
            fb.put_str(x, y, &deck, CellStyle::default().dim());
            x += deck.len() as i32 + 1;
        }
        if self.show_help {
            fb.put_str(x + 1, y, HELP, CellStyle::default().dim());
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, table: &Table, layout: &TableLayout, seat: Seat) {
        let y = layout.header_row(seat);
        let name = match seat {
            Seat::Player => "PLAYER",
            Seat::Ai => "AI",
        };
        fb.put_str(1, y, name, CellStyle::default().bold());
        let n = table.board(seat).len();
        fb.put_str(10, y, &format!("{n} cards"), CellStyle::default().dim());
    }

    fn draw_scores(&self, fb: &mut FrameBuffer, table: &Table, layout: &TableLayout) {
        let Some(result) = table.result() else {
            return;
        };
        let style = CellStyle::default().bold();
        for seat in [Seat::Player, Seat::Ai] {
            fb.put_str(1, layout.score_row(seat), &result.summary(seat), style);
        }
    }

    fn draw_notice(&self, fb: &mut FrameBuffer, table: &Table, layout: &TableLayout) {
        let Some(notice) = table.notice() else {
            return;
        };
        let style = match notice.kind {
            NoticeKind::Info => CellStyle::default(),
            NoticeKind::Error => CellStyle::fg_bg(CARD_RED, BG).bold(),
        };
        fb.put_str(1, layout.notice_row(), &notice.text, style);
    }
}

fn card_style(card: &Card, felt: Rgb) -> CellStyle {
    let s = card.as_str();
    let red = s.ends_with(['h', 'd'])
        || s.contains("hearts")
        || s.contains("diamonds");
    CellStyle::fg_bg(if red { CARD_RED } else { CARD_FG }, felt)
}

fn draw_card(fb: &mut FrameBuffer, x: i32, y: i32, card: &Card, style: CellStyle) {
    let (w, h) = card_size(card);
    fb.fill_rect(x, y, w, h, ' ', style);
    fb.draw_box(x, y, w, h, style);
    fb.put_str(x + 1, y + 1, card.as_str(), style);
}

fn draw_alert(fb: &mut FrameBuffer, vp: Viewport, lines: &[String]) {
    let footer = "press any key";
    let inner_w = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(footer.len()))
        .max()
        .unwrap_or_default() as i32;
    let w = inner_w + 4;
    let h = lines.len() as i32 + 4;
    let x = (vp.width as i32 - w).max(0) / 2;
    let y = (vp.height as i32 - h).max(0) / 2;

    let style = CellStyle::fg_bg(Rgb::new(255, 255, 255), Rgb::new(40, 40, 60)).bold();
    fb.fill_rect(x, y, w, h, ' ', style);
    fb.draw_box(x, y, w, h, style);
    for (i, line) in lines.iter().enumerate() {
        fb.put_str(x + 2, y + 1 + i as i32, line, style);
    }
    fb.put_str(x + 2, y + h - 2, footer, CellStyle { bold: false, ..style }.dim());
}
