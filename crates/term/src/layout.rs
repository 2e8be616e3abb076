//! TableLayout: screen geometry for the six line regions and every card element.
//!
//! The layout is derived from the table on each frame and doubles as the hit-test
//! surface for the input adapters, so what is drawn is exactly what can be grabbed.

use arrayvec::ArrayVec;

use crate::core::{CardRef, Grab, HitTest, Table};
use crate::types::{Card, Line, LineTarget, Point, Seat};

/// Columns reserved on the left of each line for its label.
pub const LABEL_W: i32 = 13;
/// Rows per line region (card boxes are three rows tall).
pub const LINE_H: i32 = 3;
/// Columns between neighbouring card boxes.
pub const CARD_GAP: i32 = 1;
/// Minimum inner width of a card box.
pub const MIN_CARD_INNER: i32 = 2;

const TITLE_ROW: i32 = 0;
const AI_HEADER_ROW: i32 = 1;
const AI_LINES_TOP: i32 = 2;
const PLAYER_HEADER_ROW: i32 = AI_LINES_TOP + 3 * LINE_H;
const PLAYER_LINES_TOP: i32 = PLAYER_HEADER_ROW + 1;
const SCORE_ROW: i32 = PLAYER_LINES_TOP + 3 * LINE_H;
const NOTICE_ROW: i32 = SCORE_ROW + 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.x + self.w && p.y < self.y + self.h
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A drop-target region: one line of one seat's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRegion {
    pub target: LineTarget,
    pub rect: Rect,
}

/// A card drawn in normal flow inside its line region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardElement {
    pub slot: CardRef,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    viewport: Viewport,
    regions: ArrayVec<LineRegion, 6>,
    cards: Vec<CardElement>,
}

/// Outer size of the box drawn for `card`.
pub fn card_size(card: &Card) -> (i32, i32) {
    let inner = (card.glyph_width() as i32).max(MIN_CARD_INNER);
    (inner + 2, LINE_H)
}

/// Top row of a seat's line region.
pub fn line_row(seat: Seat, line: Line) -> i32 {
    let base = match seat {
        Seat::Ai => AI_LINES_TOP,
        Seat::Player => PLAYER_LINES_TOP,
    };
    let slot = Line::DISPLAY
        .iter()
        .position(|l| *l == line)
        .unwrap_or_default() as i32;
    base + slot * LINE_H
}

impl TableLayout {
    /// Lay out both boards of `table` for `viewport`.
    ///
    /// The card of an open drag session is left out of its line's flow; the view
    /// draws it detached at the session's position instead.
    pub fn compute(table: &Table, viewport: Viewport) -> Self {
        let dragged = table.drag_session().map(|s| (s.origin, &s.card));
        let region_w = (viewport.width as i32 - LABEL_W).max(0);

        let mut regions = ArrayVec::new();
        let mut cards = Vec::new();

        for seat in [Seat::Ai, Seat::Player] {
            let board = table.board(seat);
            for line in Line::DISPLAY {
                let y = line_row(seat, line);
                regions.push(LineRegion {
                    target: LineTarget::new(seat, line),
                    rect: Rect::new(LABEL_W, y, region_w, LINE_H),
                });

                let mut x = LABEL_W + 1;
                for (index, card) in board.line(line).iter().enumerate() {
                    if seat == Seat::Player && dragged == Some((line, card)) {
                        continue;
                    }
                    let (w, h) = card_size(card);
                    cards.push(CardElement {
                        slot: CardRef {
                            seat,
                            line,
                            index,
                            card: card.clone(),
                        },
                        rect: Rect::new(x, y, w, h),
                    });
                    x += w + CARD_GAP;
                }
            }
        }

        Self {
            viewport,
            regions,
            cards,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn regions(&self) -> &[LineRegion] {
        &self.regions
    }

    pub fn region(&self, target: LineTarget) -> Option<&LineRegion> {
        self.regions.iter().find(|r| r.target == target)
    }

    pub fn cards(&self) -> &[CardElement] {
        &self.cards
    }

    pub fn cards_in(&self, target: LineTarget) -> impl Iterator<Item = &CardElement> + '_ {
        self.cards
            .iter()
            .filter(move |c| c.slot.seat == target.seat && c.slot.line == target.line)
    }

    /// Natural resting spot for a keyboard cursor: the first player card,
    /// or the start of the player's top line.
    pub fn home(&self) -> Point {
        self.cards
            .iter()
            .find(|c| c.slot.seat == Seat::Player)
            .map(|c| Point::new(c.rect.x + 1, c.rect.y + 1))
            .unwrap_or_else(|| Point::new(LABEL_W + 2, line_row(Seat::Player, Line::Top) + 1))
    }

    pub fn title_row(&self) -> i32 {
        TITLE_ROW
    }

    pub fn header_row(&self, seat: Seat) -> i32 {
        match seat {
            Seat::Ai => AI_HEADER_ROW,
            Seat::Player => PLAYER_HEADER_ROW,
        }
    }

    pub fn score_row(&self, seat: Seat) -> i32 {
        match seat {
            Seat::Player => SCORE_ROW,
            Seat::Ai => SCORE_ROW + 1,
        }
    }

    pub fn notice_row(&self) -> i32 {
        NOTICE_ROW
    }
}

impl HitTest for TableLayout {
    fn grab_at(&self, p: Point) -> Option<Grab> {
        self.cards.iter().find(|c| c.rect.contains(p)).map(|c| Grab {
            card: c.slot.clone(),
            anchor: c.rect.origin(),
        })
    }

    fn line_at(&self, p: Point) -> Option<LineTarget> {
        self.regions
            .iter()
            .find(|r| r.rect.contains(p))
            .map(|r| r.target)
    }
}
