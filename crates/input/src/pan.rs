//! Keyboard pan adapter.
//!
//! The terminal stand-in for a touch pan: a cursor is moved with the arrow keys,
//! `Space`/`Enter` over a card starts a pan, arrows then pan the card by a delta
//! relative to the start point, and `Space`/`Enter` ends it. The drop target is
//! found by hit-testing the final pan centre. `Esc` cancels.

use crossterm::event::KeyCode;

use crate::core::{GestureHandler, GestureStart, HitTest};
use crate::types::{Offset, Point};
use crate::GestureEffect;

/// Horizontal pan step in columns.
pub const PAN_STEP_X: i32 = 2;
/// Vertical pan step in rows (one line region).
pub const PAN_STEP_Y: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pan {
    start: Point,
    delta: Offset,
}

#[derive(Debug, Clone)]
pub struct PanAdapter {
    cursor: Point,
    pan: Option<Pan>,
}

impl PanAdapter {
    pub fn new(cursor: Point) -> Self {
        Self {
            cursor,
            pan: None,
        }
    }

    /// Current cursor / pan centre.
    pub fn cursor(&self) -> Point {
        match self.pan {
            Some(pan) => pan.start.translate(pan.delta),
            None => self.cursor,
        }
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Move the idle cursor, e.g. back to the first card after a new deal.
    pub fn reset_cursor(&mut self, p: Point) {
        if self.pan.is_none() {
            self.cursor = p;
        }
    }

    /// Forget a pan whose gesture was closed elsewhere.
    pub fn reset(&mut self) {
        if let Some(pan) = self.pan.take() {
            self.cursor = pan.start;
        }
    }

    /// Keys this adapter consumes: arrows, `Space`, `Enter`, `Esc`.
    pub fn handle_key<H, T>(&mut self, code: KeyCode, hit: &T, handler: &mut H) -> Option<GestureEffect>
    where
        H: GestureHandler,
        T: HitTest,
    {
        let step = match code {
            KeyCode::Left => Some(Offset::new(-PAN_STEP_X, 0)),
            KeyCode::Right => Some(Offset::new(PAN_STEP_X, 0)),
            KeyCode::Up => Some(Offset::new(0, -PAN_STEP_Y)),
            KeyCode::Down => Some(Offset::new(0, PAN_STEP_Y)),
            _ => None,
        };

        if let Some(step) = step {
            return Some(match self.pan.as_mut() {
                Some(pan) => {
                    pan.delta = Offset::new(pan.delta.dx + step.dx, pan.delta.dy + step.dy);
                    let centre = pan.start.translate(pan.delta);
                    handler.gesture_update(pan.delta, hit.line_at(centre));
                    GestureEffect::Moved
                }
                None => {
                    self.cursor = self.cursor.translate(step);
                    GestureEffect::CursorMoved
                }
            });
        }

        match code {
            KeyCode::Char(' ') | KeyCode::Enter => match self.pan.take() {
                Some(pan) => {
                    let centre = pan.start.translate(pan.delta);
                    self.cursor = centre;
                    Some(GestureEffect::Dropped(handler.gesture_end(hit.line_at(centre))))
                }
                None => {
                    let grab = hit.grab_at(self.cursor)?;
                    let start = handler.gesture_start(grab);
                    if start == GestureStart::Started {
                        self.pan = Some(Pan {
                            start: self.cursor,
                            delta: Offset::ZERO,
                        });
                    }
                    Some(GestureEffect::Started(start))
                }
            },
            KeyCode::Esc => {
                let pan = self.pan.take()?;
                self.cursor = pan.start;
                Some(GestureEffect::Dropped(handler.gesture_cancel()))
            }
            _ => None,
        }
    }
}
