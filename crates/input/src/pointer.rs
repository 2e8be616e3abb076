//! Pointer drag-and-drop adapter (terminal mouse reporting).
//!
//! `Down(Left)` over a card opens a gesture, `Drag(Left)` tracks it in absolute
//! terminal coordinates and `Up(Left)` drops onto whatever line region is under
//! the release point.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::core::{GestureHandler, GestureStart, HitTest};
use crate::types::Point;
use crate::GestureEffect;

#[derive(Debug, Clone, Default)]
pub struct PointerAdapter {
    /// Where the button went down, while this adapter owns the open gesture.
    press: Option<Point>,
}

impl PointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn handle<H, T>(&mut self, ev: MouseEvent, hit: &T, handler: &mut H) -> Option<GestureEffect>
    where
        H: GestureHandler,
        T: HitTest,
    {
        let p = Point::new(ev.column as i32, ev.row as i32);
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let grab = hit.grab_at(p)?;
                let start = handler.gesture_start(grab);
                if start == GestureStart::Started {
                    self.press = Some(p);
                }
                Some(GestureEffect::Started(start))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let origin = self.press?;
                handler.gesture_update(p.offset_from(origin), hit.line_at(p));
                Some(GestureEffect::Moved)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.press.take()?;
                Some(GestureEffect::Dropped(handler.gesture_end(hit.line_at(p))))
            }
            _ => None,
        }
    }

    /// Forget a press whose gesture was closed elsewhere (e.g. Esc, new round).
    pub fn reset(&mut self) {
        self.press = None;
    }
}
