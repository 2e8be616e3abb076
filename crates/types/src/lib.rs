//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the client.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (placement logic, terminal rendering, wire protocol).
//!
//! # Table Shape
//!
//! Each seat owns one board of three ordered lines:
//!
//! | Line | Default capacity |
//! |------|------------------|
//! | `top` | 3 |
//! | `middle` | 5 |
//! | `bottom` | 5 |
//!
//! Cards are opaque identifiers (`"Ah"`, `"10_of_hearts"`, ...). This layer never
//! interprets rank or suit.
//!
//! # Examples
//!
//! ```
//! use ofc_types::{Card, Line, LineCapacity, Seat};
//!
//! let card = Card::new("Kd");
//! assert_eq!(card.as_str(), "Kd");
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Line::from_str("Middle"), Some(Line::Middle));
//! assert_eq!(Seat::from_str("ai"), Some(Seat::Ai));
//!
//! let capacity = LineCapacity::default();
//! assert_eq!(capacity.limit(Line::Top), Some(3));
//! assert_eq!(LineCapacity::unbounded().limit(Line::Top), None);
//! ```

use std::fmt;

/// Default number of cards the top line holds.
pub const TOP_CAPACITY: usize = 3;

/// Default number of cards the middle line holds.
pub const MIDDLE_CAPACITY: usize = 5;

/// Default number of cards the bottom line holds.
pub const BOTTOM_CAPACITY: usize = 5;

/// Opaque card identifier (rank + suit as sent by the service).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(String);

impl Card {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Width of the identifier in terminal columns.
    pub fn glyph_width(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Card {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One of the three ordered slot groups of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Line {
    Bottom,
    Middle,
    Top,
}

impl Line {
    /// Lines in wire order.
    pub const ALL: [Line; 3] = [Line::Bottom, Line::Middle, Line::Top];

    /// Lines in on-screen order (top line drawn first).
    pub const DISPLAY: [Line; 3] = [Line::Top, Line::Middle, Line::Bottom];

    pub fn as_str(self) -> &'static str {
        match self {
            Line::Bottom => "bottom",
            Line::Middle => "middle",
            Line::Top => "top",
        }
    }

    /// Parse line from string (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bottom" => Some(Line::Bottom),
            "middle" => Some(Line::Middle),
            "top" => Some(Line::Top),
            _ => None,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player identity owning a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Player,
    Ai,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::Player, Seat::Ai];

    pub fn as_str(self) -> &'static str {
        match self {
            Seat::Player => "player",
            Seat::Ai => "ai",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "player" => Some(Seat::Player),
            "ai" => Some(Seat::Ai),
            _ => None,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line region on a specific seat's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineTarget {
    pub seat: Seat,
    pub line: Line,
}

impl LineTarget {
    pub const fn new(seat: Seat, line: Line) -> Self {
        Self { seat, line }
    }
}

/// Screen position in terminal cells. Signed so dragged elements may leave the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Offset {
        Offset::new(self.x - origin.x, self.y - origin.y)
    }

    pub fn translate(self, offset: Offset) -> Point {
        Point::new(self.x + offset.dx, self.y + offset.dy)
    }
}

/// Displacement of a dragged element relative to where the gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Per-line maximum card counts. `None` means the line is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCapacity {
    pub top: Option<usize>,
    pub middle: Option<usize>,
    pub bottom: Option<usize>,
}

impl Default for LineCapacity {
    fn default() -> Self {
        Self {
            top: Some(TOP_CAPACITY),
            middle: Some(MIDDLE_CAPACITY),
            bottom: Some(BOTTOM_CAPACITY),
        }
    }
}

impl LineCapacity {
    pub const fn new(top: usize, middle: usize, bottom: usize) -> Self {
        Self {
            top: Some(top),
            middle: Some(middle),
            bottom: Some(bottom),
        }
    }

    pub const fn unbounded() -> Self {
        Self {
            top: None,
            middle: None,
            bottom: None,
        }
    }

    pub fn limit(&self, line: Line) -> Option<usize> {
        match line {
            Line::Top => self.top,
            Line::Middle => self.middle,
            Line::Bottom => self.bottom,
        }
    }

    /// Whether a line currently holding `len` cards can take one more.
    pub fn admits(&self, line: Line, len: usize) -> bool {
        self.limit(line).map_or(true, |max| len < max)
    }

    /// Parse `"top,middle,bottom"` (e.g. `"3,5,5"`) or `"off"`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("off") || s.eq_ignore_ascii_case("none") {
            return Some(Self::unbounded());
        }
        let mut parts = s.split(',').map(|p| p.trim().parse::<usize>());
        let top = parts.next()?.ok()?;
        let middle = parts.next()?.ok()?;
        let bottom = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(top, middle, bottom))
    }
}

/// High-level table actions triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableAction {
    StartRound,
    EndRound,
    SubmitMove,
    Refresh,
}

impl TableAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TableAction::StartRound => "start",
            TableAction::EndRound => "end",
            TableAction::SubmitMove => "play",
            TableAction::Refresh => "state",
        }
    }
}
