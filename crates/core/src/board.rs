//! Board - one seat's three ordered lines of cards.

use thiserror::Error;

use crate::types::{Card, Line, LineCapacity};

/// Why a card could not be moved between lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("card {card} is not in the {line} line")]
    CardNotInLine { card: Card, line: Line },
    #[error("the {line} line is full ({capacity} cards)")]
    LineFull { line: Line, capacity: usize },
}

/// Three ordered card sequences keyed by [`Line`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    bottom: Vec<Card>,
    middle: Vec<Card>,
    top: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(bottom: Vec<Card>, middle: Vec<Card>, top: Vec<Card>) -> Self {
        Self {
            bottom,
            middle,
            top,
        }
    }

    /// Builder-style helper used heavily by tests: `Board::new().with(Line::Top, &["Ah"])`.
    pub fn with(mut self, line: Line, cards: &[&str]) -> Self {
        *self.line_mut(line) = cards.iter().map(|c| Card::new(*c)).collect();
        self
    }

    pub fn line(&self, line: Line) -> &[Card] {
        match line {
            Line::Bottom => &self.bottom,
            Line::Middle => &self.middle,
            Line::Top => &self.top,
        }
    }

    fn line_mut(&mut self, line: Line) -> &mut Vec<Card> {
        match line {
            Line::Bottom => &mut self.bottom,
            Line::Middle => &mut self.middle,
            Line::Top => &mut self.top,
        }
    }

    pub fn len(&self) -> usize {
        self.bottom.len() + self.middle.len() + self.top.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate all cards with their line, in wire order.
    pub fn cards(&self) -> impl Iterator<Item = (Line, &Card)> + '_ {
        Line::ALL
            .into_iter()
            .flat_map(move |line| self.line(line).iter().map(move |c| (line, c)))
    }

    pub fn position(&self, line: Line, card: &Card) -> Option<usize> {
        self.line(line).iter().position(|c| c == card)
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards().any(|(_, c)| c == card)
    }

    /// Remove `card` from `from` and append it to the end of `to`.
    ///
    /// Moving within the same line relocates the card to the end of that line
    /// and never trips the capacity check. On error the board is unchanged.
    pub fn move_to_end(
        &mut self,
        card: &Card,
        from: Line,
        to: Line,
        capacity: &LineCapacity,
    ) -> Result<(), BoardError> {
        let idx = self
            .position(from, card)
            .ok_or_else(|| BoardError::CardNotInLine {
                card: card.clone(),
                line: from,
            })?;

        if from != to && !capacity.admits(to, self.line(to).len()) {
            return Err(BoardError::LineFull {
                line: to,
                capacity: capacity.limit(to).unwrap_or_default(),
            });
        }

        let moved = self.line_mut(from).remove(idx);
        self.line_mut(to).push(moved);
        Ok(())
    }

    /// Sorted copy of every card on the board (multiset view).
    pub fn card_multiset(&self) -> Vec<Card> {
        let mut all: Vec<Card> = self.cards().map(|(_, c)| c.clone()).collect();
        all.sort();
        all
    }
}
