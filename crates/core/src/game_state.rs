//! Authoritative snapshots received from the round service.
//!
//! A [`GameState`] is always replaced wholesale; nothing in this crate merges two
//! snapshots field by field.

use std::collections::HashSet;

use crate::board::Board;
use crate::types::{Card, Seat};

/// Both boards as last confirmed by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub player: Board,
    pub ai: Board,
    /// Cards left in the service's deck, when reported.
    pub remaining_deck: Option<u32>,
}

impl GameState {
    pub fn new(player: Board, ai: Board) -> Self {
        Self {
            player,
            ai,
            remaining_deck: None,
        }
    }

    pub fn with_remaining_deck(mut self, remaining: u32) -> Self {
        self.remaining_deck = Some(remaining);
        self
    }

    pub fn board(&self, seat: Seat) -> &Board {
        match seat {
            Seat::Player => &self.player,
            Seat::Ai => &self.ai,
        }
    }

    /// First card identifier that appears more than once across both boards.
    pub fn duplicate_card(&self) -> Option<&Card> {
        let mut seen = HashSet::new();
        Seat::ALL
            .into_iter()
            .flat_map(|seat| self.board(seat).cards().map(|(_, c)| c))
            .find(|c| !seen.insert(*c))
    }
}

/// Royalty payload for one seat: a total and its (opaque) breakdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Royalty {
    pub total: f64,
    pub breakdown: Vec<(String, f64)>,
}

/// Scores and royalties produced by `endRound`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundResult {
    pub player_score: f64,
    pub ai_score: f64,
    pub player_royalty: Royalty,
    pub ai_royalty: Royalty,
}

impl RoundResult {
    pub fn score(&self, seat: Seat) -> f64 {
        match seat {
            Seat::Player => self.player_score,
            Seat::Ai => self.ai_score,
        }
    }

    pub fn royalty(&self, seat: Seat) -> &Royalty {
        match seat {
            Seat::Player => &self.player_royalty,
            Seat::Ai => &self.ai_royalty,
        }
    }

    /// Persistent score text for one seat, e.g. `Player: 15 points (+4 royalties)`.
    pub fn summary(&self, seat: Seat) -> String {
        let who = match seat {
            Seat::Player => "Player",
            Seat::Ai => "AI",
        };
        format!(
            "{who}: {} points (+{} royalties)",
            self.score(seat),
            self.royalty(seat).total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Line;

    #[test]
    fn test_duplicate_card_across_boards() {
        let state = GameState::new(
            Board::new().with(Line::Top, &["Ah"]),
            Board::new().with(Line::Bottom, &["Kd", "Ah"]),
        );
        assert_eq!(state.duplicate_card(), Some(&Card::new("Ah")));

        let clean = GameState::new(
            Board::new().with(Line::Top, &["Ah"]),
            Board::new().with(Line::Bottom, &["Kd"]),
        );
        assert_eq!(clean.duplicate_card(), None);
    }

    #[test]
    fn test_summary_formats_integral_scores() {
        let result = RoundResult {
            player_score: 15.0,
            ai_score: 9.0,
            player_royalty: Royalty {
                total: 4.0,
                breakdown: vec![],
            },
            ai_royalty: Royalty::default(),
        };
        assert_eq!(result.summary(Seat::Player), "Player: 15 points (+4 royalties)");
        assert_eq!(result.summary(Seat::Ai), "AI: 9 points (+0 royalties)");
    }
}
