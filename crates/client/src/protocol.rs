//! Wire protocol - JSON bodies exchanged with the round service.
//!
//! | Endpoint | Response |
//! |----------|----------|
//! | `POST /start` | `{"status":"ok","state":{...}}` |
//! | `POST /play` | `{"status":"ok","state":{...}}` or `{"status":"error","message":"..."}` |
//! | `POST /end` | `{"status":"ok","scores":{...},"royalties":{...}}` |
//! | `GET /state` | bare state object |
//!
//! A state object is `{"player_board":B,"ai_board":B,"remaining_deck":N}` where each
//! board is `{"bottom":[..],"middle":[..],"top":[..]}` of card identifiers.
//!
//! Parsing is strict: anything that cannot become a well-formed [`GameState`] or
//! [`RoundResult`] is a [`RoundError::Protocol`], so undefined values never reach
//! the renderer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{Board, GameState, Royalty, RoundResult};
use crate::error::RoundError;
use crate::types::{Card, Line};

pub const STATUS_OK: &str = "ok";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireBoard {
    pub bottom: Vec<String>,
    pub middle: Vec<String>,
    pub top: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireState {
    pub player_board: WireBoard,
    pub ai_board: WireBoard,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_deck: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct StateBody {
    state: WireState,
}

#[derive(Debug, Clone, Deserialize)]
struct WireScores {
    player: f64,
    ai: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct WireRoyalties {
    player: Map<String, Value>,
    ai: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct EndBody {
    scores: WireScores,
    royalties: WireRoyalties,
}

/// Body of `POST /play`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayRequest {
    pub player_move: WireBoard,
}

impl From<&Board> for WireBoard {
    fn from(board: &Board) -> Self {
        let ids = |line: Line| -> Vec<String> { board.line(line).iter().map(Card::to_string).collect() };
        Self {
            bottom: ids(Line::Bottom),
            middle: ids(Line::Middle),
            top: ids(Line::Top),
        }
    }
}

impl From<&Board> for PlayRequest {
    fn from(board: &Board) -> Self {
        Self {
            player_move: WireBoard::from(board),
        }
    }
}

impl WireBoard {
    fn into_board(self, seat: &str) -> Result<Board, RoundError> {
        let cards = |line: Line, ids: Vec<String>| -> Result<Vec<Card>, RoundError> {
            ids.into_iter()
                .map(|id| {
                    if id.trim().is_empty() {
                        Err(RoundError::protocol(format!(
                            "empty card identifier in {seat} {line} line"
                        )))
                    } else {
                        Ok(Card::new(id))
                    }
                })
                .collect()
        };
        Ok(Board::from_lines(
            cards(Line::Bottom, self.bottom)?,
            cards(Line::Middle, self.middle)?,
            cards(Line::Top, self.top)?,
        ))
    }
}

impl WireState {
    /// Convert into a validated [`GameState`].
    pub fn into_state(self) -> Result<GameState, RoundError> {
        let state = GameState {
            player: self.player_board.into_board("player")?,
            ai: self.ai_board.into_board("ai")?,
            remaining_deck: self.remaining_deck,
        };
        if let Some(card) = state.duplicate_card() {
            return Err(RoundError::protocol(format!(
                "card {card} appears more than once"
            )));
        }
        Ok(state)
    }
}

/// Parse the body and check the `status` envelope.
fn checked_envelope(body: &str) -> Result<Value, RoundError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| RoundError::protocol(format!("response is not JSON: {e}")))?;
    let status = value
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| RoundError::protocol("missing string field `status`"))?;
    if status != STATUS_OK {
        let detail = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("service returned status {status:?}"));
        return Err(RoundError::request_failed(detail));
    }
    Ok(value)
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, RoundError> {
    serde_json::from_value(value).map_err(|e| RoundError::protocol(e.to_string()))
}

/// Parse a `/start` or `/play` response.
pub fn parse_state_response(body: &str) -> Result<GameState, RoundError> {
    let value = checked_envelope(body)?;
    decode::<StateBody>(value)?.state.into_state()
}

/// Parse a bare `/state` response.
pub fn parse_bare_state(body: &str) -> Result<GameState, RoundError> {
    let wire: WireState = serde_json::from_str(body)
        .map_err(|e| RoundError::protocol(format!("invalid state: {e}")))?;
    wire.into_state()
}

/// Parse an `/end` response.
pub fn parse_end_response(body: &str) -> Result<RoundResult, RoundError> {
    let value = checked_envelope(body)?;
    let end: EndBody = decode(value)?;
    Ok(RoundResult {
        player_score: end.scores.player,
        ai_score: end.scores.ai,
        player_royalty: royalty_from_map(&end.royalties.player),
        ai_royalty: royalty_from_map(&end.royalties.ai),
    })
}

/// `total` when the service sends it, otherwise the sum of the numeric breakdown.
fn royalty_from_map(map: &Map<String, Value>) -> Royalty {
    let breakdown: Vec<(String, f64)> = map
        .iter()
        .filter(|(k, _)| k.as_str() != "total")
        .filter_map(|(k, v)| v.as_f64().map(|n| (k.clone(), n)))
        .collect();
    let total = map
        .get("total")
        .and_then(Value::as_f64)
        .unwrap_or_else(|| breakdown.iter().map(|(_, n)| n).sum());
    Royalty { total, breakdown }
}
