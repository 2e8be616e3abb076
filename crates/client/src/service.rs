//! The remote round service seen as an async collaborator.

use async_trait::async_trait;

use crate::core::{Board, GameState, RoundResult};
use crate::error::RoundError;
use crate::types::TableAction;

/// Operations the client needs from the service that deals, scores and plays the AI.
#[async_trait]
pub trait RoundService: Send + Sync {
    /// `POST /start`: deal a fresh round.
    async fn start_round(&self) -> Result<GameState, RoundError>;

    /// `POST /end`: score the round.
    async fn end_round(&self) -> Result<RoundResult, RoundError>;

    /// `POST /play`: submit the player's arrangement; the AI answers with its own.
    async fn submit_move(&self, player: &Board) -> Result<GameState, RoundError>;

    /// `GET /state`: current authoritative state.
    async fn fetch_state(&self) -> Result<GameState, RoundError>;
}

/// A request queued by the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundRequest {
    Start,
    End,
    Submit(Board),
    Refresh,
}

impl RoundRequest {
    pub fn action(&self) -> TableAction {
        match self {
            RoundRequest::Start => TableAction::StartRound,
            RoundRequest::End => TableAction::EndRound,
            RoundRequest::Submit(_) => TableAction::SubmitMove,
            RoundRequest::Refresh => TableAction::Refresh,
        }
    }
}

/// The service's answer to one [`RoundRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum RoundReply {
    Started(Result<GameState, RoundError>),
    Ended(Result<RoundResult, RoundError>),
    Submitted(Result<GameState, RoundError>),
    Refreshed(Result<GameState, RoundError>),
}

impl RoundReply {
    pub fn action(&self) -> TableAction {
        match self {
            RoundReply::Started(_) => TableAction::StartRound,
            RoundReply::Ended(_) => TableAction::EndRound,
            RoundReply::Submitted(_) => TableAction::SubmitMove,
            RoundReply::Refreshed(_) => TableAction::Refresh,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            RoundReply::Started(r) | RoundReply::Submitted(r) | RoundReply::Refreshed(r) => {
                r.is_ok()
            }
            RoundReply::Ended(r) => r.is_ok(),
        }
    }
}

/// Run one request against `service`.
pub async fn dispatch<S>(service: &S, request: RoundRequest) -> RoundReply
where
    S: RoundService + ?Sized,
{
    match request {
        RoundRequest::Start => RoundReply::Started(service.start_round().await),
        RoundRequest::End => RoundReply::Ended(service.end_round().await),
        RoundRequest::Submit(board) => RoundReply::Submitted(service.submit_move(&board).await),
        RoundRequest::Refresh => RoundReply::Refreshed(service.fetch_state().await),
    }
}
