//! Round controller: turns table actions into service requests and applies the
//! replies to the [`Table`].
//!
//! Success replaces the game state wholesale (or shows the round result).
//! Failure leaves the state untouched and raises an error notice; no failure
//! ends the session.

use tracing::{info, warn};

use crate::core::{DropOutcome, Notice, Table};
use crate::error::RoundError;
use crate::runtime::RoundLink;
use crate::service::{RoundReply, RoundRequest};
use crate::types::TableAction;

/// What applying one reply did to the table.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    StateReplaced {
        action: TableAction,
        /// A drag session invalidated by the new state, if any.
        cancelled_drag: Option<DropOutcome>,
    },
    ResultShown {
        /// A drag session closed because the round is over, if any.
        cancelled_drag: Option<DropOutcome>,
    },
    Failed {
        action: TableAction,
        error: RoundError,
    },
}

impl RoundOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RoundOutcome::Failed { .. })
    }
}

fn label(action: TableAction) -> &'static str {
    match action {
        TableAction::StartRound => "Start round",
        TableAction::EndRound => "End round",
        TableAction::SubmitMove => "Submit",
        TableAction::Refresh => "Refresh",
    }
}

/// Apply a service reply to the table.
pub fn apply_reply(table: &mut Table, reply: RoundReply) -> RoundOutcome {
    let action = reply.action();
    let result = match reply {
        RoundReply::Started(r) | RoundReply::Submitted(r) | RoundReply::Refreshed(r) => {
            r.map(|state| {
                let cancelled_drag = table.replace_state(state);
                RoundOutcome::StateReplaced {
                    action,
                    cancelled_drag,
                }
            })
        }
        RoundReply::Ended(r) => r.map(|result| RoundOutcome::ResultShown {
            cancelled_drag: table.show_result(result),
        }),
    };

    match result {
        Ok(outcome) => {
            info!(action = action.as_str(), "round reply applied");
            let text = match action {
                TableAction::StartRound => "Round started",
                TableAction::EndRound => "Round scored",
                TableAction::SubmitMove => "Arrangement accepted",
                TableAction::Refresh => "State refreshed",
            };
            table.notify(Notice::info(text));
            outcome
        }
        Err(error) => fail(table, action, error),
    }
}

fn fail(table: &mut Table, action: TableAction, error: RoundError) -> RoundOutcome {
    warn!(action = action.as_str(), code = error.code(), %error, "round request failed");
    table.notify(Notice::error(format!("{} failed: {error}", label(action))));
    RoundOutcome::Failed { action, error }
}

/// Issues requests over a [`RoundLink`] and applies replies as they arrive.
pub struct RoundController {
    link: RoundLink,
}

impl RoundController {
    pub fn new(link: RoundLink) -> Self {
        Self { link }
    }

    /// Queue the request behind `action`. The submit request carries the local player board.
    ///
    /// The previous notice is cleared; the reply sets the next one.
    pub fn request(&self, action: TableAction, table: &mut Table) {
        table.clear_notice();
        let request = match action {
            TableAction::StartRound => RoundRequest::Start,
            TableAction::EndRound => RoundRequest::End,
            TableAction::SubmitMove => RoundRequest::Submit(table.state().player.clone()),
            TableAction::Refresh => RoundRequest::Refresh,
        };
        if !self.link.send(request) {
            fail(
                table,
                action,
                RoundError::request_failed("round service link is closed"),
            );
        }
    }

    /// Drain every reply that has arrived and apply it to `table`.
    pub fn poll(&mut self, table: &mut Table) -> Vec<RoundOutcome> {
        let mut outcomes = Vec::new();
        while let Some(reply) = self.link.try_recv() {
            outcomes.push(apply_reply(table, reply));
        }
        outcomes
    }
}
