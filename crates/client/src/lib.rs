//! Client module - talks to the round service over HTTP with a JSON protocol
//!
//! The service deals cards, plays the automated opponent and scores rounds.
//! This crate only issues requests and turns the answers into table state.
//!
//! # Endpoints
//!
//! - **POST /start**: deal a new round, returns `{status, state}`
//! - **POST /play**: submit the player's arrangement, returns `{status, state}`
//! - **POST /end**: score the round, returns `{status, scores, royalties}`
//! - **GET /state**: current state object
//!
//! # Environment Variables
//!
//! - `OFC_SERVER_URL`: service base URL (default: "http://127.0.0.1:5000")
//! - `OFC_REQUEST_TIMEOUT_MS`: optional request timeout
//! - `OFC_LINE_CAPACITY`: line capacities, `top,middle,bottom` or `off`
//! - `OFC_LOG_PATH`: tracing output file
//!
//! # Implementation
//!
//! - [`service::RoundService`] is the seam; [`http::HttpRoundService`] uses **reqwest**
//! - [`runtime::RoundLink`] owns a **tokio** runtime and bridges it to the sync UI loop
//! - [`controller`] applies replies: success replaces state, failure raises a notice
//! - See [`protocol`] for the body shapes and validation rules

pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod protocol;
pub mod runtime;
pub mod service;

pub use ofc_core as core;
pub use ofc_types as types;

pub use config::ClientConfig;
pub use controller::{apply_reply, RoundController, RoundOutcome};
pub use error::RoundError;
pub use http::HttpRoundService;
pub use runtime::RoundLink;
pub use service::{dispatch, RoundReply, RoundRequest, RoundService};
