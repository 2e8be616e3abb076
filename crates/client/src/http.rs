//! HTTP implementation of [`RoundService`] on top of reqwest.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::core::{Board, GameState, RoundResult};
use crate::error::RoundError;
use crate::protocol::{parse_bare_state, parse_end_response, parse_state_response, PlayRequest};
use crate::service::RoundService;

#[derive(Debug, Clone)]
pub struct HttpRoundService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRoundService {
    pub fn new(config: &ClientConfig) -> Result<Self, RoundError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.server_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send the request and return the body of a 2xx response.
    async fn body(&self, request: reqwest::RequestBuilder, path: &str) -> Result<String, RoundError> {
        let response = request.send().await.map_err(|e| {
            warn!(path, error = %e, "request failed");
            RoundError::request_failed(format!("{path}: {e}"))
        })?;
        let status = response.status();
        if !status.is_success() {
            warn!(path, %status, "non-success status");
            return Err(RoundError::request_failed(format!("{path}: HTTP {status}")));
        }
        let body = response.text().await?;
        debug!(path, bytes = body.len(), "response received");
        Ok(body)
    }
}

#[async_trait]
impl RoundService for HttpRoundService {
    async fn start_round(&self) -> Result<GameState, RoundError> {
        let body = self.body(self.client.post(self.url("/start")), "/start").await?;
        parse_state_response(&body)
    }

    async fn end_round(&self) -> Result<RoundResult, RoundError> {
        let body = self.body(self.client.post(self.url("/end")), "/end").await?;
        parse_end_response(&body)
    }

    async fn submit_move(&self, player: &Board) -> Result<GameState, RoundError> {
        let request = self
            .client
            .post(self.url("/play"))
            .json(&PlayRequest::from(player));
        let body = self.body(request, "/play").await?;
        parse_state_response(&body)
    }

    async fn fetch_state(&self) -> Result<GameState, RoundError> {
        let body = self.body(self.client.get(self.url("/state")), "/state").await?;
        parse_bare_state(&body)
    }
}
