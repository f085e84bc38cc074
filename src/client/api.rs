use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::protocol::{ErrorBody, GameResponse, GuessRequest, NewGameRequest};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("game session not found")]
    NotFound,

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed server response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait GameApi: Send + Sync {
    async fn start_game(&self, request: &NewGameRequest) -> Result<GameResponse, ApiError>;

    async fn guess(&self, request: &GuessRequest) -> Result<GameResponse, ApiError>;
}

pub struct HttpGameApi {
    http: reqwest::Client,
    start_url: String,
    guess_url: String,
}

impl HttpGameApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            start_url: config.start_url(),
            guess_url: config.guess_url(),
        })
    }

    async fn post<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<GameResponse, ApiError> {
        log::debug!("POST {}", url);
        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        log::debug!("{} -> {}: {}", url, status, text);
        decode_response(status, &text)
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn start_game(&self, request: &NewGameRequest) -> Result<GameResponse, ApiError> {
        self.post(&self.start_url, request).await
    }

    async fn guess(&self, request: &GuessRequest) -> Result<GameResponse, ApiError> {
        self.post(&self.guess_url, request).await
    }
}

fn decode_response(status: StatusCode, body: &str) -> Result<GameResponse, ApiError> {
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.trim().to_string());
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
