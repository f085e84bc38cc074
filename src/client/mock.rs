use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::api::{ApiError, GameApi};
use crate::protocol::{GameResponse, GameStatus, GuessRequest, NewGameRequest};

#[derive(Default)]
struct MockState {
    start_replies: VecDeque<Result<GameResponse, ApiError>>,
    guess_replies: VecDeque<Result<GameResponse, ApiError>>,
    start_requests: Vec<NewGameRequest>,
    guess_requests: Vec<GuessRequest>,
}

#[derive(Clone, Default)]
pub struct MockGameApi {
    state: Arc<Mutex<MockState>>,
}

impl MockGameApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_start(&self, reply: Result<GameResponse, ApiError>) {
        self.state.lock().unwrap().start_replies.push_back(reply);
    }

    pub fn push_guess(&self, reply: Result<GameResponse, ApiError>) {
        self.state.lock().unwrap().guess_replies.push_back(reply);
    }

    pub fn start_calls(&self) -> usize {
        self.state.lock().unwrap().start_requests.len()
    }

    pub fn guess_calls(&self) -> usize {
        self.state.lock().unwrap().guess_requests.len()
    }

    pub fn start_requests(&self) -> Vec<NewGameRequest> {
        self.state.lock().unwrap().start_requests.clone()
    }

    pub fn guess_requests(&self) -> Vec<GuessRequest> {
        self.state.lock().unwrap().guess_requests.clone()
    }
}

#[async_trait]
impl GameApi for MockGameApi {
    async fn start_game(&self, request: &NewGameRequest) -> Result<GameResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.start_requests.push(request.clone());
        state.start_replies.pop_front().unwrap_or(Err(ApiError::Status {
            status: 500,
            message: "no reply queued".to_string(),
        }))
    }

    async fn guess(&self, request: &GuessRequest) -> Result<GameResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.guess_requests.push(request.clone());
        state.guess_replies.pop_front().unwrap_or(Err(ApiError::Status {
            status: 500,
            message: "no reply queued".to_string(),
        }))
    }
}

pub fn response(id: &str, masked_word: &str, failed_attempts: u32, status: GameStatus) -> GameResponse {
    GameResponse {
        id: id.to_string(),
        masked_word: masked_word.to_string(),
        failed_attempts,
        max_attempts: 6,
        status,
        message: None,
    }
}
