use super::api::{ApiError, GameApi};
use super::store::ViewModelStore;
use super::view_model::{
    GuessStatus, KeyState, ViewModel, alphabet, neutral_keys, normalize_letter, umlaut_pair,
};
use crate::config::ClientConfig;
use crate::protocol::{GameResponse, GameStatus, GuessRequest, NewGameRequest};

pub const MSG_GAME_STARTED: &str = "New game started. Pick a letter!";
pub const MSG_CORRECT: &str = "Correct guess!";
pub const MSG_WRONG: &str = "Wrong guess. Try again!";
pub const MSG_RESTART_PROMPT: &str = "Press ENTER or click NEW GAME to play again.";
pub const MSG_SESSION_NOT_FOUND: &str = "Game session not found. Press ENTER to start a new game.";
pub const MSG_SERVER_ERROR: &str = "Server error, please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId(String);

impl GameId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    NoSession,
    Active(GameId),
    Over(GameId, Outcome),
}

impl Session {
    fn from_response(res: &GameResponse) -> Self {
        let id = GameId(res.id.clone());
        match res.status {
            GameStatus::Active => Session::Active(id),
            GameStatus::Won => Session::Over(id, Outcome::Won),
            GameStatus::Lost => Session::Over(id, Outcome::Lost),
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Session::Over(..))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartGame,
    Guess(char),
    Restart,
}

pub struct GameService<A> {
    api: A,
    store: ViewModelStore,
    session: Session,
    letters: Vec<char>,
    max_attempts: Option<u32>,
}

impl<A: GameApi> GameService<A> {
    pub fn new(api: A, store: ViewModelStore, config: &ClientConfig) -> Self {
        Self {
            api,
            store,
            session: Session::NoSession,
            letters: alphabet(config.umlauts),
            max_attempts: config.max_attempts,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn store(&self) -> &ViewModelStore {
        &self.store
    }

    pub async fn handle(&mut self, command: Command) {
        match command {
            Command::StartGame => self.start_game().await,
            Command::Guess(letter) => self.guess_letter(letter).await,
            Command::Restart => self.restart().await,
        }
    }

    pub async fn start_game(&mut self) {
        self.store.update(|vm| vm.busy = true);
        let request = NewGameRequest {
            max_attempts: self.max_attempts,
        };

        match self.api.start_game(&request).await {
            Ok(res) => {
                log::info!(
                    "started game {} ({} letters, {} attempts)",
                    res.id,
                    res.revealed_word().chars().count(),
                    res.max_attempts
                );
                self.session = Session::from_response(&res);
                let message = res
                    .message
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| MSG_GAME_STARTED.to_string());
                self.store.publish(ViewModel {
                    masked_word: res.masked_word.clone(),
                    errors_count: res.failed_attempts,
                    max_attempts: res.max_attempts,
                    key_states: neutral_keys(&self.letters),
                    last_status: GuessStatus::Neutral,
                    last_message: message,
                    game_status: res.status,
                    is_game_over: res.status.is_over(),
                    busy: false,
                });
            }
            Err(err) => {
                log::warn!("failed to start game: {}", err);
                if matches!(err, ApiError::NotFound) {
                    self.session = Session::NoSession;
                }
                let message = format!("Could not start a new game: {}", user_message(&err));
                self.publish_failure(message);
            }
        }
    }

    pub async fn restart(&mut self) {
        log::info!("restarting game");
        self.start_game().await;
    }

    pub async fn guess_letter(&mut self, letter: char) {
        let id = match self.session.clone() {
            Session::NoSession => {
                log::info!("no game in progress, starting one instead of guessing");
                self.start_game().await;
                return;
            }
            Session::Over(id, outcome) => {
                log::debug!("game {} is over ({:?}), ignoring guess", id.as_str(), outcome);
                return;
            }
            Session::Active(id) => id,
        };

        let letter = normalize_letter(letter);
        match self.store.snapshot().key_states.get(&letter) {
            None => {
                log::warn!("ignoring guess of unsupported letter {:?}", letter);
                return;
            }
            Some(KeyState::Neutral) => {}
            Some(state) => {
                log::debug!("letter {} already guessed ({:?})", letter, state);
                return;
            }
        }

        self.store.update(|vm| vm.busy = true);
        let request = GuessRequest {
            id: id.as_str().to_string(),
            letter: letter.to_string(),
        };

        match self.api.guess(&request).await {
            Ok(res) => self.apply_guess(letter, res),
            Err(err) => {
                log::warn!("guess {} for game {} failed: {}", letter, id.as_str(), err);
                if matches!(err, ApiError::NotFound) {
                    self.session = Session::NoSession;
                }
                self.publish_failure(user_message(&err).to_string());
            }
        }
    }

    fn apply_guess(&mut self, letter: char, res: GameResponse) {
        let revealed = res.masked_word.to_uppercase();
        let pair = umlaut_pair(letter);
        let correct =
            revealed.contains(letter) || pair.is_some_and(|p| revealed.contains(p));
        let key_state = if correct {
            KeyState::Correct
        } else {
            KeyState::Wrong
        };

        self.session = Session::from_response(&res);
        let message = match res.status {
            GameStatus::Active if correct => MSG_CORRECT.to_string(),
            GameStatus::Active => MSG_WRONG.to_string(),
            GameStatus::Won => {
                log::info!("game {} won", res.id);
                format!(
                    "You won! The word was {}. {}",
                    res.revealed_word(),
                    MSG_RESTART_PROMPT
                )
            }
            GameStatus::Lost => {
                log::info!("game {} lost", res.id);
                format!(
                    "Game over! You lost! The word was {}. {}",
                    res.revealed_word(),
                    MSG_RESTART_PROMPT
                )
            }
        };

        self.store.update(|vm| {
            vm.key_states.insert(letter, key_state);
            if let Some(pair) = pair {
                if let Some(state) = vm.key_states.get_mut(&pair) {
                    *state = key_state;
                }
            }
            vm.masked_word = res.masked_word;
            vm.errors_count = res.failed_attempts;
            if res.max_attempts > 0 {
                vm.max_attempts = res.max_attempts;
            }
            vm.game_status = res.status;
            vm.is_game_over = res.status.is_over();
            vm.last_status = if correct {
                GuessStatus::Correct
            } else {
                GuessStatus::Wrong
            };
            vm.last_message = message;
            vm.busy = false;
        });
    }

    fn publish_failure(&self, message: String) {
        self.store.update(|vm| {
            vm.last_status = GuessStatus::Neutral;
            vm.last_message = message;
            vm.busy = false;
        });
    }
}

fn user_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::NotFound => MSG_SESSION_NOT_FOUND,
        _ => MSG_SERVER_ERROR,
    }
}
