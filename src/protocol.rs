use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    pub id: String,
    pub letter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: String,
    #[serde(default)]
    pub masked_word: String,
    #[serde(default)]
    pub failed_attempts: u32,
    #[serde(default)]
    pub max_attempts: u32,
    pub status: GameStatus,
    #[serde(default)]
    pub message: Option<String>,
}

impl GameResponse {
    pub fn revealed_word(&self) -> String {
        self.masked_word.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

// Error bodies carry only a message; every other field is null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_response() {
        let json = r#"{"id":"g-1","maskedWord":"_ A _","failedAttempts":2,"maxAttempts":6,"status":"ACTIVE","message":""}"#;
        let res: GameResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.id, "g-1");
        assert_eq!(res.masked_word, "_ A _");
        assert_eq!(res.failed_attempts, 2);
        assert_eq!(res.max_attempts, 6);
        assert_eq!(res.status, GameStatus::Active);
        assert_eq!(res.revealed_word(), "_A_");
    }

    #[test]
    fn new_game_request_omits_missing_budget() {
        let body = serde_json::to_string(&NewGameRequest::default()).unwrap();
        assert_eq!(body, "{}");
        let body = serde_json::to_string(&NewGameRequest {
            max_attempts: Some(8),
        })
        .unwrap();
        assert_eq!(body, r#"{"maxAttempts":8}"#);
    }

    #[test]
    fn error_body_tolerates_null_fields() {
        let json = r#"{"id":null,"maskedWord":null,"failedAttempts":0,"maxAttempts":0,"status":null,"message":"Game not found with ID: x"}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.message.as_deref(), Some("Game not found with ID: x"));
    }
}
