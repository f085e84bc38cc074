use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/games";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base: String,
    pub max_attempts: Option<u32>,
    pub umlauts: bool,
    pub auto_restart: Option<Duration>,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            max_attempts: None,
            umlauts: true,
            auto_restart: None,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    // Unset or unparseable variables keep the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base) = env::var("HANGMAN_API_BASE") {
            config = config.with_api_base(&base);
        }
        if let Some(max) = read_env::<u32>("HANGMAN_MAX_ATTEMPTS") {
            config.max_attempts = Some(max.max(1));
        }
        if let Some(umlauts) = read_env_bool("HANGMAN_UMLAUTS") {
            config.umlauts = umlauts;
        }
        if let Some(secs) = read_env::<u64>("HANGMAN_AUTO_RESTART_SECS") {
            config.auto_restart = Some(Duration::from_secs(secs));
        }
        if let Some(secs) = read_env::<u64>("HANGMAN_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        config
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api_base = trimmed.to_string();
        }
        self
    }

    pub fn start_url(&self) -> String {
        self.api_base.clone()
    }

    pub fn guess_url(&self) -> String {
        format!("{}/guess", self.api_base)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
