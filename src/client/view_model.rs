use std::collections::BTreeMap;

use crate::protocol::GameStatus;

const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UMLAUTS: &str = "ÄÖÜ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    #[default]
    Neutral,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessStatus {
    #[default]
    Neutral,
    Correct,
    Wrong,
}

pub fn alphabet(umlauts: bool) -> Vec<char> {
    let mut letters: Vec<char> = LATIN.chars().collect();
    if umlauts {
        letters.extend(UMLAUTS.chars());
    }
    letters
}

// Vowels and their umlauts share one key state.
pub fn umlaut_pair(letter: char) -> Option<char> {
    match letter {
        'A' => Some('Ä'),
        'O' => Some('Ö'),
        'U' => Some('Ü'),
        'Ä' => Some('A'),
        'Ö' => Some('O'),
        'Ü' => Some('U'),
        _ => None,
    }
}

// Letters whose uppercase is more than one char (ß -> SS) stay as typed and
// fall outside the alphabet.
pub fn normalize_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => letter,
    }
}

pub fn neutral_keys(letters: &[char]) -> BTreeMap<char, KeyState> {
    letters.iter().map(|l| (*l, KeyState::Neutral)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub masked_word: String,
    pub errors_count: u32,
    pub max_attempts: u32,
    pub key_states: BTreeMap<char, KeyState>,
    pub last_status: GuessStatus,
    pub last_message: String,
    pub game_status: GameStatus,
    pub is_game_over: bool,
    pub busy: bool,
}

impl ViewModel {
    pub fn new(letters: &[char]) -> Self {
        Self {
            masked_word: String::new(),
            errors_count: 0,
            max_attempts: 0,
            key_states: neutral_keys(letters),
            last_status: GuessStatus::Neutral,
            last_message: String::new(),
            game_status: GameStatus::Active,
            is_game_over: false,
            busy: false,
        }
    }

    pub fn key_state(&self, letter: char) -> KeyState {
        self.key_states.get(&letter).copied().unwrap_or_default()
    }
}
