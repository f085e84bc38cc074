use super::canvas::{PixelCanvas, Rect, Rgba};
use super::hud::{self, TEXT_COLOR};
use super::view_model::{KeyState, ViewModel};

const KEY_W: f32 = 60.0;
const KEY_H: f32 = 52.0;
const KEY_GAP: f32 = 8.0;
const NEW_GAME_W: f32 = 220.0;
const LABEL_SCALE: u32 = 3;

const NEUTRAL_FILL: Rgba = [226, 228, 234, 255];
const CORRECT_FILL: Rgba = [120, 200, 130, 255];
const WRONG_FILL: Rgba = [232, 120, 120, 255];
const ACTION_FILL: Rgba = [130, 170, 235, 255];
const DISABLED_TEXT: Rgba = [150, 150, 160, 255];
const BORDER: Rgba = [90, 90, 100, 255];

const ROWS: [&str; 3] = ["ABCDEFGHIJ", "KLMNOPQRST", "UVWXYZ"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Letter(char),
    NewGame,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyCap {
    pub action: KeyAction,
    pub rect: Rect,
}

pub struct KeyboardPanel {
    keys: Vec<KeyCap>,
}

impl KeyboardPanel {
    pub fn new(umlauts: bool, top: f32, frame_width: f32) -> Self {
        let mut rows: Vec<Vec<char>> = ROWS.iter().map(|r| r.chars().collect()).collect();
        if umlauts {
            rows[2].extend(['Ä', 'Ö', 'Ü']);
        }

        let mut keys = Vec::new();
        let mut y = top;
        for row in &rows {
            let row_w = row.len() as f32 * (KEY_W + KEY_GAP) - KEY_GAP;
            let mut x = ((frame_width - row_w) * 0.5).max(0.0);
            for letter in row {
                keys.push(KeyCap {
                    action: KeyAction::Letter(*letter),
                    rect: Rect::new(x, y, KEY_W, KEY_H),
                });
                x += KEY_W + KEY_GAP;
            }
            y += KEY_H + KEY_GAP;
        }
        keys.push(KeyCap {
            action: KeyAction::NewGame,
            rect: Rect::new(
                ((frame_width - NEW_GAME_W) * 0.5).max(0.0),
                y + KEY_GAP,
                NEW_GAME_W,
                KEY_H,
            ),
        });

        Self { keys }
    }

    #[cfg(test)]
    pub fn keys(&self) -> &[KeyCap] {
        &self.keys
    }

    pub fn hit_test(&self, point: [f32; 2]) -> Option<KeyAction> {
        self.keys
            .iter()
            .find(|k| k.rect.contains(point))
            .map(|k| k.action)
    }

    pub fn is_enabled(action: KeyAction, vm: &ViewModel) -> bool {
        if vm.busy {
            return false;
        }
        match action {
            KeyAction::Letter(letter) => {
                !vm.is_game_over
                    && !vm.masked_word.is_empty()
                    && vm.key_states.get(&letter) == Some(&KeyState::Neutral)
            }
            KeyAction::NewGame => true,
        }
    }

    pub fn draw(&self, canvas: &mut PixelCanvas, vm: &ViewModel) {
        for key in &self.keys {
            let enabled = Self::is_enabled(key.action, vm);
            let (fill, label) = match key.action {
                KeyAction::Letter(letter) => {
                    let fill = match vm.key_state(letter) {
                        KeyState::Neutral => NEUTRAL_FILL,
                        KeyState::Correct => CORRECT_FILL,
                        KeyState::Wrong => WRONG_FILL,
                    };
                    (fill, letter.to_string())
                }
                KeyAction::NewGame => (ACTION_FILL, "NEW GAME".to_string()),
            };
            let scale = match key.action {
                KeyAction::Letter(_) => LABEL_SCALE,
                KeyAction::NewGame => 2,
            };

            canvas.fill_rect(key.rect, fill);
            canvas.stroke_rect(key.rect, 2.0, BORDER);
            let text_h = (8 * scale) as f32;
            let y = key.rect.y + (key.rect.h - text_h) * 0.5;
            let color = if enabled { TEXT_COLOR } else { DISABLED_TEXT };
            hud::draw_text_centered(canvas, key.rect, y, &label, scale, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::view_model::alphabet;

    fn center(rect: Rect) -> [f32; 2] {
        [rect.x + rect.w * 0.5, rect.y + rect.h * 0.5]
    }

    fn active_vm(umlauts: bool) -> ViewModel {
        let mut vm = ViewModel::new(&alphabet(umlauts));
        vm.masked_word = "_ _ _".to_string();
        vm
    }

    #[test]
    fn lays_out_every_letter_once() {
        let panel = KeyboardPanel::new(true, 0.0, 900.0);
        let letters: Vec<char> = panel
            .keys()
            .iter()
            .filter_map(|k| match k.action {
                KeyAction::Letter(c) => Some(c),
                KeyAction::NewGame => None,
            })
            .collect();
        assert_eq!(letters, alphabet(true));

        let latin_only = KeyboardPanel::new(false, 0.0, 900.0);
        assert_eq!(latin_only.keys().len(), 27);
    }

    #[test]
    fn hit_test_finds_key_under_point() {
        let panel = KeyboardPanel::new(true, 300.0, 900.0);
        for key in panel.keys() {
            assert_eq!(panel.hit_test(center(key.rect)), Some(key.action));
        }
        assert_eq!(panel.hit_test([1.0, 1.0]), None);
    }

    #[test]
    fn guessed_letters_are_disabled() {
        let mut vm = active_vm(false);
        vm.key_states.insert('E', KeyState::Wrong);
        assert!(!KeyboardPanel::is_enabled(KeyAction::Letter('E'), &vm));
        assert!(KeyboardPanel::is_enabled(KeyAction::Letter('F'), &vm));
    }

    #[test]
    fn finished_or_busy_game_blocks_letters() {
        let mut vm = active_vm(false);
        vm.is_game_over = true;
        assert!(!KeyboardPanel::is_enabled(KeyAction::Letter('A'), &vm));
        assert!(KeyboardPanel::is_enabled(KeyAction::NewGame, &vm));

        vm.busy = true;
        assert!(!KeyboardPanel::is_enabled(KeyAction::NewGame, &vm));
    }

    #[test]
    fn key_fill_reflects_state() {
        let panel = KeyboardPanel::new(false, 0.0, 900.0);
        let mut vm = active_vm(false);
        vm.key_states.insert('A', KeyState::Correct);
        vm.key_states.insert('B', KeyState::Wrong);
        let mut canvas = PixelCanvas::new(900, 300);
        panel.draw(&mut canvas, &vm);

        let corner = |action: KeyAction| {
            let key = panel.keys().iter().find(|k| k.action == action).unwrap();
            canvas
                .pixel(key.rect.x as u32 + 4, key.rect.y as u32 + 4)
                .unwrap()
        };
        assert_eq!(corner(KeyAction::Letter('A')), CORRECT_FILL);
        assert_eq!(corner(KeyAction::Letter('B')), WRONG_FILL);
        assert_eq!(corner(KeyAction::Letter('C')), NEUTRAL_FILL);
    }
}
