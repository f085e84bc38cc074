use tokio::sync::mpsc;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::keyboard::{Key, NamedKey};

use super::keyboard::{KeyAction, KeyboardPanel};
use super::scene::{FRAME_HEIGHT, FRAME_WIDTH};
use super::service::Command;
use super::view_model::{ViewModel, normalize_letter};

pub struct GameShell {
    pub vm: ViewModel,
    cursor: Option<[f32; 2]>,
    net_tx: mpsc::UnboundedSender<Command>,
}

impl GameShell {
    pub fn new(vm: ViewModel, net_tx: mpsc::UnboundedSender<Command>) -> Self {
        Self {
            vm,
            cursor: None,
            net_tx,
        }
    }

    pub fn start(&self) {
        self.send(Command::StartGame);
    }

    pub fn apply_snapshot(&mut self, vm: ViewModel) {
        self.vm = vm;
    }

    pub fn set_cursor(&mut self, position: PhysicalPosition<f64>, window: PhysicalSize<u32>) {
        if window.width == 0 || window.height == 0 {
            self.cursor = None;
            return;
        }
        let x = position.x as f32 / window.width as f32 * FRAME_WIDTH as f32;
        let y = position.y as f32 / window.height as f32 * FRAME_HEIGHT as f32;
        self.cursor = Some([x, y]);
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn handle_click(&self, keyboard: &KeyboardPanel) {
        let Some(point) = self.cursor else {
            return;
        };
        if let Some(action) = keyboard.hit_test(point) {
            self.trigger(action);
        }
    }

    pub fn handle_key(&self, key: &Key) {
        match key {
            Key::Named(NamedKey::Enter) => self.trigger(KeyAction::NewGame),
            Key::Character(s) => {
                if let Some(c) = s.chars().next().filter(|c| c.is_alphabetic()) {
                    self.trigger(KeyAction::Letter(normalize_letter(c)));
                }
            }
            _ => {}
        }
    }

    // Input on a disabled key is dropped while a guess is in flight.
    pub fn trigger(&self, action: KeyAction) {
        if !KeyboardPanel::is_enabled(action, &self.vm) {
            log::debug!("ignoring {:?} while disabled", action);
            return;
        }
        match action {
            KeyAction::Letter(letter) => self.send(Command::Guess(letter)),
            KeyAction::NewGame => self.send(Command::Restart),
        }
    }

    pub fn update_window_title(&self, window: &winit::window::Window) {
        let word = if self.vm.masked_word.is_empty() {
            "..."
        } else {
            self.vm.masked_word.as_str()
        };
        let title = format!(
            "Hangman | {} | Errors: {}/{}",
            word, self.vm.errors_count, self.vm.max_attempts
        );
        window.set_title(&title);
    }

    fn send(&self, command: Command) {
        if self.net_tx.send(command).is_err() {
            log::warn!("network thread is gone, dropping {:?}", command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::view_model::{KeyState, alphabet};

    fn shell() -> (GameShell, mpsc::UnboundedReceiver<Command>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut vm = ViewModel::new(&alphabet(true));
        vm.masked_word = "_ _ _".to_string();
        (GameShell::new(vm, tx), rx)
    }

    #[test]
    fn letters_become_guesses() {
        let (shell, mut rx) = shell();
        shell.trigger(KeyAction::Letter('E'));
        assert_eq!(rx.try_recv().unwrap(), Command::Guess('E'));
    }

    #[test]
    fn typed_letters_are_uppercased() {
        let (shell, mut rx) = shell();
        shell.handle_key(&Key::Character("ö".into()));
        assert_eq!(rx.try_recv().unwrap(), Command::Guess('Ö'));
    }

    #[test]
    fn sharp_s_is_not_sent_as_a_guess() {
        let (shell, mut rx) = shell();
        shell.handle_key(&Key::Character("ß".into()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn busy_shell_sends_nothing() {
        let (mut shell, mut rx) = shell();
        let mut vm = shell.vm.clone();
        vm.busy = true;
        shell.apply_snapshot(vm);
        shell.trigger(KeyAction::Letter('E'));
        shell.trigger(KeyAction::NewGame);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn guessed_letter_is_not_resent() {
        let (mut shell, mut rx) = shell();
        let mut vm = shell.vm.clone();
        vm.key_states.insert('E', KeyState::Correct);
        shell.apply_snapshot(vm);
        shell.trigger(KeyAction::Letter('E'));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn new_game_key_restarts() {
        let (mut shell, mut rx) = shell();
        let mut vm = shell.vm.clone();
        vm.is_game_over = true;
        shell.apply_snapshot(vm);
        shell.trigger(KeyAction::Letter('A'));
        shell.trigger(KeyAction::NewGame);
        assert_eq!(rx.try_recv().unwrap(), Command::Restart);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn click_maps_window_to_frame() {
        let (mut shell, mut rx) = shell();
        let keyboard = KeyboardPanel::new(true, 350.0, FRAME_WIDTH as f32);
        let key = keyboard.keys()[0];
        let window = PhysicalSize::new(FRAME_WIDTH * 2, FRAME_HEIGHT * 2);
        let pos = PhysicalPosition::new(
            ((key.rect.x + 5.0) * 2.0) as f64,
            ((key.rect.y + 5.0) * 2.0) as f64,
        );
        shell.set_cursor(pos, window);
        shell.handle_click(&keyboard);
        assert_eq!(rx.try_recv().unwrap(), Command::Guess('A'));

        shell.clear_cursor();
        shell.handle_click(&keyboard);
        assert!(rx.try_recv().is_err());
    }
}
