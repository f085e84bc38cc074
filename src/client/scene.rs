use super::canvas::{PixelCanvas, Rect, Rgba};
use super::gallows::GallowsRenderer;
use super::hud::{StatusDialog, WordDisplay};
use super::keyboard::KeyboardPanel;
use super::view_model::ViewModel;

pub const FRAME_WIDTH: u32 = 900;
pub const FRAME_HEIGHT: u32 = 640;

const BACKGROUND: Rgba = [238, 240, 245, 255];
const PANEL: Rgba = [255, 255, 255, 255];

const GALLOWS_AREA: Rect = Rect::new(20.0, 20.0, 300.0, 300.0);
const WORD_AREA: Rect = Rect::new(340.0, 50.0, 540.0, 100.0);
const STATUS_AREA: Rect = Rect::new(340.0, 170.0, 540.0, 150.0);
const KEYBOARD_TOP: f32 = 350.0;

pub struct Scene {
    canvas: PixelCanvas,
    gallows: GallowsRenderer,
    word: WordDisplay,
    status: StatusDialog,
    keyboard: KeyboardPanel,
}

impl Scene {
    pub fn new(umlauts: bool) -> Self {
        Self {
            canvas: PixelCanvas::new(FRAME_WIDTH, FRAME_HEIGHT),
            gallows: GallowsRenderer::default(),
            word: WordDisplay { area: WORD_AREA },
            status: StatusDialog { area: STATUS_AREA },
            keyboard: KeyboardPanel::new(umlauts, KEYBOARD_TOP, FRAME_WIDTH as f32),
        }
    }

    pub fn keyboard(&self) -> &KeyboardPanel {
        &self.keyboard
    }

    pub fn compose(&mut self, vm: &ViewModel) -> &PixelCanvas {
        self.canvas.fill(BACKGROUND);
        {
            let mut view = self.canvas.viewport(GALLOWS_AREA, PANEL);
            self.gallows.render(&mut view, vm.errors_count);
        }
        self.word.draw(&mut self.canvas, vm);
        self.status.draw(&mut self.canvas, vm);
        self.keyboard.draw(&mut self.canvas, vm);
        &self.canvas
    }
}
