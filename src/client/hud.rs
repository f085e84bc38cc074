use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};

use super::canvas::{PixelCanvas, Rect, Rgba};
use super::view_model::{GuessStatus, ViewModel};

const WORD_SCALE: u32 = 5;
const INFO_SCALE: u32 = 2;
const MESSAGE_SCALE: u32 = 2;

pub const TEXT_COLOR: Rgba = [34, 34, 34, 255];
const MUTED_COLOR: Rgba = [110, 110, 120, 255];
const CORRECT_COLOR: Rgba = [46, 160, 67, 255];
const WRONG_COLOR: Rgba = [210, 64, 64, 255];
const DIALOG_FILL: Rgba = [250, 250, 252, 255];

fn glyph(c: char) -> Option<[u8; 8]> {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get(c.to_ascii_lowercase()))
}

pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    count * 8 * scale + count.saturating_sub(1) * scale
}

pub fn draw_text(canvas: &mut PixelCanvas, x: f32, y: f32, text: &str, scale: u32, color: Rgba) {
    let clip = Rect::new(0.0, 0.0, canvas.width() as f32, canvas.height() as f32);
    let base_y = y.round() as i32;
    let advance = (8 * scale + scale) as i32;
    for (i, c) in text.chars().enumerate() {
        let Some(bitmap) = glyph(c) else {
            continue;
        };
        let base_x = x.round() as i32 + i as i32 * advance;
        for (row, bits) in bitmap.iter().enumerate() {
            for col in 0..8u32 {
                if ((bits >> col) & 1) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = base_x + (col * scale + sx) as i32;
                        let py = base_y + (row as u32 * scale + sy) as i32;
                        canvas.put(px, py, color, clip);
                    }
                }
            }
        }
    }
}

pub fn draw_text_centered(
    canvas: &mut PixelCanvas,
    area: Rect,
    y: f32,
    text: &str,
    scale: u32,
    color: Rgba,
) {
    let w = text_width(text, scale) as f32;
    let x = area.x + ((area.w - w) * 0.5).max(0.0);
    draw_text(canvas, x, y, text, scale, color);
}

// Greedy wrap on whitespace; overlong words are split hard.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub struct WordDisplay {
    pub area: Rect,
}

impl WordDisplay {
    pub fn draw(&self, canvas: &mut PixelCanvas, vm: &ViewModel) {
        let word = if vm.masked_word.is_empty() {
            "..."
        } else {
            vm.masked_word.as_str()
        };
        draw_text_centered(canvas, self.area, self.area.y, word, WORD_SCALE, TEXT_COLOR);

        let info = if vm.max_attempts > 0 {
            format!("Errors: {} / {}", vm.errors_count, vm.max_attempts)
        } else {
            format!("Errors: {}", vm.errors_count)
        };
        let info_y = self.area.y + (8 * WORD_SCALE) as f32 + 24.0;
        draw_text_centered(canvas, self.area, info_y, &info, INFO_SCALE, MUTED_COLOR);
    }
}

pub struct StatusDialog {
    pub area: Rect,
}

impl StatusDialog {
    pub fn draw(&self, canvas: &mut PixelCanvas, vm: &ViewModel) {
        let accent = status_color(vm.last_status);
        canvas.fill_rect(self.area, DIALOG_FILL);
        canvas.stroke_rect(self.area, 3.0, accent);

        let padding = 16.0;
        let line_h = (8 * MESSAGE_SCALE + 8) as f32;
        let glyph_w = (9 * MESSAGE_SCALE) as f32;
        let max_chars = ((self.area.w - 2.0 * padding) / glyph_w).floor().max(1.0) as usize;
        let max_lines = ((self.area.h - 2.0 * padding) / line_h).floor().max(1.0) as usize;

        let text_color = match vm.last_status {
            GuessStatus::Neutral => TEXT_COLOR,
            _ => accent,
        };
        for (i, line) in wrap_text(&vm.last_message, max_chars)
            .iter()
            .take(max_lines)
            .enumerate()
        {
            let y = self.area.y + padding + i as f32 * line_h;
            draw_text(canvas, self.area.x + padding, y, line, MESSAGE_SCALE, text_color);
        }
    }
}

pub fn status_color(status: GuessStatus) -> Rgba {
    match status {
        GuessStatus::Neutral => MUTED_COLOR,
        GuessStatus::Correct => CORRECT_COLOR,
        GuessStatus::Wrong => WRONG_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("Game over! You lost! The word was CAT.", 12);
        assert_eq!(lines, vec!["Game over!", "You lost!", "The word was", "CAT."]);
    }

    #[test]
    fn splits_overlong_words() {
        assert_eq!(wrap_text("ABCDEFG", 3), vec!["ABC", "DEF", "G"]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn umlauts_have_glyphs() {
        assert!(glyph('Ä').is_some());
        assert!(glyph('Ü').is_some());
        assert!(glyph('_').is_some());
    }

    #[test]
    fn text_is_drawn_inside_canvas() {
        let mut canvas = PixelCanvas::new(40, 10);
        draw_text(&mut canvas, 0.0, 0.0, "T", 1, TEXT_COLOR);
        let inked = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) == Some(TEXT_COLOR))
            .count();
        assert!(inked > 0);
        assert_eq!(text_width("AB", 2), 34);
    }
}
