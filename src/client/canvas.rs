pub type Rgba = [u8; 4];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, point: [f32; 2]) -> bool {
        point[0] >= self.x
            && point[0] < self.x + self.w
            && point[1] >= self.y
            && point[1] < self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Rgba,
}

pub trait Surface {
    fn size(&self) -> [f32; 2];
    fn clear(&mut self);
    fn line(&mut self, from: [f32; 2], to: [f32; 2], style: StrokeStyle);
    fn circle(&mut self, center: [f32; 2], radius: f32, style: StrokeStyle);
}

pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![0u8; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(out)
    }

    pub fn fill(&mut self, color: Rgba) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let clip = self.bounds();
        self.fill_rect_clipped(rect, color, clip);
    }

    pub fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Rgba) {
        let t = thickness.max(1.0);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y + rect.h - t, rect.w, t), color);
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.h), color);
        self.fill_rect(Rect::new(rect.x + rect.w - t, rect.y, t, rect.h), color);
    }

    pub fn viewport(&mut self, rect: Rect, background: Rgba) -> Viewport<'_> {
        Viewport {
            canvas: self,
            rect,
            background,
        }
    }

    pub(crate) fn put(&mut self, x: i32, y: i32, color: Rgba, clip: Rect) {
        if x < 0 || y < 0 || !clip.contains([x as f32, y as f32]) {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        self.pixels[idx..idx + 4].copy_from_slice(&color);
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    fn fill_rect_clipped(&mut self, rect: Rect, color: Rgba, clip: Rect) {
        let x0 = rect.x.max(clip.x).max(0.0).round() as i32;
        let y0 = rect.y.max(clip.y).max(0.0).round() as i32;
        let x1 = (rect.x + rect.w).min(clip.x + clip.w).round() as i32;
        let y1 = (rect.y + rect.h).min(clip.y + clip.h).round() as i32;
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color, clip);
            }
        }
    }

    fn stamp(&mut self, center: [f32; 2], radius: f32, color: Rgba, clip: Rect) {
        let r = radius.max(0.5);
        let r_sq = r * r;
        let min_x = (center[0] - r).floor() as i32;
        let max_x = (center[0] + r).ceil() as i32;
        let min_y = (center[1] - r).floor() as i32;
        let max_y = (center[1] + r).ceil() as i32;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - center[0];
                let dy = y as f32 + 0.5 - center[1];
                if dx * dx + dy * dy <= r_sq {
                    self.put(x, y, color, clip);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], style: StrokeStyle, clip: Rect) {
        let dx = to[0] - from[0];
        let dy = to[1] - from[1];
        let steps = ((dx * dx + dy * dy).sqrt() * 2.0).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = [from[0] + dx * t, from[1] + dy * t];
            self.stamp(p, style.width * 0.5, style.color, clip);
        }
    }

    fn stroke_circle(&mut self, center: [f32; 2], radius: f32, style: StrokeStyle, clip: Rect) {
        let steps = (radius * std::f32::consts::TAU * 2.0).ceil().max(8.0) as u32;
        for i in 0..steps {
            let a = i as f32 / steps as f32 * std::f32::consts::TAU;
            let p = [center[0] + radius * a.cos(), center[1] + radius * a.sin()];
            self.stamp(p, style.width * 0.5, style.color, clip);
        }
    }
}

impl Surface for PixelCanvas {
    fn size(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }

    fn clear(&mut self) {
        self.fill([0, 0, 0, 0]);
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], style: StrokeStyle) {
        let clip = self.bounds();
        self.stroke_line(from, to, style, clip);
    }

    fn circle(&mut self, center: [f32; 2], radius: f32, style: StrokeStyle) {
        let clip = self.bounds();
        self.stroke_circle(center, radius, style, clip);
    }
}

pub struct Viewport<'a> {
    canvas: &'a mut PixelCanvas,
    rect: Rect,
    background: Rgba,
}

impl Viewport<'_> {
    fn to_canvas(&self, p: [f32; 2]) -> [f32; 2] {
        [p[0] + self.rect.x, p[1] + self.rect.y]
    }
}

impl Surface for Viewport<'_> {
    fn size(&self) -> [f32; 2] {
        [self.rect.w, self.rect.h]
    }

    fn clear(&mut self) {
        let clip = self.rect;
        self.canvas.fill_rect_clipped(self.rect, self.background, clip);
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], style: StrokeStyle) {
        let (from, to) = (self.to_canvas(from), self.to_canvas(to));
        self.canvas.stroke_line(from, to, style, self.rect);
    }

    fn circle(&mut self, center: [f32; 2], radius: f32, style: StrokeStyle) {
        let center = self.to_canvas(center);
        self.canvas.stroke_circle(center, radius, style, self.rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: StrokeStyle = StrokeStyle {
        width: 3.0,
        color: [34, 34, 34, 255],
    };

    #[test]
    fn line_covers_endpoints() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.line([2.0, 10.0], [17.0, 10.0], INK);
        assert_eq!(canvas.pixel(2, 10), Some(INK.color));
        assert_eq!(canvas.pixel(10, 10), Some(INK.color));
        assert_eq!(canvas.pixel(17, 10), Some(INK.color));
        assert_eq!(canvas.pixel(10, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn circle_leaves_center_empty() {
        let mut canvas = PixelCanvas::new(40, 40);
        canvas.circle([20.0, 20.0], 10.0, INK);
        assert_eq!(canvas.pixel(20, 20), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(30, 20), Some(INK.color));
    }

    #[test]
    fn viewport_translates_and_clips() {
        let mut canvas = PixelCanvas::new(40, 40);
        {
            let mut view = canvas.viewport(Rect::new(10.0, 10.0, 10.0, 10.0), [255; 4]);
            view.clear();
            view.line([0.0, 5.0], [30.0, 5.0], INK);
        }
        assert_eq!(canvas.pixel(12, 15), Some(INK.color));
        assert_eq!(canvas.pixel(25, 15), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(11, 11), Some([255; 4]));
        assert_eq!(canvas.pixel(5, 5), Some([0, 0, 0, 0]));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains([0.0, 9.9]));
        assert!(!r.contains([10.0, 5.0]));
    }
}
