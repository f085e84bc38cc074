use super::canvas::{StrokeStyle, Surface};

pub const STROKE_COUNT: usize = 15;

const INK: StrokeStyle = StrokeStyle {
    width: 3.0,
    color: [0x22, 0x22, 0x22, 255],
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Line { from: [f32; 2], to: [f32; 2] },
    Circle { center: [f32; 2], radius: f32 },
}

impl Stroke {
    fn draw(&self, surface: &mut impl Surface) {
        match *self {
            Stroke::Line { from, to } => surface.line(from, to, INK),
            Stroke::Circle { center, radius } => surface.circle(center, radius, INK),
        }
    }
}

const fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Stroke {
    Stroke::Line {
        from: [x1, y1],
        to: [x2, y2],
    }
}

const fn circle(x: f32, y: f32, radius: f32) -> Stroke {
    Stroke::Circle {
        center: [x, y],
        radius,
    }
}

// Drawing order. Base strokes are anchored to the bottom edge.
pub fn strokes(height: f32) -> [Stroke; STROKE_COUNT] {
    let h = height;
    [
        line(50.0, h - 20.0, 150.0, h - 20.0),  // base
        line(100.0, h - 20.0, 100.0, 40.0),     // post
        line(100.0, 40.0, 200.0, 40.0),         // beam
        line(200.0, 40.0, 200.0, 80.0),         // rope
        circle(200.0, 100.0, 20.0),             // head
        line(200.0, 120.0, 200.0, 180.0),       // body
        line(200.0, 140.0, 170.0, 160.0),       // left arm
        line(200.0, 140.0, 230.0, 160.0),       // right arm
        line(200.0, 180.0, 175.0, 220.0),       // left leg
        line(200.0, 180.0, 225.0, 220.0),       // right leg
        line(80.0, h - 20.0, 100.0, h - 35.0),  // base strut
        line(100.0, h - 35.0, 120.0, h - 20.0), // base strut
        line(190.0, 115.0, 210.0, 115.0),       // mouth
        circle(192.0, 95.0, 2.0),               // left eye
        circle(208.0, 95.0, 2.0),               // right eye
    ]
}

pub struct GallowsRenderer {
    max_strokes: usize,
}

impl Default for GallowsRenderer {
    fn default() -> Self {
        Self::new(STROKE_COUNT)
    }
}

impl GallowsRenderer {
    pub fn new(max_strokes: usize) -> Self {
        Self {
            max_strokes: max_strokes.min(STROKE_COUNT),
        }
    }

    pub fn visible_strokes(&self, errors_count: u32) -> usize {
        (errors_count as usize).min(self.max_strokes)
    }

    /// Clears the surface and replays the first `errors_count` strokes.
    /// Always a full redraw, so a lower count after a new game erases the figure.
    pub fn render(&self, surface: &mut impl Surface, errors_count: u32) {
        surface.clear();
        let count = self.visible_strokes(errors_count);
        if count == 0 {
            return;
        }
        let [_, height] = surface.size();
        for stroke in strokes(height).iter().take(count) {
            stroke.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Line([f32; 2], [f32; 2]),
        Circle([f32; 2], f32),
    }

    struct Recorder {
        ops: Vec<Op>,
    }

    impl Recorder {
        fn new() -> Self {
            Self { ops: Vec::new() }
        }

        fn drawn(&self) -> Vec<Op> {
            let last_clear = self.ops.iter().rposition(|op| *op == Op::Clear);
            match last_clear {
                Some(i) => self.ops[i + 1..].to_vec(),
                None => self.ops.clone(),
            }
        }
    }

    impl Surface for Recorder {
        fn size(&self) -> [f32; 2] {
            [300.0, 300.0]
        }

        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }

        fn line(&mut self, from: [f32; 2], to: [f32; 2], _style: StrokeStyle) {
            self.ops.push(Op::Line(from, to));
        }

        fn circle(&mut self, center: [f32; 2], radius: f32, _style: StrokeStyle) {
            self.ops.push(Op::Circle(center, radius));
        }
    }

    fn expected(count: usize) -> Vec<Op> {
        strokes(300.0)
            .iter()
            .take(count)
            .map(|s| match *s {
                Stroke::Line { from, to } => Op::Line(from, to),
                Stroke::Circle { center, radius } => Op::Circle(center, radius),
            })
            .collect()
    }

    #[test]
    fn draws_prefix_of_stroke_list() {
        let renderer = GallowsRenderer::default();
        for errors in 0..=STROKE_COUNT as u32 {
            let mut surface = Recorder::new();
            renderer.render(&mut surface, errors);
            assert_eq!(surface.ops.first(), Some(&Op::Clear));
            assert_eq!(surface.drawn(), expected(errors as usize));
        }
    }

    #[test]
    fn clamps_to_capacity() {
        let mut surface = Recorder::new();
        GallowsRenderer::default().render(&mut surface, 40);
        assert_eq!(surface.drawn().len(), STROKE_COUNT);

        let mut surface = Recorder::new();
        GallowsRenderer::new(6).render(&mut surface, 10);
        assert_eq!(surface.drawn(), expected(6));
    }

    #[test]
    fn lower_count_redraws_from_scratch() {
        let renderer = GallowsRenderer::default();
        let mut surface = Recorder::new();
        renderer.render(&mut surface, 9);
        renderer.render(&mut surface, 0);
        assert_eq!(surface.ops.last(), Some(&Op::Clear));
        assert!(surface.drawn().is_empty());
    }

    #[test]
    fn base_follows_surface_height() {
        let list = strokes(250.0);
        assert_eq!(
            list[0],
            Stroke::Line {
                from: [50.0, 230.0],
                to: [150.0, 230.0]
            }
        );
        assert_eq!(
            list[4],
            Stroke::Circle {
                center: [200.0, 100.0],
                radius: 20.0
            }
        );
    }
}
