use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::surface::{Stroke, Surface};
use crate::vector::Vec2;

/// A `<canvas>` element and its 2D context.
pub struct Canvas {
    element: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Canvas {
    pub fn new(element: HtmlCanvasElement, context: CanvasRenderingContext2d) -> Self {
        Self { element, context }
    }
}

impl Surface for Canvas {
    fn width(&self) -> f64 {
        self.element.width().into()
    }

    fn height(&self) -> f64 {
        self.element.height().into()
    }

    fn clear(&mut self) {
        self.context
            .clear_rect(0., 0., self.width(), self.height());
    }

    fn stroke_path(&mut self, points: &[Vec2], stroke: &Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        self.context.begin_path();
        self.context.move_to(first.x, first.y);
        for p in rest {
            self.context.line_to(p.x, p.y);
        }
        self.context.set_stroke_style_str(&stroke.color);
        self.context.set_line_width(stroke.width);
        self.context.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: &str) {
        self.context.begin_path();
        if let Err(e) = self
            .context
            .arc(center.x, center.y, radius, 0., std::f64::consts::TAU)
        {
            log::warn!("Could not draw a circle of radius {radius} at {center:?}: {e:?}");
            return;
        }
        self.context.set_fill_style_str(color);
        self.context.fill();
    }
}
