use crate::bezier::{CubicBezier, Samples};
use crate::config::SceneConfig;
use crate::spring::{update_spring, DynamicPoint};
use crate::surface::Surface;
use crate::vector::Vec2;

/// The curve and its moving parts.
///
/// P0 and P3 are anchors placed from the surface size when the scene is built.
/// P1 and P2 hang on springs whose targets sit either side of the pointer.
pub struct Scene {
    config: SceneConfig,
    size: (f64, f64),
    p0: Vec2,
    p1: DynamicPoint,
    p2: DynamicPoint,
    p3: Vec2,
    curve_samples: Samples,
    tangent_samples: Samples,
    // Reused between frames.
    path: Vec<Vec2>,
}

impl Scene {
    pub fn new(width: f64, height: f64, config: SceneConfig) -> Self {
        if !config.spring.is_stable() {
            log::warn!(
                "Spring constants {:?} will not settle; the control points may oscillate forever.",
                config.spring
            );
        }

        let size = clamp_size(width, height, config.min_dimension);
        let (p0, p3) = anchors(size, config.anchor_inset);
        let p1 = DynamicPoint::at(Vec2::new(2. * config.anchor_inset, size.1 / 2.));
        let p2 = DynamicPoint::at(Vec2::new(size.0 - 2. * config.anchor_inset, size.1 / 2.));

        log::debug!("New scene on a {}x{} surface: P0 = {p0:?}, P3 = {p3:?}.", size.0, size.1);

        Self {
            curve_samples: Samples::with_step(config.curve_step),
            tangent_samples: Samples::with_step(config.tangent_step),
            path: Vec::new(),
            config,
            size,
            p0,
            p1,
            p2,
            p3,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The surface size the scene last saw, after clamping.
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    /// Where the pointer should start before any input arrives: the middle of the surface.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.size.0 / 2., self.size.1 / 2.)
    }

    pub fn curve(&self) -> CubicBezier {
        CubicBezier::new(self.p0, self.p1.position(), self.p2.position(), self.p3)
    }

    pub fn p1(&self) -> &DynamicPoint {
        &self.p1
    }

    pub fn p2(&self) -> &DynamicPoint {
        &self.p2
    }

    /// Record a new surface size.
    ///
    /// The anchors only move if `reanchor_on_resize` is set.
    pub fn resize(&mut self, width: f64, height: f64) {
        let size = clamp_size(width, height, self.config.min_dimension);
        if size == self.size {
            return;
        }
        self.size = size;

        if self.config.reanchor_on_resize {
            (self.p0, self.p3) = anchors(size, self.config.anchor_inset);
            log::info!(
                "Surface resized to {}x{}; anchors moved to {:?} and {:?}.",
                size.0,
                size.1,
                self.p0,
                self.p3
            );
        } else {
            log::debug!("Surface resized to {}x{}; anchors kept.", size.0, size.1);
        }
    }

    /// Step both springs once toward targets either side of `pointer`.
    pub fn advance(&mut self, pointer: Vec2) {
        let offset = Vec2::new(self.config.pointer_offset, 0.);
        update_spring(&mut self.p1, pointer - offset, &self.config.spring);
        update_spring(&mut self.p2, pointer + offset, &self.config.spring);
    }

    /// Draw the curve, its tangent markers, and the control points.
    pub fn draw(&mut self, surface: &mut impl Surface) {
        let curve = self.curve();

        self.path.clear();
        self.path.extend(curve.points(self.curve_samples.clone()));
        surface.stroke_path(&self.path, &self.config.curve_stroke);

        for t in self.tangent_samples.clone() {
            let p = curve.point(t);
            let direction = curve.tangent(t).normalize();
            surface.stroke_path(
                &[p, p + direction * self.config.tangent_length],
                &self.config.tangent_stroke,
            );
        }

        for (p, color) in curve
            .control_points()
            .into_iter()
            .zip(&self.config.marker_colors)
        {
            surface.fill_circle(p, self.config.marker_radius, color);
        }
    }

    /// One whole frame.
    pub fn frame(&mut self, pointer: Vec2, surface: &mut impl Surface) {
        self.resize(surface.width(), surface.height());
        surface.clear();
        self.advance(pointer);
        self.draw(surface);
    }
}

fn clamp_size(width: f64, height: f64, min: f64) -> (f64, f64) {
    // Written this way round so that NaN also becomes `min`.
    let clamp = |v: f64| if v >= min { v } else { min };
    (clamp(width), clamp(height))
}

fn anchors((width, height): (f64, f64), inset: f64) -> (Vec2, Vec2) {
    (
        Vec2::new(inset, height / 2.),
        Vec2::new(width - inset, height / 2.),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, Recording, Stroke};
    use approx::assert_relative_eq;

    fn scene() -> Scene {
        Scene::new(800., 600., SceneConfig::default())
    }

    #[test]
    fn initial_layout() {
        let scene = scene();
        assert_eq!(
            scene.curve().control_points(),
            [
                Vec2::new(150., 300.),
                Vec2::new(300., 300.),
                Vec2::new(500., 300.),
                Vec2::new(650., 300.),
            ]
        );
        assert_eq!(scene.p1().velocity(), Vec2::ZERO);
        assert_eq!(scene.p2().velocity(), Vec2::ZERO);
        assert_eq!(scene.center(), Vec2::new(400., 300.));
    }

    #[test]
    fn first_step_toward_pointer() {
        let mut scene = scene();
        scene.advance(Vec2::new(500., 300.));

        // P1 chases (400, 300), P2 chases (600, 300).
        assert_relative_eq!(scene.p1().x, 301.7, epsilon = 1e-12);
        assert_relative_eq!(scene.p1().vx, 1.7, epsilon = 1e-12);
        assert_eq!(scene.p1().y, 300.);
        assert_relative_eq!(scene.p2().x, 501.7, epsilon = 1e-12);
        assert_eq!(scene.p2().y, 300.);
    }

    #[test]
    fn frame_draws_in_order() {
        let mut scene = scene();
        let mut surface = Recording::new(800., 600.);
        scene.frame(Vec2::new(400., 300.), &mut surface);

        let commands = surface.commands();
        // clear, curve, 11 tangents, 4 markers
        assert_eq!(commands.len(), 1 + 1 + 11 + 4);
        assert_eq!(
            commands[0],
            DrawCommand::Clear {
                width: 800.,
                height: 600.
            }
        );

        let curve = scene.curve();
        match &commands[1] {
            DrawCommand::StrokePath { points, stroke } => {
                assert_eq!(points.len(), 101);
                assert_eq!(points[0], curve.p0);
                assert_eq!(points[100], curve.p3);
                assert_eq!(*stroke, Stroke::new("#d426c6", 3.));
            }
            other => panic!("Expected the curve, got {other:?}"),
        }

        for cmd in &commands[2..13] {
            match cmd {
                DrawCommand::StrokePath { points, stroke } => {
                    assert_eq!(points.len(), 2);
                    assert_relative_eq!((points[1] - points[0]).length(), 30., epsilon = 1e-9);
                    assert_eq!(*stroke, Stroke::new("#c9193f", 2.));
                }
                other => panic!("Expected a tangent marker, got {other:?}"),
            }
        }

        let markers: Vec<_> = commands[13..]
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::FillCircle {
                    center,
                    radius,
                    color,
                } => (*center, *radius, color.as_str()),
                other => panic!("Expected a control point marker, got {other:?}"),
            })
            .collect();
        assert_eq!(
            markers,
            [
                (curve.p0, 6., "#f91616"),
                (curve.p1, 6., "#1da853"),
                (curve.p2, 6., "#198d3c"),
                (curve.p3, 6., "#f9163c"),
            ]
        );
    }

    #[test]
    fn first_tangent_marker_follows_first_control_leg() {
        let mut scene = scene();
        let mut surface = Recording::new(800., 600.);
        scene.frame(Vec2::new(400., 100.), &mut surface);

        let curve = scene.curve();
        let expected = (curve.p1 - curve.p0).normalize();
        match &surface.commands()[2] {
            DrawCommand::StrokePath { points, .. } => {
                assert_eq!(points[0], curve.p0);
                let direction = (points[1] - points[0]) * (1. / 30.);
                assert_relative_eq!(direction.x, expected.x, epsilon = 1e-9);
                assert_relative_eq!(direction.y, expected.y, epsilon = 1e-9);
            }
            other => panic!("Expected a tangent marker, got {other:?}"),
        }
    }

    #[test]
    fn anchors_stay_put_on_resize_by_default() {
        let mut scene = scene();
        let mut surface = Recording::new(1200., 900.);
        scene.frame(Vec2::new(600., 450.), &mut surface);

        assert_eq!(scene.size(), (1200., 900.));
        assert_eq!(scene.curve().p0, Vec2::new(150., 300.));
        assert_eq!(scene.curve().p3, Vec2::new(650., 300.));
        assert_eq!(
            surface.commands()[0],
            DrawCommand::Clear {
                width: 1200.,
                height: 900.
            }
        );
    }

    #[test]
    fn anchors_follow_resize_when_asked() {
        let config = SceneConfig {
            reanchor_on_resize: true,
            ..SceneConfig::default()
        };
        let mut scene = Scene::new(800., 600., config);
        scene.resize(1200., 900.);

        assert_eq!(scene.curve().p0, Vec2::new(150., 450.));
        assert_eq!(scene.curve().p3, Vec2::new(1050., 450.));
        // The interior points are left to their springs.
        assert_eq!(scene.curve().p1, Vec2::new(300., 300.));
    }

    #[test]
    fn degenerate_surfaces_are_clamped() {
        let scene = Scene::new(0., -50., SceneConfig::default());
        assert_eq!(scene.size(), (1., 1.));

        let scene = Scene::new(f64::NAN, 10., SceneConfig::default());
        assert_eq!(scene.size(), (1., 10.));

        let mut scene = scene;
        let mut surface = Recording::new(0., 0.);
        scene.frame(scene.center(), &mut surface);
        assert_eq!(surface.commands().len(), 17);
    }

    #[test]
    fn tiny_curve_step_is_capped() {
        let config = SceneConfig {
            curve_step: 1e-30,
            ..SceneConfig::default()
        };
        let mut scene = Scene::new(800., 600., config);
        let mut surface = Recording::new(800., 600.);
        scene.frame(scene.center(), &mut surface);

        assert_eq!(surface.commands().len(), 17);
        match &surface.commands()[1] {
            DrawCommand::StrokePath { points, .. } => {
                assert_eq!(points.len(), crate::bezier::MAX_SAMPLES);
                assert_eq!(points.last(), Some(&scene.curve().p3));
            }
            other => panic!("Expected the curve, got {other:?}"),
        }
    }

    #[test]
    fn settles_under_a_still_pointer() {
        let mut scene = scene();
        let pointer = Vec2::new(420., 180.);
        for _ in 0..500 {
            scene.advance(pointer);
        }
        assert_relative_eq!(scene.p1().x, 320., epsilon = 1e-6);
        assert_relative_eq!(scene.p1().y, 180., epsilon = 1e-6);
        assert_relative_eq!(scene.p2().x, 520., epsilon = 1e-6);
        assert_relative_eq!(scene.p2().y, 180., epsilon = 1e-6);
    }
}
