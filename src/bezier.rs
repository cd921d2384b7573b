//! Cubic Bézier curves: position, derivative, and parameter sampling.

use crate::vector::Vec2;

/// `B(t) = (1-t)³p0 + 3(1-t)²t p1 + 3(1-t)t² p2 + t³p3`.
///
/// Exact at both ends: `t = 0` gives `p0` and `t = 1` gives `p3`.
pub fn bezier_point(t: f64, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1. - t;
    let tt = t * t;
    let uu = u * u;
    let uuu = uu * u;
    let ttt = tt * t;

    Vec2::new(
        uuu * p0.x + 3. * uu * t * p1.x + 3. * u * tt * p2.x + ttt * p3.x,
        uuu * p0.y + 3. * uu * t * p1.y + 3. * u * tt * p2.y + ttt * p3.y,
    )
}

/// `B'(t) = 3(1-t)²(p1-p0) + 6(1-t)t(p2-p1) + 3t²(p3-p2)`.
///
/// Not normalized.
pub fn bezier_tangent(t: f64, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1. - t;

    3. * u * u * (p1 - p0) + 6. * u * t * (p2 - p1) + 3. * t * t * (p3 - p2)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    pub fn point(&self, t: f64) -> Vec2 {
        bezier_point(t, self.p0, self.p1, self.p2, self.p3)
    }

    pub fn tangent(&self, t: f64) -> Vec2 {
        bezier_tangent(t, self.p0, self.p1, self.p2, self.p3)
    }

    /// Control points, start to end.
    pub fn control_points(&self) -> [Vec2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// The curve evaluated at each of `samples`.
    pub fn points(&self, samples: Samples) -> impl Iterator<Item = Vec2> + '_ {
        samples.map(|t| self.point(t))
    }
}

/// The most samples a step size can ask for.
pub const MAX_SAMPLES: usize = 10_001;

/// The smallest step that doesn't hit `MAX_SAMPLES`.
pub const MIN_STEP: f64 = 1. / (MAX_SAMPLES - 1) as f64;

/// How many samples a step size of `step` asks for, counting both endpoints.
///
/// `round(1 / step) + 1`, between two and `MAX_SAMPLES`.
/// A step that isn't a positive number gives two.
pub fn sample_count(step: f64) -> usize {
    if !(step > 0.) {
        return 2;
    }
    let intervals = (1. / step).round().min((MAX_SAMPLES - 1) as f64);
    (intervals as usize).max(1).saturating_add(1)
}

/// Evenly spaced parameters over `[0, 1]`.
///
/// Each parameter is computed from its index, so there is no accumulated drift,
/// and the last one is exactly `1.0`.
/// Clone to restart.
#[derive(Debug, Clone)]
pub struct Samples {
    count: usize,
    next: usize,
}

impl Samples {
    pub fn new(count: usize) -> Self {
        Self { count, next: 0 }
    }

    pub fn with_step(step: f64) -> Self {
        Self::new(sample_count(step))
    }

    fn parameter(&self, i: usize) -> f64 {
        if i + 1 >= self.count {
            if i == 0 {
                0.
            } else {
                1.
            }
        } else {
            i as f64 / (self.count - 1) as f64
        }
    }
}

impl Iterator for Samples {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let t = self.parameter(self.next);
        self.next += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples {}
