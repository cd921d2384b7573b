use serde::{Deserialize, Serialize};

use crate::vector::Vec2;

/// Constants shared by every spring in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringConfig {
    pub const REFERENCE: Self = Self {
        stiffness: 0.02,
        damping: 0.85,
    };

    /// Whether oscillations decay rather than grow.
    /// An unstable config is still usable; the point just won't settle.
    pub fn is_stable(&self) -> bool {
        self.stiffness > 0. && self.damping > 0. && self.damping < 1.
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// A control point that has a velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DynamicPoint {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl DynamicPoint {
    /// A point at rest.
    pub fn at(position: Vec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            vx: 0.,
            vy: 0.,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.vx, self.vy)
    }
}

/// Advance `point` by one frame, pulling it toward `target`.
///
/// Unit mass, one tick per call. The acceleration is added to the velocity
/// *before* damping, so damping scales both together.
pub fn update_spring(point: &mut DynamicPoint, target: Vec2, config: &SpringConfig) {
    let ax = -config.stiffness * (point.x - target.x);
    let ay = -config.stiffness * (point.y - target.y);

    point.vx = (point.vx + ax) * config.damping;
    point.vy = (point.vy + ay) * config.damping;

    point.x += point.vx;
    point.y += point.vy;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_step_matches_hand_computation() {
        let mut p1 = DynamicPoint::at(Vec2::new(300., 300.));
        update_spring(&mut p1, Vec2::new(400., 300.), &SpringConfig::REFERENCE);

        assert_relative_eq!(p1.vx, 1.7, epsilon = 1e-12);
        assert_relative_eq!(p1.x, 301.7, epsilon = 1e-12);
        assert_eq!(p1.vy, 0.);
        assert_eq!(p1.y, 300.);
    }

    #[test]
    fn damping_applies_to_velocity_and_acceleration_together() {
        let mut p = DynamicPoint {
            x: 0.,
            y: 0.,
            vx: 10.,
            vy: -4.,
        };
        let config = SpringConfig {
            stiffness: 0.5,
            damping: 0.5,
        };
        update_spring(&mut p, Vec2::new(2., 2.), &config);

        // (10 + 1) * 0.5 and (-4 + 1) * 0.5
        assert_eq!(p.velocity(), Vec2::new(5.5, -1.5));
        assert_eq!(p.position(), Vec2::new(5.5, -1.5));
    }

    #[test]
    fn deterministic() {
        let start = DynamicPoint {
            x: 12.5,
            y: -3.,
            vx: 0.25,
            vy: 7.,
        };
        let target = Vec2::new(-40., 90.);

        let mut a = start;
        let mut b = start;
        for _ in 0..100 {
            update_spring(&mut a, target, &SpringConfig::REFERENCE);
            update_spring(&mut b, target, &SpringConfig::REFERENCE);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn converges_to_target() {
        let target = Vec2::new(400., 300.);
        let mut p = DynamicPoint::at(Vec2::new(300., 100.));
        let initial = (p.position() - target).length();

        // Peak distance over consecutive windows must shrink.
        // Six windows keep the peaks well above f64 resolution at this scale.
        let mut previous_peak = f64::INFINITY;
        for _ in 0..6 {
            let mut peak: f64 = 0.;
            for _ in 0..50 {
                update_spring(&mut p, target, &SpringConfig::REFERENCE);
                let distance = (p.position() - target).length();
                assert!(distance.is_finite());
                assert!(distance <= initial);
                peak = peak.max(distance);
            }
            assert!(peak < previous_peak);
            previous_peak = peak;
        }
        for _ in 0..200 {
            update_spring(&mut p, target, &SpringConfig::REFERENCE);
        }

        assert!((p.position() - target).length() < 1e-3);
        assert!(p.velocity().length() < 1e-3);
    }

    #[test]
    fn resting_at_target_stays_put() {
        let target = Vec2::new(5., 5.);
        let mut p = DynamicPoint::at(target);
        update_spring(&mut p, target, &SpringConfig::REFERENCE);
        assert_eq!(p, DynamicPoint::at(target));
    }

    #[test]
    fn stability() {
        assert!(SpringConfig::REFERENCE.is_stable());
        assert!(!SpringConfig {
            stiffness: 0.02,
            damping: 1.,
        }
        .is_stable());
        assert!(!SpringConfig {
            stiffness: 0.,
            damping: 0.5,
        }
        .is_stable());
    }
}
