use crate::error::Result;
use crate::math::polygon_2d::left_normal;
use crate::math::{Point2, Vector2, TANGENT_EPSILON};
use crate::params::GearParameters;

use super::{Curve2, CurveDomain, Epitrochoid};

/// Outline of a cycloidal disc: the base [`Epitrochoid`] offset inward by the
/// pin radius.
///
/// Each ring pin of radius `rp` pushes the disc surface away from the pin
/// centre path by `rp`, so the boundary is the equidistant curve
///
/// `Q(t) = P(t) + rp * n(t)`
///
/// where `n(t)` is the unit tangent rotated by +90°. The base curve winds
/// counter-clockwise, so `n` points into the disc.
///
/// At a cusp of the base curve (zero-length derivative) the normal is
/// undefined and `evaluate` returns the unoffset base point. The result is
/// continuous everywhere else.
#[derive(Debug, Clone, Copy)]
pub struct CycloidProfile {
    base: Epitrochoid,
    pin_radius: f64,
}

impl CycloidProfile {
    /// Creates the disc outline for the given gear parameters.
    #[must_use]
    pub fn new(params: &GearParameters) -> Self {
        Self {
            base: Epitrochoid::new(params),
            pin_radius: params.pin_radius(),
        }
    }

    /// Returns the underlying (unoffset) epitrochoid.
    #[must_use]
    pub fn base(&self) -> &Epitrochoid {
        &self.base
    }

    /// Returns the offset distance (the pin radius).
    #[must_use]
    pub fn pin_radius(&self) -> f64 {
        self.pin_radius
    }

    /// Returns the unit inward normal of the base curve at `t`, or `None` at a
    /// cusp.
    #[must_use]
    pub fn inward_normal(&self, t: f64) -> Option<Vector2> {
        let d = self.base.derivative(t);
        let len = d.norm();
        if len < TANGENT_EPSILON {
            return None;
        }
        Some(left_normal(d / len))
    }
}

impl Curve2 for CycloidProfile {
    fn evaluate(&self, t: f64) -> Point2 {
        let p = self.base.evaluate(t);
        match self.inward_normal(t) {
            Some(n) => p + n * self.pin_radius,
            None => p,
        }
    }

    fn derivative(&self, t: f64) -> Vector2 {
        // Offset curves of a plane curve share the base tangent direction; the
        // speed scales by (1 - rp * curvature) with curvature signed so that
        // the inward offset of a convex arc slows down.
        let d = self.base.derivative(t);
        let speed = d.norm();
        if speed < TANGENT_EPSILON {
            return d;
        }
        let dd = self.base.second_derivative(t);
        let curvature = (d.x * dd.y - d.y * dd.x) / (speed * speed * speed);
        d * (1.0 - self.pin_radius * curvature)
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        self.base.tangent(t)
    }

    fn domain(&self) -> CurveDomain {
        self.base.domain()
    }

    fn is_closed(&self) -> bool {
        true
    }
}

/// Evaluates the disc outline at profile parameter `theta`.
///
/// Free-function form of [`CycloidProfile::evaluate`]: pure, defined for every
/// real `theta`, periodic with period `2π`.
#[must_use]
pub fn profile_point(theta: f64, params: &GearParameters) -> Point2 {
    CycloidProfile::new(params).evaluate(theta)
}
