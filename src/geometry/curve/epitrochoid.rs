use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TANGENT_EPSILON};
use crate::params::GearParameters;

use super::{Curve2, CurveDomain};

/// The base epitrochoid of a cycloidal disc, before the pin-radius offset.
///
/// `P(t) = R * (cos t, sin t) - e * (cos(Zp t), sin(Zp t))`
///
/// The tracing point revolves `Zp` times per base revolution, producing
/// `Zp - 1` lobes. The curve winds counter-clockwise and stays free of loops
/// while `e * Zp < R`.
#[derive(Debug, Clone, Copy)]
pub struct Epitrochoid {
    pitch_radius: f64,
    frequency: f64,
    eccentricity: f64,
}

impl Epitrochoid {
    /// Creates the base curve for the given gear parameters.
    #[must_use]
    pub fn new(params: &GearParameters) -> Self {
        Self {
            pitch_radius: params.pitch_radius(),
            frequency: f64::from(params.pin_count()),
            eccentricity: params.eccentricity(),
        }
    }

    /// Returns the pitch-circle radius `R`.
    #[must_use]
    pub fn pitch_radius(&self) -> f64 {
        self.pitch_radius
    }

    /// Returns the eccentricity `e`.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Computes the second derivative at parameter `t`.
    #[must_use]
    pub fn second_derivative(&self, t: f64) -> Vector2 {
        let zt = self.frequency * t;
        let ez2 = self.eccentricity * self.frequency * self.frequency;
        Vector2::new(
            -self.pitch_radius * t.cos() + ez2 * zt.cos(),
            -self.pitch_radius * t.sin() + ez2 * zt.sin(),
        )
    }
}

impl Curve2 for Epitrochoid {
    fn evaluate(&self, t: f64) -> Point2 {
        let zt = self.frequency * t;
        Point2::new(
            self.pitch_radius * t.cos() - self.eccentricity * zt.cos(),
            self.pitch_radius * t.sin() - self.eccentricity * zt.sin(),
        )
    }

    fn derivative(&self, t: f64) -> Vector2 {
        let zt = self.frequency * t;
        let ez = self.eccentricity * self.frequency;
        Vector2::new(
            -self.pitch_radius * t.sin() + ez * zt.sin(),
            self.pitch_radius * t.cos() - ez * zt.cos(),
        )
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        let d = self.derivative(t);
        let len = d.norm();
        if len < TANGENT_EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(d / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
