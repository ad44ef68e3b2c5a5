mod epitrochoid;
mod profile;

pub use epitrochoid::Epitrochoid;
pub use profile::{profile_point, CycloidProfile};

use crate::error::Result;
use crate::math::{Point2, Vector2};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns the length of the parameter range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }
}

/// Trait for parametric curves in the plane.
///
/// Implementors are total: `evaluate` is defined for every finite `t`, and
/// periodic curves accept parameters outside their domain.
pub trait Curve2 {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Computes the (unnormalized) first derivative at parameter `t`.
    fn derivative(&self, t: f64) -> Vector2;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` where the derivative vanishes (a cusp).
    fn tangent(&self, t: f64) -> Result<Vector2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
