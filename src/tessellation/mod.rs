mod tessellate_pins;
mod tessellate_profile;

pub use tessellate_pins::{pin_centers, TessellatePinRing};
pub use tessellate_profile::TessellateProfile;

use crate::error::{Result, TessellationError};
use crate::math::{Isometry2, Point2};

/// Parameters controlling tessellation density.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Number of evenly spaced samples taken along the disc profile.
    pub profile_samples: usize,
    /// Maximum chord deviation allowed when approximating a pin circle.
    pub pin_tolerance: f64,
    /// Minimum number of segments per pin circle.
    pub min_segments: usize,
    /// Maximum number of segments per pin circle.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            profile_samples: 3600,
            pin_tolerance: 0.01,
            min_segments: 8,
            max_segments: 256,
        }
    }
}

impl TessellationParams {
    /// Checks that the parameters describe a usable tessellation.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` if fewer than 3 profile
    /// samples are requested, the tolerance is not positive, or the segment
    /// bounds are empty or below 3.
    pub fn validate(&self) -> Result<()> {
        if self.profile_samples < 3 {
            return Err(TessellationError::InvalidParameters(format!(
                "profile_samples must be at least 3, got {}",
                self.profile_samples
            ))
            .into());
        }
        if self.pin_tolerance.is_nan() || self.pin_tolerance <= 0.0 {
            return Err(TessellationError::InvalidParameters(
                "pin_tolerance must be positive".to_owned(),
            )
            .into());
        }
        if self.min_segments < 3 || self.min_segments > self.max_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "segment bounds [{}, {}] are invalid",
                self.min_segments, self.max_segments
            ))
            .into());
        }
        Ok(())
    }
}

/// A closed polygon approximating a curve in the plane.
///
/// The last point connects back to the first; it is not repeated.
#[derive(Debug, Clone, Default)]
pub struct Polyline2 {
    /// The ordered vertices of the polygon.
    pub points: Vec<Point2>,
}

impl Polyline2 {
    /// Returns a copy with every vertex mapped through `transform`.
    #[must_use]
    pub fn transformed(&self, transform: &Isometry2) -> Self {
        Self {
            points: self.points.iter().map(|p| transform * p).collect(),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
