use tracing::trace;

use crate::error::Result;
use crate::geometry::{Curve2, CycloidProfile};
use crate::kinematics::Placement;
use crate::params::GearParameters;

use super::{Polyline2, TessellationParams};

/// Samples the disc outline into a closed polygon.
///
/// Without a placement the polygon is in the disc's own frame; with one it is
/// mapped into the world frame through [`Placement::disc_transform`].
#[derive(Debug)]
pub struct TessellateProfile {
    profile: CycloidProfile,
    params: TessellationParams,
    placement: Option<Placement>,
}

impl TessellateProfile {
    /// Creates a new profile tessellation operation.
    #[must_use]
    pub fn new(gear: &GearParameters, params: TessellationParams) -> Self {
        Self {
            profile: CycloidProfile::new(gear),
            params,
            placement: None,
        }
    }

    /// Places the result in the world frame under `placement`.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if the tessellation parameters are invalid.
    pub fn execute(&self) -> Result<Polyline2> {
        self.params.validate()?;

        let n = self.params.profile_samples;
        let domain = self.profile.domain();
        #[allow(clippy::cast_precision_loss)]
        let step = domain.span() / n as f64;

        #[allow(clippy::cast_precision_loss)]
        let local = (0..n).map(|i| self.profile.evaluate(domain.t_min + step * i as f64));
        let points = match &self.placement {
            Some(placement) => {
                let iso = placement.disc_transform();
                local.map(|p| iso * p).collect()
            }
            None => local.collect(),
        };

        trace!(samples = n, placed = self.placement.is_some(), "tessellated disc profile");
        Ok(Polyline2 { points })
    }
}
