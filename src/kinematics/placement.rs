use crate::math::{Isometry2, Point2, Vector2};
use crate::params::GearParameters;

use super::KinematicMode;

/// Where the disc and the pin assembly sit for one input angle.
///
/// Recomputed every tick; carries no identity beyond that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Rotation of the pin assembly about the world origin (radians).
    pub pin_group_angle: f64,
    /// Position of the disc's own rotation axis in the world frame.
    pub disc_center: Point2,
    /// Spin of the disc about its own axis (radians).
    pub disc_rotation: f64,
}

impl Placement {
    /// Transform taking disc-local profile points into the world frame.
    #[must_use]
    pub fn disc_transform(&self) -> Isometry2 {
        Isometry2::new(self.disc_center.coords, self.disc_rotation)
    }

    /// Transform taking pin-assembly-local points into the world frame.
    #[must_use]
    pub fn pin_transform(&self) -> Isometry2 {
        Isometry2::new(Vector2::zeros(), self.pin_group_angle)
    }

    /// Returns the angle of the body the output is taken from.
    ///
    /// The disc spin for [`KinematicMode::FixedPins`], the pin housing
    /// rotation for [`KinematicMode::FixedCycloid`].
    #[must_use]
    pub fn output_angle(&self, mode: KinematicMode) -> f64 {
        match mode {
            KinematicMode::FixedPins => self.disc_rotation,
            KinematicMode::FixedCycloid => self.pin_group_angle,
        }
    }
}

impl KinematicMode {
    /// Computes the placement of both bodies for `input_angle`.
    #[must_use]
    pub fn placement(self, input_angle: f64, params: &GearParameters) -> Placement {
        let e = params.eccentricity();
        let disc_center = Point2::new(e * input_angle.cos(), e * input_angle.sin());

        match self {
            Self::FixedPins => Placement {
                pin_group_angle: 0.0,
                disc_center,
                disc_rotation: -input_angle / f64::from(params.lobe_count()),
            },
            Self::FixedCycloid => Placement {
                pin_group_angle: input_angle / f64::from(params.pin_count()),
                disc_center,
                disc_rotation: 0.0,
            },
        }
    }
}

/// Computes the placement of disc and pins for `input_angle` under `mode`.
///
/// Pure and stateless; the caller owns the input angle.
#[must_use]
pub fn placement(input_angle: f64, params: &GearParameters, mode: KinematicMode) -> Placement {
    mode.placement(input_angle, params)
}
