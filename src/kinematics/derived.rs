use crate::params::GearParameters;

use super::KinematicMode;

/// Pin radius beyond this multiple of the pin pitch `R / Zp` undercuts the
/// profile.
pub const PIN_PITCH_LIMIT: f64 = 1.1;

/// Eccentricity factor beyond which the epitrochoid approaches a loop.
pub const ECCENTRICITY_LIMIT: f64 = 0.98;

/// Sense of the output rotation relative to the input shaft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    /// Output turns the same way as the input shaft.
    Same,
    /// Output turns against the input shaft.
    Opposite,
}

impl RotationDirection {
    /// Returns `1.0` for [`Same`](Self::Same), `-1.0` for
    /// [`Opposite`](Self::Opposite).
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Same => 1.0,
            Self::Opposite => -1.0,
        }
    }

    /// Returns a short human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Same => "same direction",
            Self::Opposite => "opposite direction",
        }
    }
}

/// Scalar outputs that depend on the gear parameters and mode but not on the
/// input angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    /// Denominator `n` of the reduction `1 : n`.
    pub reduction_ratio: u32,
    /// Output direction relative to the input.
    pub rotation_direction: RotationDirection,
    /// Dimensionless `e * Zp / R`.
    pub eccentricity_factor: f64,
    /// Set when the parameters produce a self-intersecting or cusped profile.
    pub undercut_warning: bool,
}

impl DerivedQuantities {
    /// Output angle for a given input angle, `± input / reduction_ratio`.
    #[must_use]
    pub fn output_angle(&self, input_angle: f64) -> f64 {
        self.rotation_direction.sign() * input_angle / f64::from(self.reduction_ratio)
    }
}

/// Computes the derived quantities for `params` under `mode`.
#[must_use]
pub fn derived_quantities(params: &GearParameters, mode: KinematicMode) -> DerivedQuantities {
    let (reduction_ratio, rotation_direction) = match mode {
        KinematicMode::FixedPins => (params.lobe_count(), RotationDirection::Opposite),
        KinematicMode::FixedCycloid => (params.pin_count(), RotationDirection::Same),
    };

    let eccentricity_factor =
        params.eccentricity() * f64::from(params.pin_count()) / params.pitch_radius();
    let pin_too_large = params.pin_radius() > PIN_PITCH_LIMIT * params.pin_pitch();

    DerivedQuantities {
        reduction_ratio,
        rotation_direction,
        eccentricity_factor,
        undercut_warning: pin_too_large || eccentricity_factor > ECCENTRICITY_LIMIT,
    }
}
