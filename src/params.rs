use tracing::debug;

use crate::error::{ConfigError, Result};

/// Geometric parameters of a cycloidal pin-gear reducer.
///
/// Construction through [`GearParameters::new`] is the only way to obtain a
/// value, so every instance satisfies:
///
/// - `pitch_radius > 0`
/// - `pin_count >= 2` (the disc has `pin_count - 1 >= 1` lobes)
/// - `pin_radius >= 0`, `eccentricity >= 0`
/// - all values finite
///
/// Lengths are in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearParameters {
    pitch_radius: f64,
    pin_count: u32,
    pin_radius: f64,
    eccentricity: f64,
}

impl GearParameters {
    /// Validates and creates a new parameter set.
    ///
    /// # Arguments
    ///
    /// * `pitch_radius` - Pitch-circle radius of the pin ring `R`
    /// * `pin_count` - Number of ring pins `Zp`
    /// * `pin_radius` - Radius of each pin `rp`
    /// * `eccentricity` - Offset of the input shaft `e`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any value is out of range or non-finite.
    /// Values are never clamped.
    pub fn new(
        pitch_radius: f64,
        pin_count: u32,
        pin_radius: f64,
        eccentricity: f64,
    ) -> Result<Self> {
        validate(pitch_radius, pin_count, pin_radius, eccentricity)
            .inspect_err(|err| debug!(%err, "rejected gear parameters"))?;
        Ok(Self {
            pitch_radius,
            pin_count,
            pin_radius,
            eccentricity,
        })
    }

    /// Returns the pitch-circle radius `R`.
    #[must_use]
    pub fn pitch_radius(&self) -> f64 {
        self.pitch_radius
    }

    /// Returns the number of ring pins `Zp`.
    #[must_use]
    pub fn pin_count(&self) -> u32 {
        self.pin_count
    }

    /// Returns the pin radius `rp`.
    #[must_use]
    pub fn pin_radius(&self) -> f64 {
        self.pin_radius
    }

    /// Returns the eccentricity `e`.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Returns the disc lobe count `Zc = Zp - 1`.
    #[must_use]
    pub fn lobe_count(&self) -> u32 {
        self.pin_count - 1
    }

    /// Returns the arc spacing between adjacent pins, `R / Zp`.
    #[must_use]
    pub fn pin_pitch(&self) -> f64 {
        self.pitch_radius / f64::from(self.pin_count)
    }

    /// Returns a copy with a different eccentricity, revalidated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the new eccentricity is negative or non-finite.
    pub fn with_eccentricity(&self, eccentricity: f64) -> Result<Self> {
        Self::new(
            self.pitch_radius,
            self.pin_count,
            self.pin_radius,
            eccentricity,
        )
    }

    /// Returns a copy with a different pin radius, revalidated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the new radius is negative or non-finite.
    pub fn with_pin_radius(&self, pin_radius: f64) -> Result<Self> {
        Self::new(
            self.pitch_radius,
            self.pin_count,
            pin_radius,
            self.eccentricity,
        )
    }
}

impl Default for GearParameters {
    /// `R = 80, Zp = 12, rp = 5, e = 4`.
    fn default() -> Self {
        Self {
            pitch_radius: 80.0,
            pin_count: 12,
            pin_radius: 5.0,
            eccentricity: 4.0,
        }
    }
}

fn validate(
    pitch_radius: f64,
    pin_count: u32,
    pin_radius: f64,
    eccentricity: f64,
) -> std::result::Result<(), ConfigError> {
    if !pitch_radius.is_finite() {
        return Err(ConfigError::NonFinite {
            parameter: "pitch_radius",
        });
    }
    if pitch_radius <= 0.0 {
        return Err(ConfigError::NonPositiveRadius(pitch_radius));
    }
    if pin_count < 2 {
        return Err(ConfigError::InvalidPinCount(pin_count));
    }
    for (parameter, value) in [("pin_radius", pin_radius), ("eccentricity", eccentricity)] {
        if !value.is_finite() {
            return Err(ConfigError::NonFinite { parameter });
        }
        if value < 0.0 {
            return Err(ConfigError::NegativeValue { parameter, value });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::CycloidError;

    fn config_error(result: Result<GearParameters>) -> ConfigError {
        match result {
            Err(CycloidError::Config(err)) => err,
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_reference_parameters() {
        let p = GearParameters::new(80.0, 12, 5.0, 4.0).unwrap();
        assert_eq!(p, GearParameters::default());
        assert_eq!(p.lobe_count(), 11);
        assert_relative_eq!(p.pin_pitch(), 80.0 / 12.0);
    }

    #[test]
    fn accepts_minimum_pin_count() {
        let p = GearParameters::new(10.0, 2, 0.0, 0.0).unwrap();
        assert_eq!(p.lobe_count(), 1);
    }

    #[test]
    fn rejects_single_pin() {
        let err = config_error(GearParameters::new(80.0, 1, 5.0, 4.0));
        assert_eq!(err, ConfigError::InvalidPinCount(1));
    }

    #[test]
    fn rejects_zero_pins() {
        let err = config_error(GearParameters::new(80.0, 0, 5.0, 4.0));
        assert_eq!(err, ConfigError::InvalidPinCount(0));
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert_eq!(
            config_error(GearParameters::new(0.0, 12, 5.0, 4.0)),
            ConfigError::NonPositiveRadius(0.0)
        );
        assert_eq!(
            config_error(GearParameters::new(-3.0, 12, 5.0, 4.0)),
            ConfigError::NonPositiveRadius(-3.0)
        );
    }

    #[test]
    fn rejects_negative_pin_radius() {
        let err = config_error(GearParameters::new(80.0, 12, -1.0, 4.0));
        assert_eq!(
            err,
            ConfigError::NegativeValue {
                parameter: "pin_radius",
                value: -1.0
            }
        );
    }

    #[test]
    fn rejects_negative_eccentricity() {
        let err = config_error(GearParameters::new(80.0, 12, 5.0, -0.5));
        assert_eq!(
            err,
            ConfigError::NegativeValue {
                parameter: "eccentricity",
                value: -0.5
            }
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(
            config_error(GearParameters::new(f64::NAN, 12, 5.0, 4.0)),
            ConfigError::NonFinite {
                parameter: "pitch_radius"
            }
        );
        assert_eq!(
            config_error(GearParameters::new(80.0, 12, f64::INFINITY, 4.0)),
            ConfigError::NonFinite {
                parameter: "pin_radius"
            }
        );
    }

    #[test]
    fn with_eccentricity_revalidates() {
        let p = GearParameters::default();
        let q = p.with_eccentricity(20.0).unwrap();
        assert_relative_eq!(q.eccentricity(), 20.0);
        assert_eq!(q.pin_count(), 12);
        assert!(p.with_eccentricity(-1.0).is_err());
    }

    #[test]
    fn with_pin_radius_revalidates() {
        let p = GearParameters::default();
        assert_relative_eq!(p.with_pin_radius(2.5).unwrap().pin_radius(), 2.5);
        assert!(p.with_pin_radius(f64::NAN).is_err());
    }

    #[test]
    fn error_message_names_parameter() {
        let err = GearParameters::new(80.0, 12, 5.0, -2.0).unwrap_err();
        assert_eq!(err.to_string(), "eccentricity must be non-negative, got -2");
    }
}
