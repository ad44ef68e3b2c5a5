use std::f64::consts::TAU;

use tracing::trace;

use crate::error::Result;
use crate::kinematics::Placement;
use crate::math::{Point2, Vector2};
use crate::params::GearParameters;

use super::{Polyline2, TessellationParams};

/// Returns the world-frame centres of the ring pins.
///
/// Pin `k` sits on the pitch circle at angle `2πk / Zp`, rotated with the pin
/// assembly by `placement.pin_group_angle`.
#[must_use]
pub fn pin_centers(gear: &GearParameters, placement: &Placement) -> Vec<Point2> {
    let count = gear.pin_count();
    let r = gear.pitch_radius();
    (0..count)
        .map(|k| {
            let angle = TAU * f64::from(k) / f64::from(count) + placement.pin_group_angle;
            Point2::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// Tessellates every ring pin into a closed circle polygon.
#[derive(Debug)]
pub struct TessellatePinRing {
    gear: GearParameters,
    params: TessellationParams,
    placement: Placement,
}

impl TessellatePinRing {
    /// Creates a new pin-ring tessellation operation.
    #[must_use]
    pub fn new(gear: GearParameters, params: TessellationParams, placement: Placement) -> Self {
        Self {
            gear,
            params,
            placement,
        }
    }

    /// Executes the tessellation, returning one polygon per pin.
    ///
    /// Pins of zero radius come back as single-point polygons at their
    /// centres.
    ///
    /// # Errors
    ///
    /// Returns an error if the tessellation parameters are invalid.
    pub fn execute(&self) -> Result<Vec<Polyline2>> {
        self.params.validate()?;

        let radius = self.gear.pin_radius();
        let centers = pin_centers(&self.gear, &self.placement);
        if radius <= 0.0 {
            return Ok(centers
                .into_iter()
                .map(|c| Polyline2 { points: vec![c] })
                .collect());
        }

        let segments = circle_segment_count(radius, &self.params);
        #[allow(clippy::cast_precision_loss)]
        let offsets: Vec<Vector2> = (0..segments)
            .map(|i| {
                let a = TAU * i as f64 / segments as f64 + self.placement.pin_group_angle;
                Vector2::new(radius * a.cos(), radius * a.sin())
            })
            .collect();

        trace!(pins = centers.len(), segments, "tessellated pin ring");
        Ok(centers
            .into_iter()
            .map(|c| Polyline2 {
                points: offsets.iter().map(|o| c + *o).collect(),
            })
            .collect())
    }
}

/// Computes the number of line segments needed to approximate a full circle
/// within the chord tolerance, clamped to the configured bounds.
fn circle_segment_count(radius: f64, params: &TessellationParams) -> usize {
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    // For a given tolerance: θ = 2 * acos(1 - tolerance/r)
    let max_angle = if params.pin_tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - params.pin_tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (TAU / max_angle).ceil() as usize;
    n.clamp(params.min_segments, params.max_segments)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::kinematics::{placement, KinematicMode};

    #[test]
    fn one_center_per_pin_on_pitch_circle() {
        let gear = GearParameters::default();
        let pl = placement(0.0, &gear, KinematicMode::FixedPins);
        let centers = pin_centers(&gear, &pl);
        assert_eq!(centers.len(), 12);
        for c in &centers {
            assert_abs_diff_eq!(c.coords.norm(), 80.0, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(centers[0].x, 80.0, epsilon = 1e-12);
        assert_abs_diff_eq!(centers[3].y, 80.0, epsilon = 1e-9);
    }

    #[test]
    fn centers_rotate_with_pin_group() {
        let gear = GearParameters::default();
        // pin_group_angle = input / 12 = pi / 2
        let pl = placement(6.0 * std::f64::consts::PI, &gear, KinematicMode::FixedCycloid);
        assert_abs_diff_eq!(pl.pin_group_angle, FRAC_PI_2, epsilon = 1e-12);
        let c = pin_centers(&gear, &pl)[0];
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y, 80.0, epsilon = 1e-9);
    }

    #[test]
    fn pin_polygons_stay_on_pin_radius() {
        let gear = GearParameters::default();
        let pl = placement(1.0, &gear, KinematicMode::FixedCycloid);
        let pins = TessellatePinRing::new(gear, TessellationParams::default(), pl)
            .execute()
            .unwrap();
        let centers = pin_centers(&gear, &pl);
        assert_eq!(pins.len(), 12);
        for (poly, c) in pins.iter().zip(&centers) {
            assert!(poly.len() >= 8);
            for p in &poly.points {
                assert_abs_diff_eq!((p - c).norm(), 5.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn zero_radius_pins_are_points() {
        let gear = GearParameters::new(40.0, 6, 0.0, 1.0).unwrap();
        let pl = placement(0.0, &gear, KinematicMode::FixedPins);
        let pins = TessellatePinRing::new(gear, TessellationParams::default(), pl)
            .execute()
            .unwrap();
        assert_eq!(pins.len(), 6);
        assert!(pins.iter().all(|p| p.len() == 1));
    }

    #[test]
    fn segment_count_respects_bounds() {
        let params = TessellationParams::default();
        // Large radius wants many segments; tiny radius wants few.
        assert_eq!(circle_segment_count(1e6, &params), params.max_segments);
        assert_eq!(circle_segment_count(0.001, &params), params.min_segments);
        let n = circle_segment_count(5.0, &params);
        assert!(n > params.min_segments && n < params.max_segments);
    }
}
