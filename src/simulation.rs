//! Frame-driven driver around the pure kinematics core.
//!
//! [`Simulation`] stands in for the caller that owns the clock, the mode
//! selector and the parameter source. Every frame is recomputed from scratch
//! from `(input_angle, parameters, mode)`; only the derived quantities are
//! cached between parameter or mode changes.

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};
use crate::kinematics::{derived_quantities, placement, DerivedQuantities, KinematicMode, Placement};
use crate::params::GearParameters;

/// Input-angle increment per tick used by [`SimulationConfig::default`].
pub const DEFAULT_ANGLE_STEP: f64 = 0.02;

/// Settings for a [`Simulation`].
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Input-angle increment applied by each [`Simulation::tick`] (radians).
    pub angle_step: f64,
    /// Initial kinematic convention.
    pub mode: KinematicMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            angle_step: DEFAULT_ANGLE_STEP,
            mode: KinematicMode::FixedPins,
        }
    }
}

impl SimulationConfig {
    /// Checks that the clock advances monotonically.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `angle_step` is non-finite or not positive.
    pub fn validate(&self) -> Result<()> {
        if !self.angle_step.is_finite() {
            return Err(ConfigError::NonFinite {
                parameter: "angle_step",
            }
            .into());
        }
        if self.angle_step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.angle_step).into());
        }
        Ok(())
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Input-shaft angle this frame was computed for (radians).
    pub input_angle: f64,
    /// Placement of the disc and pin assembly.
    pub placement: Placement,
    /// Ratio, direction and undercut flag for the current parameters and mode.
    pub derived: DerivedQuantities,
}

/// Owns the input angle, the current parameters and the selected mode.
#[derive(Debug, Clone)]
pub struct Simulation {
    params: GearParameters,
    mode: KinematicMode,
    angle_step: f64,
    input_angle: f64,
    derived: DerivedQuantities,
}

impl Simulation {
    /// Creates a simulation at input angle zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails
    /// [`SimulationConfig::validate`].
    pub fn new(params: GearParameters, config: SimulationConfig) -> Result<Self> {
        config
            .validate()
            .inspect_err(|err| debug!(%err, "rejected simulation config"))?;
        Ok(Self::with_valid_config(params, config))
    }

    fn with_valid_config(params: GearParameters, config: SimulationConfig) -> Self {
        let derived = derived_quantities(&params, config.mode);
        if derived.undercut_warning {
            warn!(
                eccentricity_factor = derived.eccentricity_factor,
                "initial parameters undercut the disc profile"
            );
        }
        Self {
            params,
            mode: config.mode,
            angle_step: config.angle_step,
            input_angle: 0.0,
            derived,
        }
    }

    /// Returns the current input-shaft angle (radians).
    #[must_use]
    pub fn input_angle(&self) -> f64 {
        self.input_angle
    }

    /// Returns the selected kinematic convention.
    #[must_use]
    pub fn mode(&self) -> KinematicMode {
        self.mode
    }

    /// Returns the current gear parameters.
    #[must_use]
    pub fn parameters(&self) -> &GearParameters {
        &self.params
    }

    /// Returns the cached derived quantities.
    #[must_use]
    pub fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    /// Advances the input angle by one step and returns the new frame.
    pub fn tick(&mut self) -> Frame {
        self.input_angle += self.angle_step;
        self.frame()
    }

    /// Computes the frame for the current input angle without advancing.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            input_angle: self.input_angle,
            placement: placement(self.input_angle, &self.params, self.mode),
            derived: self.derived,
        }
    }

    /// Switches the kinematic convention; takes effect on the next frame.
    pub fn set_mode(&mut self, mode: KinematicMode) {
        if mode == self.mode {
            return;
        }
        info!(from = %self.mode, to = %mode, "switching kinematic mode");
        self.mode = mode;
        self.refresh_derived();
    }

    /// Replaces the gear parameters.
    ///
    /// Parameters are validated on construction, so this cannot fail.
    pub fn set_parameters(&mut self, params: GearParameters) {
        if params == self.params {
            return;
        }
        debug!(
            pitch_radius = params.pitch_radius(),
            pin_count = params.pin_count(),
            pin_radius = params.pin_radius(),
            eccentricity = params.eccentricity(),
            "gear parameters updated"
        );
        self.params = params;
        self.refresh_derived();
    }

    fn refresh_derived(&mut self) {
        let was_warning = self.derived.undercut_warning;
        self.derived = derived_quantities(&self.params, self.mode);
        if self.derived.undercut_warning && !was_warning {
            warn!(
                eccentricity_factor = self.derived.eccentricity_factor,
                pin_radius = self.params.pin_radius(),
                pin_pitch = self.params.pin_pitch(),
                "parameters undercut the disc profile"
            );
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::with_valid_config(GearParameters::default(), SimulationConfig::default())
    }
}
