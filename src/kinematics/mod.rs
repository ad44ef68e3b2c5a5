//! Rigid-body motion of the disc and pin assembly.
//!
//! Both conventions share the same eccentric orbit of the disc axis; they
//! differ only in which body is held still. Each [`KinematicMode`] variant
//! owns its closed-form placement, and [`DerivedQuantities`] summarises the
//! resulting reduction.

mod derived;
mod placement;

pub use derived::{derived_quantities, DerivedQuantities, RotationDirection};
pub use placement::{placement, Placement};

/// Which body of the reducer is held in the fixed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KinematicMode {
    /// Ring/housing stationary; output taken off the orbiting disc.
    #[default]
    FixedPins,
    /// Disc held at fixed phase; output taken off the rotating pin housing.
    FixedCycloid,
}

impl KinematicMode {
    /// Returns a short human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FixedPins => "fixed pins",
            Self::FixedCycloid => "fixed cycloid",
        }
    }
}

impl std::fmt::Display for KinematicMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
