pub mod error;
pub mod geometry;
pub mod kinematics;
pub mod math;
pub mod params;
pub mod simulation;
pub mod tessellation;

pub use error::{CycloidError, Result};
pub use geometry::profile_point;
pub use kinematics::{derived_quantities, placement, DerivedQuantities, KinematicMode, Placement};
pub use params::GearParameters;
