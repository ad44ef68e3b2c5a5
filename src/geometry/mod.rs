pub mod curve;

pub use curve::{profile_point, Curve2, CurveDomain, CycloidProfile, Epitrochoid};
