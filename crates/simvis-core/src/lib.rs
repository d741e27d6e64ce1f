mod math;

pub use math::*;

/// A 3D vector, in meters.
pub type Vector3 = nalgebra::Vector3<f64>;
