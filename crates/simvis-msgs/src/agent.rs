//! The simulator's perception schema: observations relative to the agent's
//! camera, in polar coordinates with angles in degrees.

use serde::{Deserialize, Serialize};

/// A polar observation relative to the agent's camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    /// Distance to the observed point, in m. Expected to be non-negative,
    /// but not enforced.
    pub r: f64,
    /// Elevation angle, in degrees.
    pub phi: f64,
    /// Azimuth angle, in degrees.
    pub theta: f64,
}

/// A ball observation. Absence of a `Ball` for a frame means the ball was
/// not seen, which is a normal state rather than an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center of the ball.
    pub center: Spherical,
}

/// A goalpost observation. The simulator reports the *top* point of the
/// post; its identity is given by its position in the observation sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Goalpost {
    /// Top of the goalpost.
    pub top: Spherical,
}
