//! The standardized 3D vision schema consumed by the downstream perception
//! pipeline. All positions and sizes are in meters, in the frame named by
//! the message header.

use serde::{Deserialize, Serialize};
use simvis_core::Vector3;

/// Metadata attached to every detection array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Label of the coordinate frame the detections are expressed in.
    pub frame_id: String,
}

/// A detected ball.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center of the ball, in m.
    pub center: Vector3,
}

/// All balls detected in one frame. Contains zero or one entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BallArray {
    pub header: Header,
    pub balls: Vec<Ball>,
}

/// An axis-aligned 3D bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox3 {
    /// Center of the box, in m.
    pub center: Vector3,
    /// Extent of the box along each axis, in m.
    pub size: Vector3,
}

/// A detected goalpost, approximated by its bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goalpost {
    pub bb: BoundingBox3,
}

/// All goalposts detected in one frame, in observation order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalpostArray {
    pub header: Header,
    pub posts: Vec<Goalpost>,
}
