//! Physical constants and frame labels used by the converters.

// dimensions are in m

/// Frame id of the top camera, used for all outgoing detections.
pub const CAMERA_FRAME_ID: &str = "CameraTop_frame";

/// Goalpost height per the SPL rules.
pub const GOALPOST_HEIGHT: f64 = 0.8;

/// Distance from the top of a goalpost to its center.
pub const GOALPOST_HALF_HEIGHT: f64 = GOALPOST_HEIGHT / 2.0;

/// Goalpost diameter, estimated from the SPL rules.
pub const GOALPOST_DIAMETER: f64 = 0.1;
