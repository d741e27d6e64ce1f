use simvis_core::{deg_to_rad, polar_to_point};
use simvis_msgs::{agent, vision3d};

use crate::consts::CAMERA_FRAME_ID;

/// Convert a frame's ball observation, if any, to a [`vision3d::BallArray`].
///
/// An unseen ball yields an array with zero entries. The frame id is always
/// [`CAMERA_FRAME_ID`], regardless of input.
pub fn ball_array(ball: Option<&agent::Ball>) -> vision3d::BallArray {
    let mut array = vision3d::BallArray {
        header: vision3d::Header {
            frame_id: CAMERA_FRAME_ID.to_owned(),
        },
        balls: Vec::new(),
    };

    if let Some(ball) = ball {
        if ball.center.r < 0.0 {
            log::debug!("Ball observation with negative distance: {}", ball.center.r);
        }
        let center = polar_to_point(
            ball.center.r,
            deg_to_rad(ball.center.phi),
            deg_to_rad(ball.center.theta),
        );
        array.balls.push(vision3d::Ball { center });
    }

    array
}
