use simvis_core::{deg_to_rad, polar_to_point, Vector3};
use simvis_msgs::{agent, vision3d};

use crate::consts::{CAMERA_FRAME_ID, GOALPOST_DIAMETER, GOALPOST_HALF_HEIGHT, GOALPOST_HEIGHT};

/// Convert a frame's goalpost observations to a [`vision3d::GoalpostArray`].
///
/// Produces exactly one bounding box per observation, in observation order.
/// The frame id is always [`CAMERA_FRAME_ID`], regardless of input.
pub fn goalpost_array(goalposts: &[agent::Goalpost]) -> vision3d::GoalpostArray {
    let mut array = vision3d::GoalpostArray {
        header: vision3d::Header {
            frame_id: CAMERA_FRAME_ID.to_owned(),
        },
        posts: Vec::with_capacity(goalposts.len()),
    };

    for goalpost in goalposts {
        if goalpost.top.r < 0.0 {
            log::debug!(
                "Goalpost observation with negative distance: {}",
                goalpost.top.r
            );
        }
        let top = polar_to_point(
            goalpost.top.r,
            deg_to_rad(goalpost.top.phi),
            deg_to_rad(goalpost.top.theta),
        );

        // The simulator reports the top of the post, so its center sits half
        // the post height straight down. Post tilt is ignored.
        let center = Vector3::new(top.x, top.y, top.z - GOALPOST_HALF_HEIGHT);
        let size = Vector3::new(GOALPOST_DIAMETER, GOALPOST_DIAMETER, GOALPOST_HEIGHT);

        array.posts.push(vision3d::Goalpost {
            bb: vision3d::BoundingBox3 { center, size },
        });
    }

    array
}
