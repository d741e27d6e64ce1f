//! Converts the simulator's polar perception messages into standardized 3D
//! vision messages, expressed in the top camera's frame.
//!
//! The converters are stateless and total: they never fail, and an unseen
//! ball is represented by an empty array rather than an error.

mod ball;
mod goalpost;

pub mod consts;

pub use ball::ball_array;
pub use goalpost::goalpost_array;
