//! Message types exchanged with the simulator and the vision pipeline.
//!
//! The `agent` module mirrors the simulator's perception schema, the
//! `vision3d` module the standardized 3D vision schema. Both are plain data;
//! all conversion logic lives in `simvis-vision`.

pub mod agent;
pub mod vision3d;
