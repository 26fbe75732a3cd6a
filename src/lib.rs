//! voxnav - Volumetric navigation environment for landmark-detection agents
//!
//! A discrete-grid simulation environment in which an agent moves voxel by
//! voxel through a scalar volume toward a hidden target location, receiving
//! distance-based rewards and fixed-size observation windows cropped around
//! its position.

pub mod env;
pub mod error;
pub mod volume;

// Re-export the environment surface for ergonomic use
pub use env::{
    Action, Diagnostics, EnvConfig, FrameStack, GridPos, Mode, NavEnv, ScreenDims, StepResult,
};
pub use error::EnvError;
pub use volume::{CyclicVolumeProvider, Volume, VolumeProvider};

/// Identifier type used for volume samples and environment artifacts.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
