//! Volume samples and providers.
//!
//! A [`Volume`] is the scalar dataset an episode navigates: a 3-D array, its
//! per-axis extent, and the true target position. Volumes reach the
//! environment through a [`VolumeProvider`], a pull-based source queried
//! exactly once per episode reset.

pub mod provider;
pub mod sample;

pub use provider::{CyclicVolumeProvider, VolumeProvider};
pub use sample::Volume;
