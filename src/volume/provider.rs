//! Volume providers.

use tracing::debug;

use crate::error::EnvError;

use super::Volume;

/// Pull-based source of volume samples.
///
/// The environment calls [`next_sample`](VolumeProvider::next_sample) exactly
/// once per episode reset and treats failure as fatal; whether to retry is
/// the driving caller's decision.
pub trait VolumeProvider: Send {
    /// Declared dimensionality of the supplied data: 3, or 2 for planar
    /// volumes (depth extent 1).
    fn dims(&self) -> usize {
        3
    }

    /// Yields the next sample.
    fn next_sample(&mut self) -> Result<Volume, EnvError>;
}

/// In-memory provider cycling through a fixed set of volumes forever.
pub struct CyclicVolumeProvider {
    volumes: Vec<Volume>,
    cursor: usize,
    dims: usize,
}

impl CyclicVolumeProvider {
    /// Creates a provider that yields `volumes` in order, wrapping around.
    ///
    /// The declared dimensionality is 2 when every volume is planar.
    pub fn new(volumes: Vec<Volume>) -> Self {
        let dims = if !volumes.is_empty() && volumes.iter().all(Volume::is_planar) {
            2
        } else {
            3
        };
        Self {
            volumes,
            cursor: 0,
            dims,
        }
    }

    /// Number of distinct volumes in the cycle.
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// True when the provider holds no volumes.
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}

impl VolumeProvider for CyclicVolumeProvider {
    fn dims(&self) -> usize {
        self.dims
    }

    fn next_sample(&mut self) -> Result<Volume, EnvError> {
        if self.volumes.is_empty() {
            return Err(EnvError::ProviderExhausted);
        }
        let sample = self.volumes[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.volumes.len();
        debug!(sample = sample.id(), cursor = self.cursor, "sampled volume");
        Ok(sample)
    }
}
