//! A single volume sample.

use ndarray::{Array3, ArrayView2, Axis};

use crate::env::GridPos;
use crate::Id;

/// A scalar volume with its navigation target.
///
/// Immutable for the duration of an episode; the active episode owns its
/// volume exclusively and replaces it wholesale on reset. Planar (2-D) data
/// is represented with a depth extent of 1.
#[derive(Debug, Clone)]
pub struct Volume {
    data: Array3<f32>,
    target: GridPos,
    id: Id,
}

impl Volume {
    /// Creates a volume from its data, target position, and source identifier.
    pub fn new(data: Array3<f32>, target: GridPos, id: Id) -> Self {
        Self { data, target, id }
    }

    /// The scalar data.
    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    /// Per-axis extent (x, y, z).
    pub fn extent(&self) -> [usize; 3] {
        let (x, y, z) = self.data.dim();
        [x, y, z]
    }

    /// The target position inside this volume.
    pub fn target(&self) -> GridPos {
        self.target
    }

    /// Source identifier of this sample.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The z-plane at `z`, if it exists.
    pub fn plane(&self, z: usize) -> Option<ArrayView2<'_, f32>> {
        if z < self.extent()[2] {
            Some(self.data.index_axis(Axis(2), z))
        } else {
            None
        }
    }

    /// True when this volume is planar (depth extent 1).
    pub fn is_planar(&self) -> bool {
        self.extent()[2] == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_matches_data() {
        let volume = Volume::new(
            Array3::zeros((4, 5, 6)),
            GridPos::new(1, 1, 1),
            "v".to_string(),
        );
        assert_eq!(volume.extent(), [4, 5, 6]);
        assert!(!volume.is_planar());
    }

    #[test]
    fn plane_returns_z_slice() {
        let mut data = Array3::zeros((3, 3, 3));
        data[[1, 2, 2]] = 7.0;
        let volume = Volume::new(data, GridPos::ZERO, "v".to_string());
        let plane = volume.plane(2).unwrap();
        assert_eq!(plane[[1, 2]], 7.0);
        assert!(volume.plane(3).is_none());
    }

    #[test]
    fn depth_one_volume_is_planar() {
        let volume = Volume::new(Array3::zeros((8, 8, 1)), GridPos::ZERO, "p".to_string());
        assert!(volume.is_planar());
    }
}
