//! Boundary-safe windowed observation extraction.
//!
//! Crops a fixed-size block centered on the agent out of the volume. Where
//! the window hangs over a volume boundary the missing voxels are zero, so
//! the output shape never depends on the agent's position.

use ndarray::{s, Array3};

use super::config::ScreenDims;
use super::types::GridPos;

/// Extracts the observation window around `center`.
///
/// Per axis the source range is `[center − extent/2 − 1, center + extent/2)`.
/// The low bound sits one voxel below the symmetric choice; trained policies
/// depend on this exact layout, so it must not be "fixed". Out-of-volume
/// parts of the range shrink the destination block instead of erroring,
/// leaving those output voxels zero.
pub fn extract_screen(volume: &Array3<f32>, center: GridPos, dims: ScreenDims) -> Array3<f32> {
    let out_dims = dims.as_array();
    let mut screen = Array3::<f32>::zeros((out_dims[0], out_dims[1], out_dims[2]));

    let (ex, ey, ez) = volume.dim();
    let extent = [ex, ey, ez];

    let mut src_lo = [0usize; 3];
    let mut src_hi = [0usize; 3];
    let mut dst_lo = [0usize; 3];
    let mut dst_hi = [0usize; 3];

    for axis in 0..3 {
        let half = (out_dims[axis] / 2) as i64;
        let mut lo = center.coord(axis) - half - 1;
        let mut hi = center.coord(axis) + half;
        let mut d_lo = 0usize;
        let mut d_hi = out_dims[axis];

        if lo < 0 {
            d_hi = d_hi.saturating_sub(lo.unsigned_abs() as usize);
            lo = 0;
        }
        if hi > extent[axis] as i64 {
            d_lo = (hi - extent[axis] as i64) as usize;
            hi = extent[axis] as i64;
        }
        if hi <= lo || d_hi <= d_lo {
            // No overlap on this axis; the screen stays all zero.
            return screen;
        }

        src_lo[axis] = lo as usize;
        src_hi[axis] = hi as usize;
        dst_lo[axis] = d_lo;
        dst_hi[axis] = d_hi;
    }

    screen
        .slice_mut(s![
            dst_lo[0]..dst_hi[0],
            dst_lo[1]..dst_hi[1],
            dst_lo[2]..dst_hi[2]
        ])
        .assign(&volume.slice(s![
            src_lo[0]..src_hi[0],
            src_lo[1]..src_hi[1],
            src_lo[2]..src_hi[2]
        ]));

    screen
}
