//! Distance-delta reward model.

use super::types::GridPos;

/// Computes rewards for the navigation environment.
pub struct RewardModel;

impl RewardModel {
    /// Fixed penalty for a move rejected at the volume boundary.
    ///
    /// Applied by the environment instead of the distance delta; the reward
    /// model itself is never consulted for rejected moves.
    pub const BOUNDARY_PENALTY: f64 = -1.0;

    /// Reward for an accepted move from `current` to `next`.
    ///
    /// `distance(current, target) − distance(next, target)`: positive when
    /// the move strictly reduced the distance to the target, negative when it
    /// increased it, zero when unchanged.
    pub fn distance_delta(current: GridPos, next: GridPos, target: GridPos) -> f64 {
        current.distance_to(&target) - next.distance_to(&target)
    }
}
