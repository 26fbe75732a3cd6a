//! Configuration for the navigation environment.

use crate::error::EnvError;

use super::types::Mode;

/// Fixed observation-window extents per axis.
///
/// Each extent must be positive and odd so the window has a center voxel.
/// Planar (2-D) data is navigated with an ordinary window; the slices that
/// fall outside a depth-1 volume are zero-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenDims {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl ScreenDims {
    /// Creates new window extents.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Extents as an array indexed by axis (0 = x, 1 = y, 2 = z).
    pub fn as_array(&self) -> [usize; 3] {
        [self.width, self.height, self.depth]
    }

    fn is_valid(&self) -> bool {
        self.as_array().iter().all(|&d| d > 0 && d % 2 == 1)
    }
}

impl Default for ScreenDims {
    fn default() -> Self {
        Self::new(27, 27, 27)
    }
}

/// Configuration for the navigation environment.
///
/// Controls the observation window, oscillation detection, the step budget,
/// and the start-margin policy. The margin divisors and the oscillation
/// threshold are empirical policy constants, kept configurable on purpose.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvConfig {
    /// Observation-window extents.
    pub screen_dims: ScreenDims,
    /// Number of recent positions kept for oscillation detection.
    pub history_length: usize,
    /// Maximum steps per episode; 0 disables the budget.
    pub max_num_frames: u32,
    /// Border margin divisor for start sampling while training
    /// (margin = extent / divisor per axis).
    pub margin_divisor_train: u32,
    /// Border margin divisor for start sampling while evaluating.
    /// Tighter than the training margin to avoid degenerate starts near edges.
    pub margin_divisor_eval: u32,
    /// An episode oscillates when one position occurs more than this many
    /// times in the history window.
    pub oscillation_threshold: usize,
    /// Termination policy.
    pub mode: Mode,
}

impl EnvConfig {
    /// Validates this configuration against the provider's declared
    /// dimensionality.
    pub fn validate(&self, provider_dims: usize) -> Result<(), EnvError> {
        if !self.screen_dims.is_valid() {
            return Err(EnvError::InvalidScreenDims(self.screen_dims.as_array()));
        }
        if self.history_length == 0 {
            return Err(EnvError::InvalidHistoryLength);
        }
        for divisor in [self.margin_divisor_train, self.margin_divisor_eval] {
            if divisor < 3 {
                return Err(EnvError::InvalidMarginDivisor(divisor));
            }
        }
        if provider_dims != 2 && provider_dims != 3 {
            return Err(EnvError::DimensionalityMismatch(provider_dims));
        }
        Ok(())
    }

    /// Margin divisor in effect for the configured mode.
    pub fn margin_divisor(&self) -> u32 {
        match self.mode {
            Mode::Train => self.margin_divisor_train,
            Mode::Eval => self.margin_divisor_eval,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            screen_dims: ScreenDims::default(),
            history_length: 16,
            max_num_frames: 0,
            margin_divisor_train: 4,
            margin_divisor_eval: 3,
            oscillation_threshold: 3,
            mode: Mode::Train,
        }
    }
}
