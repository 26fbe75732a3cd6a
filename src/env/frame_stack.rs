//! Observation-history stacking wrapper.
//!
//! Buffers the last `k` observation windows and exposes them stacked along a
//! trailing axis, so a policy can see short-term motion. Rewards, terminal
//! flags, and diagnostics pass through the wrapped environment unchanged.

use std::collections::VecDeque;

use ndarray::{s, Array3, Array4};

use crate::error::EnvError;

use super::environment::{Diagnostics, NavEnv};
use super::types::Action;

/// Wraps a [`NavEnv`] and stacks its last `k` observations.
pub struct FrameStack {
    env: NavEnv,
    k: usize,
    frames: VecDeque<Array3<f32>>,
}

impl FrameStack {
    /// Wraps `env`, keeping the most recent `k` frames.
    pub fn new(env: NavEnv, k: usize) -> Result<Self, EnvError> {
        if k == 0 {
            return Err(EnvError::InvalidStackDepth);
        }
        Ok(Self {
            env,
            k,
            frames: VecDeque::with_capacity(k),
        })
    }

    /// Starts a new episode.
    ///
    /// The buffer is refilled with `k − 1` zero frames plus the initial
    /// observation, so the stack shape is valid from the first step.
    pub fn reset(&mut self) -> Result<Array4<f32>, EnvError> {
        let observation = self.env.reset()?;
        self.frames.clear();
        for _ in 0..self.k - 1 {
            self.frames.push_back(Array3::zeros(observation.raw_dim()));
        }
        self.frames.push_back(observation);
        Ok(self.stacked())
    }

    /// Steps the wrapped environment and appends the new observation.
    pub fn step(
        &mut self,
        action: Action,
    ) -> Result<(Array4<f32>, f64, bool, Diagnostics), EnvError> {
        let result = self.env.step(action)?;
        self.frames.pop_front();
        self.frames.push_back(result.observation);
        Ok((
            self.stacked(),
            result.reward,
            result.terminal,
            result.diagnostics,
        ))
    }

    /// Number of stacked frames.
    pub fn depth(&self) -> usize {
        self.k
    }

    /// The wrapped environment.
    pub fn env(&self) -> &NavEnv {
        &self.env
    }

    fn stacked(&self) -> Array4<f32> {
        let dims = self.env.screen_dims().as_array();
        let mut out = Array4::zeros((dims[0], dims[1], dims[2], self.k));
        for (i, frame) in self.frames.iter().enumerate() {
            out.slice_mut(s![.., .., .., i]).assign(frame);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::config::{EnvConfig, ScreenDims};
    use crate::env::types::{GridPos, Mode};
    use crate::volume::{CyclicVolumeProvider, Volume};
    use ndarray::Array3;

    fn make_stack(k: usize) -> FrameStack {
        let config = EnvConfig {
            screen_dims: ScreenDims::new(5, 5, 5),
            mode: Mode::Train,
            ..EnvConfig::default()
        };
        // Target sits outside the start margin, so no single step terminates.
        let volume = Volume::new(
            Array3::from_elem((40, 40, 40), 1.0),
            GridPos::new(2, 2, 2),
            "v".to_string(),
        );
        let provider = CyclicVolumeProvider::new(vec![volume]);
        let env = NavEnv::new(config, Box::new(provider), 3).unwrap();
        FrameStack::new(env, k).unwrap()
    }

    #[test]
    fn zero_depth_rejected() {
        let stack = make_stack(1);
        let env_config_err = FrameStack::new(stack.env, 0);
        assert!(matches!(env_config_err, Err(EnvError::InvalidStackDepth)));
    }

    #[test]
    fn reset_stacks_zero_history() {
        let mut stack = make_stack(4);
        let obs = stack.reset().unwrap();
        assert_eq!(obs.dim(), (5, 5, 5, 4));
        // Interior start over a constant volume: the newest frame is all
        // ones, the three older slots are zero padding.
        for i in 0..3 {
            assert!(obs.slice(s![.., .., .., i]).iter().all(|&v| v == 0.0));
        }
        assert!(obs.slice(s![.., .., .., 3]).iter().all(|&v| v == 1.0));
    }

    #[test]
    fn step_shifts_frames() {
        let mut stack = make_stack(3);
        stack.reset().unwrap();
        let (obs, _, _, _) = stack.step(Action::Right).unwrap();
        assert_eq!(obs.dim(), (5, 5, 5, 3));
        // One zero frame left, two real frames.
        assert!(obs.slice(s![.., .., .., 0]).iter().all(|&v| v == 0.0));
        assert!(obs.slice(s![.., .., .., 1]).iter().all(|&v| v == 1.0));
        assert!(obs.slice(s![.., .., .., 2]).iter().all(|&v| v == 1.0));
    }

    #[test]
    fn passthrough_reward_and_diagnostics() {
        let mut stack = make_stack(2);
        stack.reset().unwrap();
        let (_, reward, terminal, diagnostics) = stack.step(Action::Up).unwrap();
        assert!(!terminal);
        assert!((diagnostics.score - reward).abs() < 1e-12);
    }
}
