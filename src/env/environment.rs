//! Navigation environment core.
//!
//! Implements the per-step state machine: bounded unit moves, distance-delta
//! rewards with a fixed boundary penalty, windowed observations, oscillation
//! detection, and the mode-dependent termination policy.

use std::sync::Mutex;

use ndarray::Array3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::EnvError;
use crate::volume::{Volume, VolumeProvider};

use super::config::{EnvConfig, ScreenDims};
use super::history::LocationHistory;
use super::observation::extract_screen;
use super::reward::RewardModel;
use super::stats::{EnvStats, StatCounter};
use super::types::{Action, GridPos, Mode};

/// Serializes non-reentrant global setup (RNG seeding) when environment
/// instances are built or reseeded from parallel worker threads.
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Result of a single environment step.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// Observation window after the move.
    pub observation: Array3<f32>,
    /// Reward for the move (−1 for rejected boundary moves).
    pub reward: f64,
    /// Whether the episode ended this step.
    pub terminal: bool,
    /// Step diagnostics.
    pub diagnostics: Diagnostics,
}

/// Per-step diagnostic information.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    /// Cumulative episode reward so far.
    pub score: f64,
    /// Terminal flag, mirrored for callers that only keep diagnostics.
    pub terminal: bool,
    /// Euclidean distance from the agent to the target.
    pub distance_error: f64,
}

/// The navigation environment.
///
/// Owns one episode at a time: the active volume, the agent's position, the
/// recent-location history, and per-environment statistics. Steps are
/// synchronous and the core holds no internal concurrency.
///
/// # Lifecycle
///
/// 1. Call [`NavEnv::new`] with configuration, a volume provider, and a seed.
/// 2. Call [`NavEnv::reset`] to start an episode.
/// 3. Repeatedly call [`NavEnv::step`] until the result is terminal.
pub struct NavEnv {
    config: EnvConfig,
    provider: Box<dyn VolumeProvider>,
    volume: Option<Volume>,
    location: GridPos,
    start_location: GridPos,
    cur_dist: f64,
    terminal: bool,
    step_count: u32,
    history: LocationHistory,
    episode_score: StatCounter,
    stats: EnvStats,
    rng: StdRng,
    seed: u64,
}

impl NavEnv {
    /// Creates a new environment.
    ///
    /// Validates the configuration against the provider's declared
    /// dimensionality and seeds the RNG. No episode is started; call
    /// [`reset`](Self::reset) first.
    pub fn new(
        config: EnvConfig,
        provider: Box<dyn VolumeProvider>,
        seed: u64,
    ) -> Result<Self, EnvError> {
        config.validate(provider.dims())?;
        let history = LocationHistory::new(config.history_length);
        let rng = {
            let _guard = INIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            StdRng::seed_from_u64(seed)
        };
        Ok(Self {
            config,
            provider,
            volume: None,
            location: GridPos::ZERO,
            start_location: GridPos::ZERO,
            cur_dist: 0.0,
            terminal: false,
            step_count: 0,
            history,
            episode_score: StatCounter::new(),
            stats: EnvStats::default(),
            rng,
            seed,
        })
    }

    /// Starts a new episode and returns the initial observation.
    ///
    /// Pulls the next sample from the provider (failure is fatal and
    /// propagated without retry), reseeds the RNG for reproducible episodes,
    /// and places the agent uniformly at random inside the volume interior,
    /// skipping a border margin of `extent / divisor` voxels per axis.
    pub fn reset(&mut self) -> Result<Array3<f32>, EnvError> {
        self.terminal = false;
        self.stats.num_episodes.feed(1.0);
        self.episode_score.reset();
        self.history.clear();
        self.step_count = 0;

        let volume = self.provider.next_sample()?;
        let extent = volume.extent();
        if extent.iter().any(|&e| e == 0) {
            return Err(EnvError::Provider(format!(
                "sample {} has an empty extent {:?}",
                volume.id(),
                extent
            )));
        }
        if self.provider.dims() == 2 && !volume.is_planar() {
            return Err(EnvError::Provider(format!(
                "2-dimensional provider yielded non-planar sample {}",
                volume.id()
            )));
        }

        {
            let _guard = INIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            self.rng = StdRng::seed_from_u64(self.seed);
            self.seed += 1; // different seed each episode
        }

        let divisor = self.config.margin_divisor() as usize;
        let mut coords = [0i64; 3];
        for (axis, coord) in coords.iter_mut().enumerate() {
            let extent_d = extent[axis];
            let skip = extent_d / divisor;
            let (lo, hi) = if extent_d > 2 * skip {
                (skip, extent_d - skip)
            } else {
                (0, extent_d)
            };
            *coord = self.rng.gen_range(lo as i64..hi as i64);
        }

        self.location = GridPos::new(coords[0], coords[1], coords[2]);
        self.start_location = self.location;
        self.cur_dist = self.location.distance_to(&volume.target());

        let screen = extract_screen(volume.data(), self.location, self.config.screen_dims);
        debug!(
            sample = volume.id(),
            ?extent,
            start = %self.location,
            target = %volume.target(),
            "episode started"
        );
        self.volume = Some(volume);
        Ok(screen)
    }

    /// Executes one environment step.
    ///
    /// The candidate position is one voxel from the current position along
    /// the action's axis. A candidate outside the volume is rejected: the
    /// position is unchanged and the reward is the fixed boundary penalty.
    /// Otherwise the reward is the distance delta toward the target.
    ///
    /// Termination is evaluated after every step: goal reached (training),
    /// oscillation (evaluation), or the step budget, which applies in both
    /// modes and resets its counter when it fires.
    pub fn step(&mut self, action: Action) -> Result<StepResult, EnvError> {
        let (target, extent) = match &self.volume {
            Some(volume) => (volume.target(), volume.extent()),
            None => return Err(EnvError::EpisodeNotStarted),
        };

        self.terminal = false;
        let axis = action.axis();
        let candidate = self.location.offset(axis, action.delta());
        let coord = candidate.coord(axis);
        let go_out = coord < 0 || coord >= extent[axis] as i64;

        let (next, reward) = if go_out {
            (self.location, RewardModel::BOUNDARY_PENALTY)
        } else {
            (
                candidate,
                RewardModel::distance_delta(self.location, candidate, target),
            )
        };

        self.location = next;
        self.cur_dist = next.distance_to(&target);
        self.history.push(next);

        match self.config.mode {
            Mode::Train => {
                if self.cur_dist < 1.0 {
                    self.terminal = true;
                    self.stats.num_success.feed(1.0);
                }
            }
            Mode::Eval => {
                if self
                    .history
                    .is_oscillating(self.config.oscillation_threshold)
                {
                    self.terminal = true;
                    if self.cur_dist < 1.0 {
                        self.stats.num_success.feed(1.0);
                    }
                }
            }
        }

        self.step_count += 1;
        if self.config.max_num_frames > 0 && self.step_count >= self.config.max_num_frames {
            self.terminal = true;
            self.step_count = 0;
        }

        self.episode_score.feed(reward);
        if self.terminal {
            info!(
                score = self.episode_score.sum(),
                distance_error = self.cur_dist,
                stats = %self.stats,
                "episode finished"
            );
        }

        let observation = match &self.volume {
            Some(volume) => extract_screen(volume.data(), self.location, self.config.screen_dims),
            None => return Err(EnvError::EpisodeNotStarted),
        };
        let diagnostics = Diagnostics {
            score: self.episode_score.sum(),
            terminal: self.terminal,
            distance_error: self.cur_dist,
        };
        Ok(StepResult {
            observation,
            reward,
            terminal: self.terminal,
            diagnostics,
        })
    }

    /// Names of the discrete actions, in index order.
    pub fn get_action_meanings(&self) -> Vec<&'static str> {
        Action::all().iter().map(|a| a.meaning()).collect()
    }

    /// Observation-window extents, fixed at construction.
    pub fn screen_dims(&self) -> ScreenDims {
        self.config.screen_dims
    }

    /// Accumulated episode statistics.
    pub fn stats(&self) -> &EnvStats {
        &self.stats
    }

    /// Zeroes the episode and success counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// The agent's current position.
    pub fn location(&self) -> GridPos {
        self.location
    }

    /// Where the current episode started.
    pub fn start_location(&self) -> GridPos {
        self.start_location
    }

    /// Target of the active episode, if one is running.
    pub fn target(&self) -> Option<GridPos> {
        self.volume.as_ref().map(Volume::target)
    }

    /// Euclidean distance from the agent to the target.
    pub fn distance_error(&self) -> f64 {
        self.cur_dist
    }

    /// Whether the last step ended the episode.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}
