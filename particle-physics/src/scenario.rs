// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Scenario configuration loaded from YAML
//!
//! A scenario describes the initial state of a [`World`] and how long to
//! run it. Vectors are written as three-element sequences.
//!
//! # YAML format
//!
//! ```yaml
//! version: "0.1.0"
//! name: pair-with-gravity
//! timestep: 0.016666666666666666
//! duration: 5.0
//! particles:
//!   - mass: 100.0
//!     position: [0.6, 0.5, -4.0]
//!     acceleration: [0.0, -9.87, 0.0]
//!     damping: 0.85
//!     initial_force: [-3000.0, 0.0, 0.0]
//!   - mass: 1.0
//!     position: [0.3, 0.5, -4.0]
//!     acceleration: [0.0, -9.87, 0.0]
//!     damping: 0.95
//!     initial_force: [30.0, 0.0, 0.0]
//! ```
//!
//! `velocity`, `acceleration`, and `initial_force` default to zero and
//! `damping` to [`DEFAULT_DAMPING`]. The initial force is added once
//! before the first step, so it only acts during the first integration.

use crate::components::Vec3;
use crate::error::{Error, Result};
use crate::particle::{Particle, DEFAULT_DAMPING};
use crate::world::World;
use semver::Version;
use serde::Deserialize;
use std::path::Path;

/// Scenario format version understood by this crate
///
/// Format: MAJOR.MINOR.PATCH following semantic versioning.
pub const SCENARIO_FORMAT_VERSION: &str = "0.1.0";

/// Timestep used by the built-in scenarios (60 frames per second)
pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0;

/// Duration used by the built-in scenarios
pub const DEFAULT_DURATION: f64 = 5.0;

/// Largest number of steps a scenario may request
pub const MAX_STEPS: usize = u32::MAX as usize;

/// Upper bound on frames reserved up front by [`Scenario::run`]
const MAX_PREALLOCATED_FRAMES: usize = 1 << 16;

fn default_version() -> String {
    SCENARIO_FORMAT_VERSION.to_string()
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_timestep() -> f64 {
    DEFAULT_TIMESTEP
}

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

/// Initial state of one particle
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParticleConfig {
    /// Mass in kilograms, must be positive
    pub mass: f64,
    /// Initial position
    #[serde(default)]
    pub position: [f64; 3],
    /// Initial velocity
    #[serde(default)]
    pub velocity: [f64; 3],
    /// Constant external acceleration
    #[serde(default)]
    pub acceleration: [f64; 3],
    /// Damping in (0, 1]
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Force added once before the first step
    #[serde(default)]
    pub initial_force: [f64; 3],
}

impl ParticleConfig {
    /// Resting particle with the given mass and default damping
    pub fn new(mass: f64) -> Self {
        ParticleConfig {
            mass,
            position: [0.0; 3],
            velocity: [0.0; 3],
            acceleration: [0.0; 3],
            damping: DEFAULT_DAMPING,
            initial_force: [0.0; 3],
        }
    }

    /// Build the particle, applying `initial_force` to its accumulator
    pub fn build(&self) -> Result<Particle> {
        let position = checked_vector("position", self.position)?;
        let force = checked_vector("initial_force", self.initial_force)?;

        let mut particle = Particle::new(
            self.mass,
            Vec3::from(self.velocity),
            Vec3::from(self.acceleration),
            self.damping,
        )?
        .at(position);
        particle.add_force(force);
        Ok(particle)
    }
}

fn checked_vector(name: &'static str, value: [f64; 3]) -> Result<Vec3> {
    let vector = Vec3::from(value);
    if vector.is_valid() {
        Ok(vector)
    } else {
        Err(Error::InvalidVector { name, value })
    }
}

/// A complete simulation setup: particles, timestep, and duration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Scenario format version (semver)
    #[serde(default = "default_version")]
    pub version: String,
    /// Human-readable name
    #[serde(default)]
    pub name: Option<String>,
    /// Frame length in seconds
    #[serde(default = "default_timestep")]
    pub timestep: f64,
    /// Total simulated time in seconds
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// One or two particles
    pub particles: Vec<ParticleConfig>,
}

/// State of every particle after one step
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Simulated time at the end of the step
    pub time: f64,
    /// Particle positions, in scenario order
    pub positions: Vec<Vec3>,
    /// Particle velocities, in scenario order
    pub velocities: Vec<Vec3>,
}

/// Recorded result of running a scenario
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    /// Scenario name, if it had one
    pub name: Option<String>,
    /// One frame per step
    pub frames: Vec<Frame>,
    /// Particle/particle contacts resolved over the run
    pub pair_contacts: usize,
    /// Particle/ground contacts resolved over the run
    pub ground_contacts: usize,
}

impl Trajectory {
    /// Last recorded frame
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Scenario {
    /// Create a scenario with default timestep and duration
    pub fn new(name: impl Into<String>, particles: Vec<ParticleConfig>) -> Self {
        Scenario {
            version: default_version(),
            name: Some(name.into()),
            timestep: DEFAULT_TIMESTEP,
            duration: DEFAULT_DURATION,
            particles,
        }
    }

    /// Parse and validate a scenario from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let scenario: Scenario = serde_yaml::from_str(yaml)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read, parse, and validate a scenario file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded scenario file {}", path.as_ref().display());
        Self::from_yaml_str(&contents)
    }

    /// Single particle drifting upward under a weak constant acceleration
    pub fn upward_drift() -> Self {
        Scenario::new(
            "upward-drift",
            vec![ParticleConfig {
                position: [-0.6, 0.5, -4.0],
                acceleration: [0.0, 1.0, 0.0],
                damping: 0.6,
                ..ParticleConfig::new(10.0)
            }],
        )
    }

    /// Heavy and light particle pushed together under gravity
    pub fn pair_with_gravity() -> Self {
        Scenario::new(
            "pair-with-gravity",
            vec![
                ParticleConfig {
                    position: [0.6, 0.5, -4.0],
                    acceleration: [0.0, -9.87, 0.0],
                    damping: 0.85,
                    initial_force: [-3000.0, 0.0, 0.0],
                    ..ParticleConfig::new(100.0)
                },
                ParticleConfig {
                    position: [0.3, 0.5, -4.0],
                    acceleration: [0.0, -9.87, 0.0],
                    damping: 0.95,
                    initial_force: [30.0, 0.0, 0.0],
                    ..ParticleConfig::new(1.0)
                },
            ],
        )
    }

    /// Light particle thrown at a heavy resting one with no gravity
    pub fn pair_without_gravity() -> Self {
        Scenario::new(
            "pair-without-gravity",
            vec![
                ParticleConfig {
                    position: [0.6, 0.5, -4.0],
                    damping: 0.85,
                    ..ParticleConfig::new(100.0)
                },
                ParticleConfig {
                    position: [0.3, 0.5, -4.0],
                    damping: 0.85,
                    initial_force: [20.0, 0.08, 3.8],
                    ..ParticleConfig::new(0.5)
                },
            ],
        )
    }

    /// All built-in scenarios
    pub fn presets() -> Vec<Scenario> {
        vec![
            Self::upward_drift(),
            Self::pair_with_gravity(),
            Self::pair_without_gravity(),
        ]
    }

    /// Check version, counts, and numeric ranges
    pub fn validate(&self) -> Result<()> {
        if !is_format_compatible(&self.version, SCENARIO_FORMAT_VERSION) {
            return Err(Error::IncompatibleVersion {
                found: self.version.clone(),
                supported: SCENARIO_FORMAT_VERSION,
            });
        }

        if self.particles.is_empty() || self.particles.len() > 2 {
            return Err(Error::InvalidScenario(format!(
                "expected one or two particles, got {}",
                self.particles.len()
            )));
        }

        if !(self.timestep > 0.0) || !self.timestep.is_finite() {
            return Err(Error::InvalidScenario(format!(
                "timestep {} must be positive and finite",
                self.timestep
            )));
        }

        if !(self.duration >= 0.0) || !self.duration.is_finite() {
            return Err(Error::InvalidScenario(format!(
                "duration {} must be non-negative and finite",
                self.duration
            )));
        }

        let steps = (self.duration / self.timestep).ceil();
        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Err(Error::InvalidScenario(format!(
                "duration {} at timestep {} needs more than {} steps",
                self.duration, self.timestep, MAX_STEPS
            )));
        }

        for particle in &self.particles {
            particle.build()?;
        }

        Ok(())
    }

    /// Number of steps needed to cover `duration`
    pub fn step_count(&self) -> usize {
        (self.duration / self.timestep).ceil() as usize
    }

    /// Validate and build the initial world
    pub fn build_world(&self) -> Result<World> {
        self.validate()?;

        let mut particles = self.particles.iter().map(ParticleConfig::build);
        let first = match particles.next() {
            Some(particle) => particle?,
            None => return Err(Error::InvalidScenario("no particles".to_string())),
        };
        let second = particles.next().transpose()?;

        Ok(World::new(first, second))
    }

    /// Run the scenario to completion, recording every frame
    pub fn run(&self) -> Result<Trajectory> {
        let mut world = self.build_world()?;
        let steps = self.step_count();

        let mut trajectory = Trajectory {
            name: self.name.clone(),
            frames: Vec::with_capacity(steps.min(MAX_PREALLOCATED_FRAMES)),
            ..Trajectory::default()
        };

        for _ in 0..steps {
            let summary = world.step(self.timestep);
            trajectory.pair_contacts += summary.pair_contacts;
            trajectory.ground_contacts += summary.ground_contacts;
            trajectory.frames.push(Frame {
                time: world.elapsed(),
                positions: world.particles().map(Particle::position).collect(),
                velocities: world.particles().map(Particle::velocity).collect(),
            });
        }

        log::debug!(
            "Scenario {:?} finished after {} steps ({} pair, {} ground contacts)",
            self.name,
            steps,
            trajectory.pair_contacts,
            trajectory.ground_contacts
        );

        Ok(trajectory)
    }
}

/// Check if a scenario format version can be read by this crate
///
/// Uses semantic versioning rules:
/// - Major version must match
/// - For major version 0.x.y, minor versions must match (breaking changes)
/// - For major version >= 1, the scenario minor version can be less than or equal
/// - Patch version is ignored
pub fn is_format_compatible(scenario_version: &str, supported_version: &str) -> bool {
    let (Ok(scenario_ver), Ok(supported_ver)) =
        (Version::parse(scenario_version), Version::parse(supported_version))
    else {
        return false;
    };

    if scenario_ver.major != supported_ver.major {
        return false;
    }

    if scenario_ver.major != 0 {
        scenario_ver.minor <= supported_ver.minor
    } else {
        scenario_ver.minor == supported_ver.minor
    }
}
