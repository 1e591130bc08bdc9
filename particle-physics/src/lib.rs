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
//! # Particle Physics
//!
//! A small particle physics core: point-mass integration, contact detection
//! against a ground plane and between two particles, and impulse-based
//! contact resolution, driven one frame at a time by a [`World`].
//!
//! ## Features
//!
//! - **Particles**: explicit Euler integration with frame-rate independent damping
//! - **Force Accumulation**: forces added before a step apply once and are cleared
//! - **Edge-Triggered Contacts**: each contact is resolved once when it begins
//! - **Scenarios**: YAML scenario files and built-in presets
//! - **Parallelization**: optional Rayon integration for running independent scenarios
//!
//! ## Example
//!
//! ```rust
//! use particle_physics::{Particle, Vec3, World};
//!
//! let heavy = Particle::new(100.0, Vec3::zero(), Vec3::zero(), 0.85)
//!     .unwrap()
//!     .at(Vec3::new(0.6, 0.5, -4.0));
//! let mut light = Particle::new(0.5, Vec3::zero(), Vec3::zero(), 0.85)
//!     .unwrap()
//!     .at(Vec3::new(0.3, 0.5, -4.0));
//! light.add_force(Vec3::new(20.0, 0.08, 3.8));
//!
//! let mut world = World::pair(heavy, light);
//! for _ in 0..120 {
//!     world.step(1.0 / 60.0);
//! }
//! let position = world.first().position();
//! assert!(position.is_valid());
//! ```

#![warn(missing_docs)]

/// Error types
pub mod error;

/// Vector and mass value types
pub mod components;

/// Point-mass particle and integrator
pub mod particle;

/// Contact detection and resolution
pub mod collision;

/// Frame stepper
pub mod world;

/// Scenario configuration
pub mod scenario;

/// Running independent scenarios
pub mod batch;

pub use components::{Mass, Vec3};
pub use error::{Error, Result};
pub use particle::Particle;
pub use scenario::{Scenario, Trajectory};
pub use world::{StepSummary, World};
