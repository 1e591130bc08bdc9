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
//! Frame stepper for one or two particles
//!
//! Every call to [`World::step`] runs the same fixed sequence:
//!
//! 1. Pair contact: detect and resolve (only with a second particle)
//! 2. Ground contact: detect and resolve, once per particle
//! 3. Integrate every particle
//!
//! Contacts are resolved before integration so resolvers see the
//! velocities left by the previous frame.

use crate::collision::{ContactKind, GroundCollisionDetector, ParticleCollisionDetector};
use crate::components::Vec3;
use crate::particle::Particle;

/// A particle paired with its ground detector
#[derive(Debug, Clone)]
struct Body {
    particle: Particle,
    ground: GroundCollisionDetector,
}

impl Body {
    fn new(particle: Particle) -> Self {
        Body {
            particle,
            ground: GroundCollisionDetector::new(),
        }
    }

    /// Returns true if a ground contact was resolved
    fn resolve_ground(&mut self, dt: f64) -> bool {
        let resolver = self.ground.detect(&mut self.particle);
        let resolved = resolver.kind() == ContactKind::Ground;
        resolver.resolve(dt);
        resolved
    }
}

/// Contacts resolved during one [`World::step`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Particle/particle contacts resolved (0 or 1)
    pub pair_contacts: usize,
    /// Particle/ground contacts resolved (0 to 2)
    pub ground_contacts: usize,
}

impl StepSummary {
    /// Total number of contacts resolved
    pub fn total(&self) -> usize {
        self.pair_contacts + self.ground_contacts
    }
}

/// Simulation world holding one or two particles and their detectors
///
/// The world owns its particles. Callers apply per-frame forces through
/// [`first_mut`](Self::first_mut) / [`second_mut`](Self::second_mut) before
/// stepping and read positions back afterwards.
///
/// # Examples
///
/// ```
/// use particle_physics::{Particle, Vec3, World};
///
/// let ball = Particle::new(1.0, Vec3::zero(), Vec3::new(0.0, -9.8, 0.0), 0.99)
///     .unwrap()
///     .at(Vec3::new(0.0, 1.0, 0.0));
/// let mut world = World::single_particle(ball);
///
/// for _ in 0..60 {
///     world.step(1.0 / 60.0);
/// }
/// assert!(world.first().position().y() < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct World {
    first: Body,
    second: Option<Body>,
    pair_detector: ParticleCollisionDetector,
    elapsed: f64,
    step_count: u64,
}

impl World {
    /// Create a world from one particle and an optional second one
    pub fn new(first: Particle, second: Option<Particle>) -> Self {
        World {
            first: Body::new(first),
            second: second.map(Body::new),
            pair_detector: ParticleCollisionDetector::new(),
            elapsed: 0.0,
            step_count: 0,
        }
    }

    /// Create a world with a single particle (ground contact only)
    pub fn single_particle(particle: Particle) -> Self {
        Self::new(particle, None)
    }

    /// Create a world with two particles
    pub fn pair(first: Particle, second: Particle) -> Self {
        Self::new(first, Some(second))
    }

    /// Get the first particle
    pub fn first(&self) -> &Particle {
        &self.first.particle
    }

    /// Get mutable access to the first particle
    pub fn first_mut(&mut self) -> &mut Particle {
        &mut self.first.particle
    }

    /// Get the second particle, if any
    pub fn second(&self) -> Option<&Particle> {
        self.second.as_ref().map(|body| &body.particle)
    }

    /// Get mutable access to the second particle, if any
    pub fn second_mut(&mut self) -> Option<&mut Particle> {
        self.second.as_mut().map(|body| &mut body.particle)
    }

    /// Iterate over all particles in order
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        std::iter::once(&self.first.particle).chain(self.second())
    }

    /// Number of particles (1 or 2)
    pub fn particle_count(&self) -> usize {
        if self.second.is_some() {
            2
        } else {
            1
        }
    }

    /// Simulated time accumulated over all positive timesteps
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of completed calls to [`step`](Self::step)
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Advance the world by one frame of `dt` seconds
    ///
    /// A non-positive `dt` still runs detection and resolution; only the
    /// integration step degenerates to a no-op.
    pub fn step(&mut self, dt: f64) -> StepSummary {
        let mut summary = StepSummary::default();

        if let Some(second) = self.second.as_mut() {
            let resolver = self.pair_detector.detect(&mut self.first.particle, &mut second.particle);
            if resolver.kind() == ContactKind::Particle {
                summary.pair_contacts += 1;
            }
            resolver.resolve(dt);
        }

        for body in std::iter::once(&mut self.first).chain(self.second.as_mut()) {
            if body.resolve_ground(dt) {
                summary.ground_contacts += 1;
            }
        }

        self.first.particle.integrate(dt);
        if let Some(second) = self.second.as_mut() {
            second.particle.integrate(dt);
        }

        if dt > 0.0 {
            self.elapsed += dt;
        }
        self.step_count += 1;

        log::trace!(
            "Step {} (dt = {}): {} pair, {} ground contacts",
            self.step_count,
            dt,
            summary.pair_contacts,
            summary.ground_contacts
        );

        summary
    }

    /// Sum of the particles' kinetic energies
    pub fn total_kinetic_energy(&self) -> f64 {
        self.particles().map(Particle::kinetic_energy).sum()
    }

    /// Sum of the particles' linear momenta
    pub fn total_momentum(&self) -> Vec3 {
        self.particles()
            .map(Particle::momentum)
            .fold(Vec3::zero(), |acc, p| acc + p)
    }
}
