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
//! Impulse-based contact resolvers
//!
//! Both resolvers compute a new separating velocity from the current one
//! and the restitution coefficient, then add back the velocity that the
//! constant acceleration will contribute during the coming integration
//! step:
//!
//! ```text
//! v_sep' = -v_sep * e + e * (a * dt)
//! ```
//!
//! Without the acceleration term a particle resting on the ground under
//! gravity would sink a little further every frame.
//!
//! The ground resolver scales its impulse by the mass itself while the
//! pairwise resolver divides by the total inverse mass. Both reduce to
//! `v = v_sep'` for a single finite mass.

use crate::components::Vec3;
use crate::particle::Particle;

/// Restitution for particle/ground contacts
pub const GROUND_RESTITUTION: f64 = 0.6;

/// Lowest height a particle is left at after a ground contact
pub const MIN_RESTING_HEIGHT: f64 = -0.01;

/// Restitution for particle/particle contacts (perfectly elastic)
pub const PARTICLE_RESTITUTION: f64 = 1.0;

/// Which kind of correction a resolver applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// No contact this frame
    None,
    /// Particle against the ground plane
    Ground,
    /// Two particles against each other
    Particle,
}

/// One-shot correction for a detected contact
///
/// Produced fresh every frame by a detector and consumed by
/// [`resolve`](Self::resolve).
#[derive(Debug)]
pub enum ContactResolver<'a> {
    /// No contact; resolving is a no-op
    None,
    /// Particle/ground contact
    Ground(GroundContact<'a>),
    /// Particle/particle contact
    Particle(ParticleContact<'a>),
}

impl<'a> ContactResolver<'a> {
    /// Get the kind of contact this resolver corrects
    pub fn kind(&self) -> ContactKind {
        match self {
            ContactResolver::None => ContactKind::None,
            ContactResolver::Ground(_) => ContactKind::Ground,
            ContactResolver::Particle(_) => ContactKind::Particle,
        }
    }

    /// Check if this is the no-op resolver
    pub fn is_none(&self) -> bool {
        matches!(self, ContactResolver::None)
    }

    /// Apply the correction for a frame of length `dt`
    pub fn resolve(self, dt: f64) {
        match self {
            ContactResolver::None => {}
            ContactResolver::Ground(contact) => contact.resolve(dt),
            ContactResolver::Particle(contact) => contact.resolve(dt),
        }
    }
}

/// Bounce of a single particle off the ground plane
#[derive(Debug)]
pub struct GroundContact<'a> {
    particle: &'a mut Particle,
}

impl<'a> GroundContact<'a> {
    /// Create a ground contact for `particle`
    pub fn new(particle: &'a mut Particle) -> Self {
        GroundContact { particle }
    }

    /// Reflect the velocity with [`GROUND_RESTITUTION`] and clamp the height
    /// to [`MIN_RESTING_HEIGHT`]
    ///
    /// Immovable particles are left untouched.
    pub fn resolve(mut self, dt: f64) {
        let mass = self.particle.mass();
        if mass.is_immovable() {
            log::debug!("Skipping ground contact for immovable particle");
            return;
        }

        let velocity = self.particle.velocity();
        let acceleration_caused = self.particle.acceleration() * dt;
        let new_separating_velocity =
            -velocity * GROUND_RESTITUTION + acceleration_caused * GROUND_RESTITUTION;

        let delta_velocity = new_separating_velocity - velocity;
        let impulse = delta_velocity * mass.value();
        self.particle.set_velocity(velocity + impulse / mass.value());

        let mut position = self.particle.position();
        if position.y() <= MIN_RESTING_HEIGHT {
            position.set_y(MIN_RESTING_HEIGHT);
            self.particle.set_position(position);
        }

        log::debug!(
            "Resolved ground contact: velocity {:?} -> {:?}",
            velocity,
            self.particle.velocity()
        );
    }
}

/// Elastic collision between two particles along a contact normal
#[derive(Debug)]
pub struct ParticleContact<'a> {
    first: &'a mut Particle,
    second: &'a mut Particle,
    contact_normal: Vec3,
}

impl<'a> ParticleContact<'a> {
    /// Create a contact between two particles
    ///
    /// `contact_normal` is the unit vector pointing from `first` to `second`.
    pub fn new(first: &'a mut Particle, second: &'a mut Particle, contact_normal: Vec3) -> Self {
        ParticleContact {
            first,
            second,
            contact_normal,
        }
    }

    /// Get the contact normal
    pub fn contact_normal(&self) -> Vec3 {
        self.contact_normal
    }

    /// Relative velocity of the pair projected onto the contact normal
    pub fn separating_velocity(&self) -> f64 {
        (self.first.velocity() - self.second.velocity()).dot(self.contact_normal)
    }

    /// Apply equal and opposite impulses along the contact normal
    ///
    /// Tangential velocity is untouched. If neither particle can move (total
    /// inverse mass is not positive) the contact is skipped.
    pub fn resolve(mut self, dt: f64) {
        let separating_velocity = self.separating_velocity();

        let relative_acceleration = self.first.acceleration() - self.second.acceleration();
        let acceleration_caused = relative_acceleration.dot(self.contact_normal) * dt;
        let new_separating_velocity = -separating_velocity * PARTICLE_RESTITUTION
            + PARTICLE_RESTITUTION * acceleration_caused;

        let delta_velocity = new_separating_velocity - separating_velocity;

        let first_inverse_mass = self.first.mass().inverse();
        let second_inverse_mass = self.second.mass().inverse();
        let total_inverse_mass = first_inverse_mass + second_inverse_mass;
        if total_inverse_mass <= 0.0 {
            log::debug!("Skipping particle contact: total inverse mass {}", total_inverse_mass);
            return;
        }

        let impulse = delta_velocity / total_inverse_mass;
        let impulse_vector = self.contact_normal * impulse;

        let first_velocity = self.first.velocity() + impulse_vector * first_inverse_mass;
        let second_velocity = self.second.velocity() - impulse_vector * second_inverse_mass;
        self.first.set_velocity(first_velocity);
        self.second.set_velocity(second_velocity);

        log::debug!(
            "Resolved particle contact: separating velocity {} -> {}",
            separating_velocity,
            new_separating_velocity
        );
    }
}
