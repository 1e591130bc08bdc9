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
//! Point-mass particle with explicit Euler integration
//!
//! # Algorithm
//!
//! One call to [`Particle::integrate`] advances the particle by `dt`:
//!
//! ```text
//! x(t + dt) = x(t) + v(t)*dt
//! a_eff     = a + F_acc / m
//! v(t + dt) = (v(t) + a_eff*dt) * damping^dt
//! F_acc     = 0
//! ```
//!
//! Position uses the velocity from *before* the update. Damping is applied
//! as `damping^dt`, so the decay per simulated second is the same at any
//! frame rate.
//!
//! The accumulated force is cleared after every integration step. Forces
//! added with [`Particle::add_force`] only count for the next step.

use crate::components::{Mass, Vec3};
use crate::error::{Error, Result};

/// Damping used by [`Particle::with_mass`]
pub const DEFAULT_DAMPING: f64 = 0.85;

/// A point mass with position, velocity, constant acceleration, and
/// per-step force accumulator
///
/// # Examples
///
/// ```
/// use particle_physics::{Particle, Vec3};
///
/// let mut particle = Particle::new(
///     10.0,
///     Vec3::zero(),
///     Vec3::new(0.0, 1.0, 0.0),
///     0.6,
/// ).unwrap();
///
/// particle.integrate(1.0);
/// assert!((particle.velocity().y() - 0.6).abs() < 1e-12);
/// assert_eq!(particle.position(), Vec3::zero());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    mass: Mass,
    damping: f64,
    accumulated_force: Vec3,
}

impl Particle {
    /// Create a particle at the origin
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidMass`] if `mass` is not positive and finite
    /// - [`Error::InvalidDamping`] if `damping` is outside (0, 1]
    /// - [`Error::InvalidVector`] if `velocity` or `acceleration` is not finite
    pub fn new(mass: f64, velocity: Vec3, acceleration: Vec3, damping: f64) -> Result<Self> {
        let mass = Mass::try_new(mass).ok_or(Error::InvalidMass(mass))?;
        Self::with_mass(mass)
            .checked_velocity(velocity)?
            .checked_acceleration(acceleration)?
            .checked_damping(damping)
    }

    /// Create a resting particle at the origin with no acceleration and
    /// [`DEFAULT_DAMPING`]
    ///
    /// Accepts [`Mass::immovable`] for a body that never moves.
    pub fn with_mass(mass: Mass) -> Self {
        Particle {
            position: Vec3::zero(),
            velocity: Vec3::zero(),
            acceleration: Vec3::zero(),
            mass,
            damping: DEFAULT_DAMPING,
            accumulated_force: Vec3::zero(),
        }
    }

    fn checked_velocity(mut self, velocity: Vec3) -> Result<Self> {
        if !velocity.is_valid() {
            return Err(Error::InvalidVector {
                name: "velocity",
                value: velocity.as_array(),
            });
        }
        self.velocity = velocity;
        Ok(self)
    }

    fn checked_acceleration(mut self, acceleration: Vec3) -> Result<Self> {
        if !acceleration.is_valid() {
            return Err(Error::InvalidVector {
                name: "acceleration",
                value: acceleration.as_array(),
            });
        }
        self.acceleration = acceleration;
        Ok(self)
    }

    fn checked_damping(mut self, damping: f64) -> Result<Self> {
        if !(damping > 0.0 && damping <= 1.0) {
            return Err(Error::InvalidDamping(damping));
        }
        self.damping = damping;
        Ok(self)
    }

    /// Builder-style position setter
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Get the world-space position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Overwrite the world-space position
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Get the velocity
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Overwrite the velocity
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Get the constant external acceleration
    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Overwrite the constant external acceleration
    pub fn set_acceleration(&mut self, acceleration: Vec3) {
        self.acceleration = acceleration;
    }

    /// Get the mass
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Get the damping factor
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Get the force accumulated since the last integration step
    pub fn accumulated_force(&self) -> Vec3 {
        self.accumulated_force
    }

    /// Add a force for the next integration step
    ///
    /// Repeated calls sum. The total is applied once by the next call to
    /// [`integrate`](Self::integrate) and then cleared.
    pub fn add_force(&mut self, force: Vec3) {
        self.accumulated_force += force;
    }

    /// Discard any accumulated force without integrating
    pub fn clear_accumulated_force(&mut self) {
        self.accumulated_force = Vec3::zero();
    }

    /// Advance the particle by `dt` seconds
    ///
    /// Does nothing if `dt` is not positive (including NaN): position,
    /// velocity, and accumulated force are left untouched. Immovable
    /// particles keep their state but still drop the accumulated force.
    pub fn integrate(&mut self, dt: f64) {
        if !(dt > 0.0) {
            log::trace!("Skipping integration for non-positive timestep {}", dt);
            return;
        }

        if self.mass.is_immovable() {
            self.clear_accumulated_force();
            return;
        }

        self.position += self.velocity * dt;

        let effective_acceleration = self.acceleration + self.accumulated_force * self.mass.inverse();
        self.velocity += effective_acceleration * dt;
        self.velocity *= self.damping.powf(dt);

        self.clear_accumulated_force();

        if !self.position.is_valid() || !self.velocity.is_valid() {
            log::warn!(
                "Particle state became non-finite after integration: position {:?}, velocity {:?}",
                self.position,
                self.velocity
            );
        }
    }

    /// Kinetic energy, 0.5 * m * |v|^2
    ///
    /// Returns 0.0 for immovable particles.
    pub fn kinetic_energy(&self) -> f64 {
        if self.mass.is_immovable() {
            return 0.0;
        }
        0.5 * self.mass.value() * self.velocity.magnitude_squared()
    }

    /// Linear momentum, m * v
    pub fn momentum(&self) -> Vec3 {
        self.velocity * self.mass.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).magnitude() < EPSILON
    }

    #[test]
    fn test_new_rejects_invalid_mass() {
        for mass in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Particle::new(mass, Vec3::zero(), Vec3::zero(), 0.9);
            assert!(matches!(result, Err(Error::InvalidMass(_))), "mass {} accepted", mass);
        }
    }

    #[test]
    fn test_new_rejects_invalid_damping() {
        for damping in [0.0, -0.5, 1.5, f64::NAN] {
            let result = Particle::new(1.0, Vec3::zero(), Vec3::zero(), damping);
            assert!(matches!(result, Err(Error::InvalidDamping(_))), "damping {} accepted", damping);
        }
        assert!(Particle::new(1.0, Vec3::zero(), Vec3::zero(), 1.0).is_ok());
    }

    #[test]
    fn test_new_rejects_non_finite_vectors() {
        let bad = Vec3::new(f64::NAN, 0.0, 0.0);
        assert!(matches!(
            Particle::new(1.0, bad, Vec3::zero(), 0.9),
            Err(Error::InvalidVector { name: "velocity", .. })
        ));
        assert!(matches!(
            Particle::new(1.0, Vec3::zero(), bad, 0.9),
            Err(Error::InvalidVector { name: "acceleration", .. })
        ));
    }

    #[test]
    fn test_with_mass_defaults() {
        let particle = Particle::with_mass(Mass::new(3.0));
        assert_eq!(particle.position(), Vec3::zero());
        assert_eq!(particle.velocity(), Vec3::zero());
        assert_eq!(particle.acceleration(), Vec3::zero());
        assert_eq!(particle.damping(), DEFAULT_DAMPING);
        assert_eq!(particle.mass().value(), 3.0);
    }

    #[test]
    fn test_add_force_sums() {
        let mut particle = Particle::with_mass(Mass::new(1.0));
        particle.add_force(Vec3::new(1.0, 0.0, 0.0));
        particle.add_force(Vec3::new(0.0, 2.0, -1.0));
        assert_eq!(particle.accumulated_force(), Vec3::new(1.0, 2.0, -1.0));
    }

    #[test]
    fn test_integrate_upward_acceleration() {
        let mut particle = Particle::new(10.0, Vec3::zero(), Vec3::new(0.0, 1.0, 0.0), 0.6).unwrap();
        particle.add_force(Vec3::zero());
        particle.integrate(1.0);

        assert!(approx_eq(particle.velocity(), Vec3::new(0.0, 0.6, 0.0)));
        assert_eq!(particle.position(), Vec3::zero());
    }

    #[test]
    fn test_integrate_uses_pre_update_velocity_for_position() {
        let mut particle = Particle::new(1.0, Vec3::new(2.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0), 1.0)
            .unwrap()
            .at(Vec3::new(1.0, 0.0, 0.0));
        particle.integrate(0.5);

        // x = 1 + 2*0.5, v = 2 + 10*0.5
        assert!(approx_eq(particle.position(), Vec3::new(2.0, 0.0, 0.0)));
        assert!(approx_eq(particle.velocity(), Vec3::new(7.0, 0.0, 0.0)));
    }

    #[test]
    fn test_integrate_applies_force_then_clears() {
        let mut particle = Particle::new(2.0, Vec3::zero(), Vec3::zero(), 1.0).unwrap();
        particle.add_force(Vec3::new(4.0, 0.0, 0.0));
        particle.integrate(1.0);

        assert!(approx_eq(particle.velocity(), Vec3::new(2.0, 0.0, 0.0)));
        assert_eq!(particle.accumulated_force(), Vec3::zero());

        // No force re-applied on the next step
        particle.integrate(1.0);
        assert!(approx_eq(particle.velocity(), Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_damping_is_frame_rate_independent() {
        let mut one_step = Particle::new(1.0, Vec3::new(1.0, 0.0, 0.0), Vec3::zero(), 0.5).unwrap();
        let mut many_steps = one_step.clone();

        one_step.integrate(1.0);
        for _ in 0..4 {
            many_steps.integrate(0.25);
        }

        assert!((one_step.velocity().x() - 0.5).abs() < EPSILON);
        assert!((many_steps.velocity().x() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_integrate_ignores_non_positive_timestep() {
        let mut particle = Particle::new(1.0, Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, -9.8, 0.0), 0.9)
            .unwrap()
            .at(Vec3::new(1.0, 2.0, 3.0));
        particle.add_force(Vec3::new(5.0, 0.0, 0.0));
        let before = particle.clone();

        for dt in [0.0, -0.1, f64::NAN] {
            particle.integrate(dt);
            assert_eq!(particle, before);
        }
    }

    #[test]
    fn test_immovable_particle_does_not_move() {
        let mut particle = Particle::with_mass(Mass::immovable()).at(Vec3::new(0.0, 1.0, 0.0));
        particle.set_acceleration(Vec3::new(0.0, -9.8, 0.0));
        particle.add_force(Vec3::new(100.0, 0.0, 0.0));
        particle.integrate(0.1);

        assert_eq!(particle.position(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(particle.velocity(), Vec3::zero());
        assert_eq!(particle.accumulated_force(), Vec3::zero());
        assert_eq!(particle.kinetic_energy(), 0.0);
    }

    #[test]
    fn test_energy_and_momentum() {
        let particle = Particle::new(2.0, Vec3::new(3.0, 4.0, 0.0), Vec3::zero(), 1.0).unwrap();
        assert!((particle.kinetic_energy() - 25.0).abs() < EPSILON);
        assert!(approx_eq(particle.momentum(), Vec3::new(6.0, 8.0, 0.0)));
    }
}
