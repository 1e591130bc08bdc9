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
//! Edge-triggered contact detectors
//!
//! Each detector keeps a `detected` flag between frames. A contact produces
//! a real resolver only on the frame it begins; while the contact persists
//! the detector returns [`ContactResolver::None`], and once the particles
//! separate the flag is cleared so the next contact is resolved again.

use super::resolution::{ContactResolver, GroundContact, ParticleContact};
use crate::particle::Particle;

/// Combined contact radius for a particle pair
pub const CONTACT_RADIUS: f64 = 0.1;

/// Detects a single particle touching the ground plane `y = 0`
///
/// # Examples
///
/// ```
/// use particle_physics::{Particle, Vec3};
/// use particle_physics::collision::{ContactKind, GroundCollisionDetector};
///
/// let mut particle = Particle::new(1.0, Vec3::zero(), Vec3::zero(), 0.9)
///     .unwrap()
///     .at(Vec3::new(0.0, -0.5, 0.0));
/// let mut detector = GroundCollisionDetector::new();
///
/// assert_eq!(detector.detect(&mut particle).kind(), ContactKind::Ground);
/// assert_eq!(detector.detect(&mut particle).kind(), ContactKind::None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroundCollisionDetector {
    detected: bool,
}

impl GroundCollisionDetector {
    /// Create a detector with no active contact
    pub fn new() -> Self {
        GroundCollisionDetector { detected: false }
    }

    /// Check if a ground contact is currently active
    pub fn is_detected(&self) -> bool {
        self.detected
    }

    /// Forget any active contact
    pub fn reset(&mut self) {
        self.detected = false;
    }

    /// Check `particle` against the ground plane
    ///
    /// Returns a [`GroundContact`] only when the particle is at or below
    /// `y = 0` and no contact was active on the previous query.
    pub fn detect<'a>(&mut self, particle: &'a mut Particle) -> ContactResolver<'a> {
        if !(particle.position().y() <= 0.0) {
            self.detected = false;
            return ContactResolver::None;
        }

        if self.detected {
            return ContactResolver::None;
        }

        self.detected = true;
        log::debug!("Ground contact began at {:?}", particle.position());
        ContactResolver::Ground(GroundContact::new(particle))
    }
}

/// Detects two particles within [`CONTACT_RADIUS`] of each other
#[derive(Debug, Clone, Default)]
pub struct ParticleCollisionDetector {
    detected: bool,
}

impl ParticleCollisionDetector {
    /// Create a detector with no active contact
    pub fn new() -> Self {
        ParticleCollisionDetector { detected: false }
    }

    /// Check if a pair contact is currently active
    pub fn is_detected(&self) -> bool {
        self.detected
    }

    /// Forget any active contact
    pub fn reset(&mut self) {
        self.detected = false;
    }

    /// Check the pair for a sphere-sphere contact
    ///
    /// Returns a [`ParticleContact`] with the unit normal from `first` to
    /// `second` when the distance is in `(0, CONTACT_RADIUS]` and no contact
    /// was active on the previous query.
    ///
    /// Coincident particles (distance 0) have no usable normal and are
    /// reported as not in contact, so a fully overlapping pair never gets
    /// pushed apart.
    pub fn detect<'a>(
        &mut self,
        first: &'a mut Particle,
        second: &'a mut Particle,
    ) -> ContactResolver<'a> {
        let midline = second.position() - first.position();
        let distance = midline.magnitude();

        if !(distance > 0.0) || distance > CONTACT_RADIUS {
            self.detected = false;
            return ContactResolver::None;
        }

        if self.detected {
            return ContactResolver::None;
        }

        let contact_normal = midline / distance;
        self.detected = true;
        log::debug!(
            "Particle contact began at distance {} with normal {:?}",
            distance,
            contact_normal
        );
        ContactResolver::Particle(ParticleContact::new(first, second, contact_normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::ContactKind;
    use crate::components::Vec3;

    fn particle_at(position: Vec3) -> Particle {
        Particle::new(1.0, Vec3::zero(), Vec3::zero(), 0.9)
            .unwrap()
            .at(position)
    }

    #[test]
    fn test_ground_detector_above_ground() {
        let mut p = particle_at(Vec3::new(0.0, 0.5, 0.0));
        let mut detector = GroundCollisionDetector::new();

        assert!(detector.detect(&mut p).is_none());
        assert!(!detector.is_detected());
    }

    #[test]
    fn test_ground_detector_ignores_nan_height() {
        let mut p = particle_at(Vec3::new(0.0, f64::NAN, 0.0));
        let mut detector = GroundCollisionDetector::new();

        assert!(detector.detect(&mut p).is_none());
        assert!(!detector.is_detected());
    }

    #[test]
    fn test_ground_detector_touching_plane_counts() {
        let mut p = particle_at(Vec3::zero());
        let mut detector = GroundCollisionDetector::new();

        assert_eq!(detector.detect(&mut p).kind(), ContactKind::Ground);
        assert!(detector.is_detected());
    }

    #[test]
    fn test_ground_detector_is_edge_triggered() {
        let mut p = particle_at(Vec3::new(0.0, -0.01, 0.0));
        let mut detector = GroundCollisionDetector::new();

        assert_eq!(detector.detect(&mut p).kind(), ContactKind::Ground);
        for _ in 0..10 {
            assert_eq!(detector.detect(&mut p).kind(), ContactKind::None);
            assert!(detector.is_detected());
        }
    }

    #[test]
    fn test_ground_detector_rearms_after_leaving_ground() {
        let mut p = particle_at(Vec3::new(0.0, -0.2, 0.0));
        let mut detector = GroundCollisionDetector::new();
        assert_eq!(detector.detect(&mut p).kind(), ContactKind::Ground);

        p.set_position(Vec3::new(0.0, 0.3, 0.0));
        assert!(detector.detect(&mut p).is_none());
        assert!(!detector.is_detected());

        p.set_position(Vec3::new(0.0, -0.1, 0.0));
        assert_eq!(detector.detect(&mut p).kind(), ContactKind::Ground);
    }

    #[test]
    fn test_ground_detector_reset() {
        let mut p = particle_at(Vec3::new(0.0, -0.2, 0.0));
        let mut detector = GroundCollisionDetector::new();
        detector.detect(&mut p);
        detector.reset();

        assert_eq!(detector.detect(&mut p).kind(), ContactKind::Ground);
    }

    #[test]
    fn test_particle_detector_contact_normal() {
        let mut a = particle_at(Vec3::new(0.0, 0.5, 0.0));
        let mut b = particle_at(Vec3::new(0.03, 0.54, 0.0));
        let mut detector = ParticleCollisionDetector::new();

        match detector.detect(&mut a, &mut b) {
            ContactResolver::Particle(contact) => {
                let n = contact.contact_normal();
                assert!((n - Vec3::new(0.6, 0.8, 0.0)).magnitude() < 1e-9);
            }
            other => panic!("expected particle contact, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_particle_detector_is_edge_triggered() {
        let mut a = particle_at(Vec3::zero());
        let mut b = particle_at(Vec3::new(0.05, 0.0, 0.0));
        let mut detector = ParticleCollisionDetector::new();

        assert_eq!(detector.detect(&mut a, &mut b).kind(), ContactKind::Particle);
        assert_eq!(detector.detect(&mut a, &mut b).kind(), ContactKind::None);
        assert!(detector.is_detected());
    }

    #[test]
    fn test_particle_detector_radius_is_inclusive() {
        let mut a = particle_at(Vec3::zero());
        let mut b = particle_at(Vec3::new(CONTACT_RADIUS, 0.0, 0.0));
        let mut detector = ParticleCollisionDetector::new();

        assert_eq!(detector.detect(&mut a, &mut b).kind(), ContactKind::Particle);
    }

    #[test]
    fn test_particle_detector_out_of_range_clears_flag() {
        let mut a = particle_at(Vec3::zero());
        let mut b = particle_at(Vec3::new(0.05, 0.0, 0.0));
        let mut detector = ParticleCollisionDetector::new();
        detector.detect(&mut a, &mut b);

        b.set_position(Vec3::new(0.5, 0.0, 0.0));
        assert!(detector.detect(&mut a, &mut b).is_none());
        assert!(!detector.is_detected());

        b.set_position(Vec3::new(0.05, 0.0, 0.0));
        assert_eq!(detector.detect(&mut a, &mut b).kind(), ContactKind::Particle);
    }

    #[test]
    fn test_particle_detector_coincident_particles_never_collide() {
        let mut a = particle_at(Vec3::new(1.0, 1.0, 1.0));
        let mut b = particle_at(Vec3::new(1.0, 1.0, 1.0));
        let mut detector = ParticleCollisionDetector::new();

        for _ in 0..3 {
            assert!(detector.detect(&mut a, &mut b).is_none());
            assert!(!detector.is_detected());
        }
    }
}
