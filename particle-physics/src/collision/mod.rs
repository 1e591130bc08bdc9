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
//! Contact detection and resolution
//!
//! Detectors inspect particle state once per frame and hand back a
//! [`ContactResolver`]. A resolver borrows the particles it will correct and
//! is consumed by a single call to [`ContactResolver::resolve`].
//!
//! # Contacts
//!
//! - **Ground**: a particle at or below the plane `y = 0` bounces with
//!   restitution 0.6 and is clamped to a minimum resting height.
//! - **Particle pair**: two particles closer than [`CONTACT_RADIUS`]
//!   exchange a perfectly elastic impulse along the line joining them.
//!
//! Both detectors are edge-triggered: a contact is resolved once when it
//! begins, and a persisting contact yields [`ContactResolver::None`] until
//! the particles separate again.

mod detection;
mod resolution;

pub use detection::{GroundCollisionDetector, ParticleCollisionDetector, CONTACT_RADIUS};
pub use resolution::{
    ContactKind, ContactResolver, GroundContact, ParticleContact, GROUND_RESTITUTION,
    MIN_RESTING_HEIGHT, PARTICLE_RESTITUTION,
};
