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
//! Error types for the particle physics core
//!
//! Only construction and configuration can fail. Stepping a world never
//! returns an error: invalid timesteps and degenerate mass configurations
//! are absorbed where they occur.

use thiserror::Error;

/// Crate-wide result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building particles, worlds, or scenarios
#[derive(Debug, Error)]
pub enum Error {
    /// Mass was zero, negative, or not finite
    ///
    /// Use [`Mass::immovable`](crate::components::Mass::immovable) for an
    /// explicit infinite-mass body.
    #[error("invalid mass {0}: must be positive and finite")]
    InvalidMass(f64),

    /// Damping was outside the half-open interval (0, 1]
    #[error("invalid damping {0}: must lie in (0, 1]")]
    InvalidDamping(f64),

    /// A vector input contained NaN or infinite components
    #[error("invalid {name}: {value:?} has non-finite components")]
    InvalidVector {
        /// Which input was rejected
        name: &'static str,
        /// The rejected components
        value: [f64; 3],
    },

    /// A scenario description is structurally or numerically invalid
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    /// A scenario was written for an unsupported format version
    #[error("scenario format version {found} is not compatible with supported version {supported}")]
    IncompatibleVersion {
        /// Version declared by the scenario
        found: String,
        /// Version understood by this crate
        supported: &'static str,
    },

    /// Scenario YAML could not be parsed
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Scenario file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
