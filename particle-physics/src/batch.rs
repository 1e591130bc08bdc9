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
//! Running many independent scenarios
//!
//! Each scenario gets its own [`World`](crate::World) and is stepped on a
//! single thread, so every run stays deterministic. With the `parallel`
//! feature the runs are spread across the Rayon thread pool; results are
//! always returned in input order.

use crate::error::Result;
use crate::scenario::{Scenario, Trajectory};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Run every scenario to completion
///
/// A scenario that fails validation yields its error in the matching slot;
/// the other runs are unaffected.
///
/// # Example
///
/// ```
/// use particle_physics::batch::run_scenarios;
/// use particle_physics::Scenario;
///
/// let results = run_scenarios(&Scenario::presets());
/// assert_eq!(results.len(), 3);
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
pub fn run_scenarios(scenarios: &[Scenario]) -> Vec<Result<Trajectory>> {
    log::debug!("Running batch of {} scenarios", scenarios.len());

    #[cfg(feature = "parallel")]
    {
        scenarios.par_iter().map(Scenario::run).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        scenarios.iter().map(Scenario::run).collect()
    }
}

/// Check if batch runs are spread across threads
pub fn is_parallel_enabled() -> bool {
    cfg!(feature = "parallel")
}
