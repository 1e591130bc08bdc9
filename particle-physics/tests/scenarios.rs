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
//! Scenario files and built-in presets

use particle_physics::batch::run_scenarios;
use particle_physics::{Error, Scenario};
use std::path::PathBuf;

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
}

#[test]
fn test_pair_file_matches_preset() {
    let from_file = Scenario::from_path(scenario_path("pair_with_gravity.yaml")).unwrap();
    assert_eq!(from_file, Scenario::pair_with_gravity());
}

#[test]
fn test_bouncing_ball_file_runs() {
    let scenario = Scenario::from_path(scenario_path("bouncing_ball.yaml")).unwrap();
    let trajectory = scenario.run().unwrap();

    assert_eq!(trajectory.frames.len(), 400);
    assert!(trajectory.ground_contacts >= 3);
    assert_eq!(trajectory.pair_contacts, 0);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = Scenario::from_path(scenario_path("does_not_exist.yaml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_upward_drift_rises() {
    let trajectory = Scenario::upward_drift().run().unwrap();

    let heights: Vec<f64> = trajectory.frames.iter().map(|f| f.positions[0].y()).collect();
    assert!(heights.windows(2).all(|w| w[1] >= w[0]));
    assert!(heights.last().copied().unwrap_or(0.0) > 0.5);
    assert_eq!(trajectory.ground_contacts, 0);
}

#[test]
fn test_pair_without_gravity_collides_once() {
    let trajectory = Scenario::pair_without_gravity().run().unwrap();

    assert_eq!(trajectory.pair_contacts, 1);
    assert_eq!(trajectory.ground_contacts, 0);
}

#[test]
fn test_runs_are_deterministic() {
    let first = run_scenarios(&Scenario::presets());
    let second = run_scenarios(&Scenario::presets());

    for (a, b) in first.into_iter().zip(second) {
        assert_eq!(a.unwrap(), b.unwrap());
    }
}
