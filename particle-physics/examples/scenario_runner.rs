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
//! Scenario Runner Example
//!
//! Loads scenario files (or the built-in presets when no file is given),
//! runs them as a batch, and prints a summary of each run.
//!
//! # Running
//!
//! ```bash
//! # Built-in presets
//! cargo run --example scenario_runner
//!
//! # Scenario files
//! cargo run --example scenario_runner -- scenarios/bouncing_ball.yaml scenarios/pair_with_gravity.yaml
//! ```

use particle_physics::batch::{is_parallel_enabled, run_scenarios};
use particle_physics::Scenario;
use std::time::Instant;

fn main() {
    println!("Particle Physics - Scenario Runner");
    println!("==================================\n");

    let paths: Vec<String> = std::env::args().skip(1).collect();
    let scenarios: Vec<Scenario> = if paths.is_empty() {
        Scenario::presets()
    } else {
        let mut loaded = Vec::new();
        for path in &paths {
            match Scenario::from_path(path) {
                Ok(scenario) => loaded.push(scenario),
                Err(e) => eprintln!("Warning: Skipping {}: {}", path, e),
            }
        }
        loaded
    };

    if scenarios.is_empty() {
        eprintln!("Error: No scenarios to run");
        std::process::exit(1);
    }

    let start = Instant::now();
    let results = run_scenarios(&scenarios);
    let elapsed = start.elapsed();

    for (scenario, result) in scenarios.iter().zip(results) {
        let name = scenario.name.as_deref().unwrap_or("unnamed");
        match result {
            Ok(trajectory) => {
                println!("{}", name);
                println!("  steps:          {}", trajectory.frames.len());
                println!("  pair contacts:  {}", trajectory.pair_contacts);
                println!("  ground contacts: {}", trajectory.ground_contacts);
                if let Some(frame) = trajectory.last() {
                    for (i, position) in frame.positions.iter().enumerate() {
                        println!(
                            "  p{} final:       ({:.4}, {:.4}, {:.4})",
                            i + 1,
                            position.x(),
                            position.y(),
                            position.z()
                        );
                    }
                }
            }
            Err(e) => println!("{}\n  failed: {}", name, e),
        }
    }

    println!(
        "\nRan {} scenario(s) in {:.2?} ({})",
        scenarios.len(),
        elapsed,
        if is_parallel_enabled() { "parallel" } else { "sequential" }
    );
}
