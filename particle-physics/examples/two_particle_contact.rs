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
//! Two Particle Contact Example
//!
//! Replays the two-particle scenes: a heavy and a light particle pushed
//! towards each other, optionally under gravity, with ground bounces and an
//! elastic pair contact.
//!
//! # Running
//!
//! ```bash
//! # Without gravity
//! cargo run --example two_particle_contact
//!
//! # With gravity and a custom duration
//! cargo run --example two_particle_contact -- --gravity --duration 3
//!
//! # Custom frame time
//! cargo run --example two_particle_contact -- --timestep 0.01
//! ```

use particle_physics::{Scenario, Vec3};

struct ExampleConfig {
    gravity: bool,
    timestep: f64,
    duration: f64,
}

impl Default for ExampleConfig {
    fn default() -> Self {
        ExampleConfig {
            gravity: false,
            timestep: 1.0 / 60.0,
            duration: 5.0,
        }
    }
}

fn parse_args() -> ExampleConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = ExampleConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--gravity" => {
                config.gravity = true;
                i += 1;
            }
            "--timestep" => {
                match args.get(i + 1).map(|v| v.parse::<f64>()) {
                    Some(Ok(value)) => config.timestep = value,
                    _ => eprintln!("Warning: Invalid or missing value for --timestep, using default"),
                }
                i += 2;
            }
            "--duration" => {
                match args.get(i + 1).map(|v| v.parse::<f64>()) {
                    Some(Ok(value)) => config.duration = value,
                    _ => eprintln!("Warning: Invalid or missing value for --duration, using default"),
                }
                i += 2;
            }
            other => {
                eprintln!("Warning: Unknown argument '{}'", other);
                i += 1;
            }
        }
    }

    config
}

fn format_vec(v: Vec3) -> String {
    format!("({:>8.4}, {:>8.4}, {:>8.4})", v.x(), v.y(), v.z())
}

fn main() {
    println!("Particle Physics - Two Particle Contact");
    println!("=======================================\n");

    let config = parse_args();
    let mut scenario = if config.gravity {
        Scenario::pair_with_gravity()
    } else {
        Scenario::pair_without_gravity()
    };
    scenario.timestep = config.timestep;
    scenario.duration = config.duration;

    let mut world = match scenario.build_world() {
        Ok(world) => world,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Scenario:  {}", scenario.name.as_deref().unwrap_or("unnamed"));
    println!("Timestep:  {:.4} s", scenario.timestep);
    println!("Duration:  {:.2} s\n", scenario.duration);

    let report_every = ((0.25 / scenario.timestep).round() as usize).max(1);
    for step in 0..scenario.step_count() {
        let summary = world.step(scenario.timestep);

        if summary.pair_contacts > 0 {
            println!("t = {:>6.3} s  pair contact", world.elapsed());
        }
        if summary.ground_contacts > 0 {
            println!("t = {:>6.3} s  {} ground contact(s)", world.elapsed(), summary.ground_contacts);
        }

        if step % report_every == 0 {
            for (i, particle) in world.particles().enumerate() {
                println!(
                    "t = {:>6.3} s  p{} at {}",
                    world.elapsed(),
                    i + 1,
                    format_vec(particle.position())
                );
            }
        }
    }

    println!("\nFinal kinetic energy: {:.6} J", world.total_kinetic_energy());
    println!("Final momentum:       {}", format_vec(world.total_momentum()));
}
