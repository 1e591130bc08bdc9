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
//! Single Particle Example
//!
//! A 10 kg particle starts at rest and drifts upward under a constant
//! acceleration of 1 m/s², with strong damping (0.6 per second). The
//! example prints the position every half second, the values a renderer
//! would copy onto the particle's mesh each frame.
//!
//! # Running
//!
//! ```bash
//! cargo run --example upward_drift
//! ```

use particle_physics::{Particle, Vec3, World};

const FRAME_TIME: f64 = 1.0 / 60.0;

fn main() {
    println!("Particle Physics - Upward Drift");
    println!("===============================\n");

    let particle = match Particle::new(10.0, Vec3::zero(), Vec3::new(0.0, 1.0, 0.0), 0.6) {
        Ok(p) => p.at(Vec3::new(-0.6, 0.5, -4.0)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let mut world = World::single_particle(particle);

    println!("{:>6}  {:>10}  {:>10}", "t (s)", "y (m)", "vy (m/s)");
    for frame in 0..=300 {
        if frame % 30 == 0 {
            let p = world.first();
            println!(
                "{:>6.2}  {:>10.4}  {:>10.4}",
                world.elapsed(),
                p.position().y(),
                p.velocity().y()
            );
        }
        world.step(FRAME_TIME);
    }

    // Terminal velocity where a = -ln(damping) * v
    let terminal = 1.0 / -(0.6_f64.ln());
    println!("\nTerminal velocity (analytic): {:.4} m/s", terminal);
}
