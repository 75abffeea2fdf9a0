//! Nozzle discharge system: spawns agent droplets from the aim-driven
//! nozzle toward the spray target.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use firedrill_core::components::{Droplet, Life, Position, Radius, Velocity};
use firedrill_core::tuning::Tuning;

/// Spawn this tick's droplets. Each is aimed from the nozzle origin at the
/// target point, with per-particle angular jitter (spray cone) and a
/// randomized force, then left to gravity.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning, aim: f32) {
    let origin = tuning.nozzle_origin(aim);
    let target = tuning.spray_target(aim);
    let base_angle = (target.y - origin.y).atan2(target.x - origin.x);

    for _ in 0..tuning.droplets_per_tick {
        let angle = base_angle + rng.gen_range(-0.5..0.5) * tuning.spray_jitter;
        let force = tuning.droplet_force_min + rng.gen_range(0.0..tuning.droplet_force_span);

        world.spawn((
            Droplet,
            Position(origin),
            Velocity(Vec2::from_angle(angle) * force),
            Life {
                remaining: 1.0,
                decay_per_tick: tuning.droplet_life_decay,
            },
            Radius {
                size: tuning.droplet_radius_min + rng.gen_range(0.0..tuning.droplet_radius_span),
                rate_per_tick: tuning.droplet_growth_per_tick,
            },
        ));
    }
}
