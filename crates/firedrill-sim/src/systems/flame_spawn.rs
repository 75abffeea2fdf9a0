//! Flame emission system.
//!
//! Spawn volume is a read of fire health: the blaze visibly shrinks as it
//! is suppressed. Flames never write health back.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use firedrill_core::components::{Flame, Life, Position, Radius, Velocity};
use firedrill_core::tuning::Tuning;

/// Spawn this tick's flames at the fire bed.
/// Count is `floor(health/100 * rate) + base`.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning, fire_health: f32) {
    let scaled = ((fire_health / 100.0) * tuning.flame_spawn_rate).floor() as u32;
    let count = scaled + tuning.flame_spawn_base;
    let center = tuning.center();

    for _ in 0..count {
        let x = center.x + rng.gen_range(-tuning.fire_bed_spread..tuning.fire_bed_spread);
        let y = center.y + tuning.fire_bed_offset_y + rng.gen_range(0.0..tuning.fire_bed_depth);
        let vx = rng.gen_range(-0.5..0.5) * tuning.flame_vx_spread;
        let vy = -(tuning.flame_rise_min + rng.gen_range(0.0..tuning.flame_rise_span));

        world.spawn((
            Flame {
                hue: tuning.flame_hue_min + rng.gen_range(0.0..tuning.flame_hue_span),
            },
            Position(Vec2::new(x, y)),
            Velocity(Vec2::new(vx, vy)),
            Life {
                remaining: 1.0,
                decay_per_tick: tuning.flame_life_decay,
            },
            Radius {
                size: tuning.flame_radius_min + rng.gen_range(0.0..tuning.flame_radius_span),
                rate_per_tick: -tuning.flame_shrink_per_tick,
            },
        ));
    }
}
