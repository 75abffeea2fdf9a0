//! Kinematic integration system.
//!
//! Advances every particle by its velocity (scene pixels per tick),
//! applies gravity to droplets, flickers flames, decays life, and
//! applies per-kind radius rates.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use firedrill_core::components::{Droplet, Flame, Life, Position, Radius, Velocity};
use firedrill_core::tuning::Tuning;

/// Run kinematic integration for all live particles.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning) {
    // Flame flicker: jitter horizontal velocity before integration.
    for (_entity, (vel, _flame)) in world.query_mut::<(&mut Velocity, &Flame)>() {
        vel.0.x += rng.gen_range(-0.5..0.5) * tuning.flame_flicker;
    }

    // Droplet gravity, plus a cosmetic floor bounce.
    let floor_y = tuning.floor_y();
    for (_entity, (pos, vel, _droplet)) in
        world.query_mut::<(&Position, &mut Velocity, &Droplet)>()
    {
        vel.0.y += tuning.droplet_gravity;
        if pos.0.y > floor_y && vel.0.y > 0.0 {
            vel.0.y *= -tuning.bounce_damping_y;
            vel.0.x *= tuning.bounce_damping_x;
        }
    }

    // Position, life, and radius advance for every kind.
    for (_entity, (pos, vel, life, radius)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Life, &mut Radius)>()
    {
        pos.0 += vel.0;
        life.remaining -= life.decay_per_tick;
        radius.size = (radius.size + radius.rate_per_tick).max(0.0);
    }
}
