//! Suppression hit-test system: the sole causal link between operator
//! input and fire health.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use firedrill_core::components::{Droplet, Life, Position, Radius, Steam, Velocity};
use firedrill_core::tuning::Tuning;

/// Hit-test every live droplet against the fire core. A droplet close
/// enough with meaningful remaining life registers a hit, may boil off a
/// steam puff, and is consumed on contact (it does not rebound).
///
/// Returns the number of hits registered this tick. Whether those hits
/// actually decrement health is the engine's call (trigger + aim gates).
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    fire_health: f32,
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    if fire_health <= 0.0 {
        return 0;
    }

    let core = tuning.fire_core();
    let steam_chance = f64::from(tuning.steam_probability.clamp(0.0, 1.0));
    let mut hits = 0u32;
    let mut steam_points: Vec<Vec2> = Vec::new();

    despawn_buffer.clear();
    for (entity, (pos, life, _droplet)) in world.query_mut::<(&Position, &Life, &Droplet)>() {
        if life.remaining <= tuning.life_epsilon {
            continue;
        }
        if pos.0.distance(core) < tuning.hit_radius {
            hits += 1;
            despawn_buffer.push(entity);
            if rng.gen_bool(steam_chance) {
                steam_points.push(pos.0);
            }
        }
    }

    // Consume hit droplets before spawning steam at the collision points.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for point in steam_points {
        spawn_steam(world, rng, tuning, point);
    }

    hits
}

/// Spawn a cosmetic steam puff at a collision point.
fn spawn_steam(world: &mut World, rng: &mut ChaCha8Rng, tuning: &Tuning, at: Vec2) {
    let vx = rng.gen_range(-0.5..0.5) * tuning.steam_vx_spread;
    let vy = -(tuning.steam_rise_min + rng.gen_range(0.0..tuning.steam_rise_span));

    world.spawn((
        Steam,
        Position(at),
        Velocity(Vec2::new(vx, vy)),
        Life {
            remaining: 1.0,
            decay_per_tick: tuning.steam_life_decay,
        },
        Radius {
            size: tuning.steam_radius_min + rng.gen_range(0.0..tuning.steam_radius_span),
            rate_per_tick: tuning.steam_growth_per_tick,
        },
    ));
}
