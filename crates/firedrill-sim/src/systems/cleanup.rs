//! Cleanup system: retires particles whose remaining life has run out.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use firedrill_core::components::Life;

/// Despawn every particle (any kind) whose life fraction is <= 0.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, life) in world.query_mut::<&Life>() {
        if life.remaining <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
