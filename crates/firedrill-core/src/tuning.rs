//! Tuning parameters for the particle engine and state machine.
//!
//! Every policy knob lives here so difficulty can be adjusted without
//! touching the algorithms. Velocities and rates are expressed per tick
//! at the fixed 60 Hz rate; distances are scene pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;

/// The complete knob set, with a tuned [`Default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // --- Scene ---
    /// Logical scene width in pixels.
    pub scene_width: f32,
    /// Logical scene height in pixels.
    pub scene_height: f32,

    // --- Fire bed ---
    /// Horizontal half-spread of flame spawn positions around center.
    pub fire_bed_spread: f32,
    /// Vertical offset of the fire bed from scene center (negative = up).
    pub fire_bed_offset_y: f32,
    /// Vertical band below the bed line in which flames spawn.
    pub fire_bed_depth: f32,

    // --- Flames ---
    /// Health-scaled flame spawn count per tick: floor(health/100 * rate).
    pub flame_spawn_rate: f32,
    /// Flames spawned per tick regardless of health (while health > 0).
    pub flame_spawn_base: u32,
    /// Full span of random horizontal spawn velocity.
    pub flame_vx_spread: f32,
    /// Minimum upward spawn speed.
    pub flame_rise_min: f32,
    /// Random extra upward spawn speed.
    pub flame_rise_span: f32,
    /// Minimum spawn radius.
    pub flame_radius_min: f32,
    /// Random extra spawn radius.
    pub flame_radius_span: f32,
    /// Radius shrink per tick.
    pub flame_shrink_per_tick: f32,
    /// Life fraction lost per tick.
    pub flame_life_decay: f32,
    /// Full span of per-tick horizontal velocity jitter (flicker).
    pub flame_flicker: f32,
    /// Base hue in degrees (red end of the flame gradient).
    pub flame_hue_min: f32,
    /// Random extra hue toward yellow.
    pub flame_hue_span: f32,

    // --- Nozzle & droplets ---
    /// Nozzle origin relative to scene center.
    pub nozzle_offset: Vec2,
    /// Horizontal nozzle shift per unit of aim (the nozzle swings with aim).
    pub nozzle_aim_shift: f32,
    /// Vertical offset of the spray target from scene center. Matches the
    /// fire core height so a centered aim points straight at it.
    pub target_offset_y: f32,
    /// Horizontal reach of the spray target per unit of aim.
    pub sweep_range: f32,
    /// Droplets spawned per tick while discharging.
    pub droplets_per_tick: u32,
    /// Minimum spawn speed along the aim direction.
    pub droplet_force_min: f32,
    /// Random extra spawn speed.
    pub droplet_force_span: f32,
    /// Full span of random angular jitter on the spray direction (radians).
    pub spray_jitter: f32,
    /// Downward acceleration accumulated on droplet velocity per tick.
    pub droplet_gravity: f32,
    /// Minimum spawn radius.
    pub droplet_radius_min: f32,
    /// Random extra spawn radius.
    pub droplet_radius_span: f32,
    /// Radius growth per tick.
    pub droplet_growth_per_tick: f32,
    /// Life fraction lost per tick.
    pub droplet_life_decay: f32,
    /// Floor line offset below scene center; droplets bounce here.
    pub floor_offset_y: f32,
    /// Vertical velocity retained (and inverted) on a floor bounce.
    pub bounce_damping_y: f32,
    /// Horizontal velocity retained on a floor bounce.
    pub bounce_damping_x: f32,

    // --- Steam ---
    /// Probability that a suppression hit spawns a steam puff.
    pub steam_probability: f32,
    /// Full span of random horizontal spawn velocity.
    pub steam_vx_spread: f32,
    /// Minimum upward spawn speed.
    pub steam_rise_min: f32,
    /// Random extra upward spawn speed.
    pub steam_rise_span: f32,
    /// Minimum spawn radius.
    pub steam_radius_min: f32,
    /// Random extra spawn radius.
    pub steam_radius_span: f32,
    /// Radius growth per tick.
    pub steam_growth_per_tick: f32,
    /// Life fraction lost per tick.
    pub steam_life_decay: f32,

    // --- Suppression ---
    /// Vertical offset of the fire core hit-test point from scene center.
    pub fire_core_offset_y: f32,
    /// Droplets within this distance of the fire core register a hit.
    /// Tight enough that off-center spray flies past without contact.
    pub hit_radius: f32,
    /// Droplets at or below this life fraction no longer register hits.
    pub life_epsilon: f32,
    /// Half-width of the aim band around center within which hits credit.
    pub aim_tolerance: f32,
    /// Fire health removed per tick with at least one credited hit.
    /// Must dominate `regrowth_per_tick` by at least an order of magnitude.
    pub suppression_per_tick: f32,
    /// Fire health recovered per tick while the trigger is released.
    pub regrowth_per_tick: f32,

    // --- State machine ---
    /// Continuous trigger hold required for the Squeeze -> Sweep transition.
    pub dwell_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scene_width: 800.0,
            scene_height: 600.0,

            fire_bed_spread: 60.0,
            fire_bed_offset_y: -100.0,
            fire_bed_depth: 50.0,

            flame_spawn_rate: 15.0,
            flame_spawn_base: 3,
            flame_vx_spread: 2.0,
            flame_rise_min: 3.0,
            flame_rise_span: 7.0,
            flame_radius_min: 15.0,
            flame_radius_span: 35.0,
            flame_shrink_per_tick: 0.4,
            flame_life_decay: 0.02,
            flame_flicker: 0.2,
            flame_hue_min: 10.0,
            flame_hue_span: 40.0,

            nozzle_offset: Vec2::new(-70.0, -40.0),
            nozzle_aim_shift: 10.0,
            target_offset_y: -60.0,
            sweep_range: 250.0,
            droplets_per_tick: 12,
            droplet_force_min: 22.0,
            droplet_force_span: 5.0,
            spray_jitter: 0.06,
            droplet_gravity: 0.2,
            droplet_radius_min: 6.0,
            droplet_radius_span: 10.0,
            droplet_growth_per_tick: 0.3,
            droplet_life_decay: 0.015,
            floor_offset_y: 100.0,
            bounce_damping_y: 0.5,
            bounce_damping_x: 0.8,

            steam_probability: 0.3,
            steam_vx_spread: 3.0,
            steam_rise_min: 2.0,
            steam_rise_span: 4.0,
            steam_radius_min: 20.0,
            steam_radius_span: 40.0,
            steam_growth_per_tick: 1.0,
            steam_life_decay: 0.02,

            fire_core_offset_y: -60.0,
            hit_radius: 12.0,
            life_epsilon: 0.1,
            aim_tolerance: 0.35,
            suppression_per_tick: 0.8,
            regrowth_per_tick: 0.05,

            dwell_secs: 1.5,
        }
    }
}

impl Tuning {
    /// Scene center point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.scene_width / 2.0, self.scene_height / 2.0)
    }

    /// The fixed fire core point droplets are hit-tested against.
    pub fn fire_core(&self) -> Vec2 {
        self.center() + Vec2::new(0.0, self.fire_core_offset_y)
    }

    /// Nozzle origin for the given aim offset.
    pub fn nozzle_origin(&self, aim: f32) -> Vec2 {
        self.center() + self.nozzle_offset + Vec2::new(aim * self.nozzle_aim_shift, 0.0)
    }

    /// Spray target point for the given aim offset.
    pub fn spray_target(&self, aim: f32) -> Vec2 {
        self.center() + Vec2::new(aim * self.sweep_range, self.target_offset_y)
    }

    /// Y coordinate of the floor line.
    pub fn floor_y(&self) -> f32 {
        self.center().y + self.floor_offset_y
    }

    /// Dwell window in whole ticks.
    pub fn dwell_ticks(&self) -> u32 {
        (self.dwell_secs * TICK_RATE as f32).round() as u32
    }
}
