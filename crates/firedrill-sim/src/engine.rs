//! Simulation engine for the trainer.
//!
//! `TrainerEngine` owns the hecs particle world, the progress state
//! machine, and the fire-health scalar. It processes operator commands at
//! tick boundaries, runs all systems, and produces `TrainingSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use firedrill_core::commands::OperatorCommand;
use firedrill_core::enums::TrainingPhase;
use firedrill_core::events::FeedbackEvent;
use firedrill_core::state::{OperatorView, TrainingSnapshot};
use firedrill_core::tuning::Tuning;
use firedrill_core::types::{OperatorInput, SimTime};

use crate::systems;

/// Fire health at the start of a run.
const FULL_HEALTH: f32 = 100.0;

/// Ticks between recoil haptic pulses while discharging.
const RECOIL_PULSE_INTERVAL: u64 = 6;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Policy knobs.
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// Hook invoked when the fire is fully suppressed, at most once per run.
type ExtinguishedHook = Box<dyn FnMut() + Send>;

/// The simulation engine. Owns all particle and training state.
pub struct TrainerEngine {
    world: World,
    time: SimTime,
    phase: TrainingPhase,
    tuning: Tuning,
    rng: ChaCha8Rng,
    input: OperatorInput,
    fire_health: f32,
    /// Consecutive held ticks toward the Squeeze -> Sweep transition.
    dwell_ticks_held: u32,
    command_queue: VecDeque<OperatorCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    feedback: Vec<FeedbackEvent>,
    extinguished_hook: Option<ExtinguishedHook>,
}

impl TrainerEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: TrainingPhase::default(),
            tuning: config.tuning,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: OperatorInput::default(),
            fire_health: FULL_HEALTH,
            dwell_ticks_held: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            feedback: Vec::new(),
            extinguished_hook: None,
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Register the hook invoked on the extinguish tick.
    /// Fires at most once per run; `Reset` re-arms it.
    pub fn set_extinguished_hook(&mut self, hook: impl FnMut() + Send + 'static) {
        self.extinguished_hook = Some(Box::new(hook));
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> TrainingSnapshot {
        self.process_commands();
        self.update_dwell();
        self.run_systems();
        self.time.advance();

        let feedback = std::mem::take(&mut self.feedback);
        let operator = OperatorView {
            aim: self.input.aim,
            trigger_held: self.input.trigger_held,
            dwell_progress: self.dwell_progress(),
        };
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.fire_health,
            operator,
            feedback,
        )
    }

    /// Get the current training phase.
    pub fn phase(&self) -> TrainingPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current fire health in [0, 100].
    pub fn fire_health(&self) -> f32 {
        self.fire_health
    }

    /// Get the current (clamped) operator input.
    pub fn input(&self) -> OperatorInput {
        self.input
    }

    /// Get a read-only reference to the particle world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single operator command. Discrete procedure actions are
    /// ignored unless the state machine is in the matching phase.
    fn handle_command(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::Start => {
                if self.phase == TrainingPhase::Intro {
                    self.feedback.push(FeedbackEvent::action_buzz());
                    self.advance_to(TrainingPhase::Inspect);
                }
            }
            OperatorCommand::ConfirmGauge => {
                if self.phase == TrainingPhase::Inspect {
                    self.feedback.push(FeedbackEvent::action_buzz());
                    self.advance_to(TrainingPhase::Pull);
                }
            }
            OperatorCommand::PullPin => {
                if self.phase == TrainingPhase::Pull {
                    self.feedback.push(FeedbackEvent::pin_buzz());
                    self.advance_to(TrainingPhase::Aim);
                }
            }
            OperatorCommand::ConfirmAim => {
                if self.phase == TrainingPhase::Aim {
                    self.feedback.push(FeedbackEvent::action_buzz());
                    self.advance_to(TrainingPhase::Squeeze);
                }
            }
            OperatorCommand::SetAim { value } => {
                self.input.set_aim(value);
            }
            OperatorCommand::SetTrigger { held } => {
                self.input.trigger_held = held;
            }
            OperatorCommand::Reset => {
                self.reset_run();
            }
        }
    }

    /// Move the state machine to a new phase and record the transition.
    fn advance_to(&mut self, phase: TrainingPhase) {
        self.phase = phase;
        self.feedback.push(FeedbackEvent::PhaseAdvanced { phase });
    }

    /// Atomically restore the initial run state: all particles cleared,
    /// full fire health, inputs zeroed, dwell timer cancelled.
    fn reset_run(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.phase = TrainingPhase::Intro;
        self.input = OperatorInput::default();
        self.fire_health = FULL_HEALTH;
        self.dwell_ticks_held = 0;
    }

    /// Squeeze -> Sweep is the only time-based transition: the trigger must
    /// stay held for the whole dwell window; a release restarts it from zero.
    fn update_dwell(&mut self) {
        if self.phase != TrainingPhase::Squeeze {
            self.dwell_ticks_held = 0;
            return;
        }
        if self.input.trigger_held {
            self.dwell_ticks_held += 1;
            if self.dwell_ticks_held >= self.tuning.dwell_ticks() {
                self.advance_to(TrainingPhase::Sweep);
            }
        } else {
            self.dwell_ticks_held = 0;
        }
    }

    /// Dwell window progress in [0, 1], for the host's progress indicator.
    fn dwell_progress(&self) -> f32 {
        if self.phase != TrainingPhase::Squeeze {
            return 0.0;
        }
        let window = self.tuning.dwell_ticks().max(1) as f32;
        (self.dwell_ticks_held as f32 / window).min(1.0)
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Flame spawn; population is a read of fire health.
        if !self.phase.is_terminal() && self.fire_health > 0.0 {
            systems::flame_spawn::run(&mut self.world, &mut self.rng, &self.tuning, self.fire_health);
        }

        // 2. Droplet spawn; the trigger only discharges in Squeeze/Sweep.
        if self.input.trigger_held && self.phase.is_discharge() {
            systems::nozzle::run(&mut self.world, &mut self.rng, &self.tuning, self.input.aim);
            if self.time.tick % RECOIL_PULSE_INTERVAL == 0 {
                self.feedback.push(FeedbackEvent::recoil_pulse());
            }
        }

        // 3. Kinematic integration.
        systems::movement::run(&mut self.world, &mut self.rng, &self.tuning);

        // 4. Suppression hit-test (consumes hit droplets, spawns steam).
        let hits = systems::suppression::run(
            &mut self.world,
            &mut self.rng,
            &self.tuning,
            self.fire_health,
            &mut self.despawn_buffer,
        );

        // 5. Health update.
        self.update_health(hits);

        // 6. Garbage collection of expired particles.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        // 7. Terminal check.
        self.check_extinguished();
    }

    /// Apply the per-tick suppression/regrowth rule and clamp.
    ///
    /// Hits only credit while the trigger is held and the aim is within
    /// tolerance of center; spraying off-target spawns and flies droplets
    /// but never decrements health. The fire recovers only while the
    /// trigger is released.
    fn update_health(&mut self, hits: u32) {
        if self.phase.is_terminal() {
            // Frozen after success: no regrowth, no further decay.
            return;
        }

        let on_target = self.input.aim.abs() < self.tuning.aim_tolerance;
        if hits > 0 && self.input.trigger_held && on_target {
            self.fire_health -= self.tuning.suppression_per_tick;
        } else if self.fire_health > 0.0
            && self.fire_health < FULL_HEALTH
            && !self.input.trigger_held
        {
            self.fire_health += self.tuning.regrowth_per_tick;
        }
        self.fire_health = self.fire_health.clamp(0.0, FULL_HEALTH);
    }

    /// Edge-triggered terminal transition: acts only on the 0-crossing
    /// tick and never re-fires once in Success.
    fn check_extinguished(&mut self) {
        if self.fire_health <= 0.0 && !self.phase.is_terminal() {
            self.advance_to(TrainingPhase::Success);
            self.feedback.push(FeedbackEvent::Extinguished);
            self.feedback.push(FeedbackEvent::success_pattern());
            if let Some(hook) = self.extinguished_hook.as_mut() {
                hook();
            }
        }
    }
}
