#[cfg(test)]
mod tests {
    use crate::commands::OperatorCommand;
    use crate::constants::TICK_RATE;
    use crate::enums::TrainingPhase;
    use crate::events::FeedbackEvent;
    use crate::state::TrainingSnapshot;
    use crate::tuning::Tuning;
    use crate::types::{OperatorInput, SimTime};

    /// Verify TrainingPhase round-trips through serde_json.
    #[test]
    fn test_training_phase_serde() {
        let variants = vec![
            TrainingPhase::Intro,
            TrainingPhase::Inspect,
            TrainingPhase::Pull,
            TrainingPhase::Aim,
            TrainingPhase::Squeeze,
            TrainingPhase::Sweep,
            TrainingPhase::Success,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TrainingPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_phase_helpers() {
        assert!(TrainingPhase::Squeeze.is_discharge());
        assert!(TrainingPhase::Sweep.is_discharge());
        for phase in [
            TrainingPhase::Intro,
            TrainingPhase::Inspect,
            TrainingPhase::Pull,
            TrainingPhase::Aim,
            TrainingPhase::Success,
        ] {
            assert!(!phase.is_discharge(), "{phase:?} should not discharge");
        }
        assert!(TrainingPhase::Success.is_terminal());
        assert!(!TrainingPhase::Sweep.is_terminal());
    }

    /// Verify OperatorCommand round-trips through serde (tagged union).
    #[test]
    fn test_operator_command_serde() {
        let commands = vec![
            OperatorCommand::Start,
            OperatorCommand::ConfirmGauge,
            OperatorCommand::PullPin,
            OperatorCommand::ConfirmAim,
            OperatorCommand::SetAim { value: -0.5 },
            OperatorCommand::SetTrigger { held: true },
            OperatorCommand::Reset,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: OperatorCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since OperatorCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_operator_input_clamping() {
        let mut input = OperatorInput::default();
        input.set_aim(3.0);
        assert_eq!(input.aim, 1.0);
        input.set_aim(-7.5);
        assert_eq!(input.aim, -1.0);
        input.set_aim(0.25);
        assert_eq!(input.aim, 0.25);
        input.set_aim(f32::NAN);
        assert_eq!(input.aim, 0.0);
    }

    /// Verify FeedbackEvent round-trips through serde.
    #[test]
    fn test_feedback_event_serde() {
        let events = vec![
            FeedbackEvent::PhaseAdvanced {
                phase: TrainingPhase::Sweep,
            },
            FeedbackEvent::pin_buzz(),
            FeedbackEvent::success_pattern(),
            FeedbackEvent::Extinguished,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: FeedbackEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify TrainingSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = TrainingSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: TrainingSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// Sustained correct operation must always win: the suppression rate
    /// has to dominate regrowth by at least an order of magnitude.
    #[test]
    fn test_default_tuning_suppression_dominates() {
        let tuning = Tuning::default();
        assert!(tuning.suppression_per_tick >= 10.0 * tuning.regrowth_per_tick);
        assert!(tuning.aim_tolerance > 0.0 && tuning.aim_tolerance < 1.0);
        assert!(tuning.hit_radius > 0.0);
    }

    #[test]
    fn test_tuning_geometry() {
        let tuning = Tuning::default();
        let center = tuning.center();
        assert_eq!(center.x, 400.0);
        assert_eq!(center.y, 300.0);

        // Fire core sits above center.
        assert!(tuning.fire_core().y < center.y);

        // The nozzle swings with aim; the target sweeps further.
        let left = tuning.nozzle_origin(-1.0);
        let right = tuning.nozzle_origin(1.0);
        assert!(left.x < right.x);
        assert_eq!(
            tuning.spray_target(1.0).x - tuning.spray_target(0.0).x,
            tuning.sweep_range
        );

        // 1.5s at 60Hz.
        assert_eq!(tuning.dwell_ticks(), (1.5 * TICK_RATE as f32) as u32);
    }
}
