//! Training loop thread: runs the engine at 60 Hz and publishes snapshots.
//!
//! The engine is created inside the thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel; each tick's snapshot is
//! stored in shared state for the front end to poll.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use firedrill_core::constants::TICK_RATE;
use firedrill_core::events::FeedbackEvent;
use firedrill_sim::engine::{SimConfig, TrainerEngine};

use crate::state::{LoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the training loop in a new thread.
///
/// Returns the command sender for the front end to use.
pub fn spawn_training_loop(
    config: SimConfig,
    latest_snapshot: SharedSnapshot,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("firedrill-training-loop".into())
        .spawn(move || {
            run_training_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn training loop thread");

    cmd_tx
}

/// The loop body. Runs until a Shutdown command or channel disconnect.
fn run_training_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let mut engine = TrainerEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Operator(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Surface feedback for the console host
        for event in &snapshot.feedback {
            match event {
                FeedbackEvent::PhaseAdvanced { phase } => {
                    tracing::info!(?phase, "phase advanced");
                }
                FeedbackEvent::Extinguished => {
                    tracing::info!("fire extinguished, run complete");
                }
                FeedbackEvent::Haptic { pattern } => {
                    tracing::debug!(?pattern, "haptic pulse");
                }
            }
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use firedrill_core::commands::OperatorCommand;
    use firedrill_core::enums::TrainingPhase;

    use super::*;

    #[test]
    fn test_tick_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let tx = spawn_training_loop(SimConfig::default(), Arc::clone(&latest));

        tx.send(LoopCommand::Operator(OperatorCommand::Start))
            .unwrap();

        // Give the loop a few ticks to publish.
        let mut phase = None;
        for _ in 0..50 {
            std::thread::sleep(Duration::from_millis(20));
            phase = latest.lock().unwrap().as_ref().map(|s| s.phase);
            if phase.is_some() {
                break;
            }
        }
        assert_eq!(phase, Some(TrainingPhase::Inspect));

        tx.send(LoopCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_snapshot_serialization_well_under_tick() {
        let mut engine = TrainerEngine::new(SimConfig::default());
        engine.queue_command(OperatorCommand::Start);
        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "snapshot serialization took {:?}",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
