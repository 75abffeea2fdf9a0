//! State shared between the console front end and the training loop thread.

use std::sync::{Arc, Mutex};

use firedrill_core::commands::OperatorCommand;
use firedrill_core::state::TrainingSnapshot;

/// Commands sent from the front end to the training loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the engine.
    Operator(OperatorCommand),
    /// Shut down the training loop thread gracefully.
    Shutdown,
}

/// Latest snapshot for synchronous polling, updated by the loop each tick.
pub type SharedSnapshot = Arc<Mutex<Option<TrainingSnapshot>>>;

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Operator(OperatorCommand::Start))
            .unwrap();
        tx.send(LoopCommand::Operator(OperatorCommand::SetTrigger {
            held: true,
        }))
        .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Operator(OperatorCommand::Start)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Operator(OperatorCommand::SetTrigger { held: true })
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }
}
