//! Console front end for the extinguisher trainer.
//!
//! Drives the training loop with line commands and answers safety questions
//! through the advisor chat.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};
use std::sync::mpsc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use firedrill_app::state::{LoopCommand, SharedSnapshot};
use firedrill_app::training_loop::spawn_training_loop;
use firedrill_advisor::AdvisorClient;
use firedrill_core::commands::OperatorCommand;
use firedrill_sim::engine::SimConfig;

#[derive(Parser)]
#[command(name = "firedrill", about = "Interactive fire extinguisher trainer")]
struct Args {
    /// Simulation seed; identical seeds replay identical particle fields.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let cmd_tx = spawn_training_loop(
        SimConfig {
            seed: args.seed,
            ..Default::default()
        },
        Arc::clone(&latest_snapshot),
    );

    let advisor = match AdvisorClient::from_env() {
        Ok(client) => Some(Arc::new(client)),
        Err(err) => {
            tracing::warn!(error = %err, "advisor chat disabled");
            None
        }
    };

    println!("FIREDRILL extinguisher trainer. Type 'help' for commands.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if !handle_line(line.trim(), &cmd_tx, &latest_snapshot, advisor.as_ref()) {
            break;
        }
        io::stdout().flush().ok();
    }

    let _ = cmd_tx.send(LoopCommand::Shutdown);
}

/// Dispatch one console line. Returns false when the session should end.
fn handle_line(
    line: &str,
    cmd_tx: &mpsc::Sender<LoopCommand>,
    latest_snapshot: &SharedSnapshot,
    advisor: Option<&Arc<AdvisorClient>>,
) -> bool {
    let mut parts = line.splitn(2, ' ');
    let verb = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    let operator = |cmd: OperatorCommand| {
        let _ = cmd_tx.send(LoopCommand::Operator(cmd));
    };

    match verb {
        "" => {}
        "start" => operator(OperatorCommand::Start),
        "gauge" => operator(OperatorCommand::ConfirmGauge),
        "pin" => operator(OperatorCommand::PullPin),
        "aimed" => operator(OperatorCommand::ConfirmAim),
        "aim" => match rest.parse::<f32>() {
            Ok(value) => operator(OperatorCommand::SetAim { value }),
            Err(_) => println!("usage: aim <-1.0..1.0>"),
        },
        "squeeze" => match rest {
            "on" => operator(OperatorCommand::SetTrigger { held: true }),
            "off" => operator(OperatorCommand::SetTrigger { held: false }),
            _ => println!("usage: squeeze on|off"),
        },
        "reset" => operator(OperatorCommand::Reset),
        "status" => print_status(latest_snapshot),
        "ask" => ask_advisor(rest, advisor),
        "help" => print_help(),
        "quit" | "exit" => return false,
        other => println!("unknown command '{other}'; type 'help'"),
    }
    true
}

fn print_status(latest_snapshot: &SharedSnapshot) {
    let Some(snapshot) = latest_snapshot.lock().ok().and_then(|s| s.clone()) else {
        println!("no snapshot yet");
        return;
    };
    println!(
        "tick {} | phase {:?} | fire {:.1}% | aim {:+.2} | trigger {} | dwell {:.0}% | \
         flames {} droplets {} steam {}",
        snapshot.time.tick,
        snapshot.phase,
        snapshot.fire_health,
        snapshot.operator.aim,
        if snapshot.operator.trigger_held { "held" } else { "released" },
        snapshot.operator.dwell_progress * 100.0,
        snapshot.flames.len(),
        snapshot.droplets.len(),
        snapshot.steam.len(),
    );
}

/// Answer on a worker thread so the console stays responsive.
fn ask_advisor(question: &str, advisor: Option<&Arc<AdvisorClient>>) {
    if question.is_empty() {
        println!("usage: ask <question>");
        return;
    }
    let Some(client) = advisor else {
        println!("advisor unavailable: set FIREDRILL_API_KEY to enable chat");
        return;
    };
    let client = Arc::clone(client);
    let question = question.to_string();
    std::thread::spawn(move || {
        let answer = client.advise(&question);
        println!("advisor: {answer}");
    });
}

fn print_help() {
    println!(
        "commands:\n\
         \x20 start              begin the drill\n\
         \x20 gauge              confirm the pressure gauge reads green\n\
         \x20 pin                pull the safety pin\n\
         \x20 aimed              confirm the nozzle is aimed at the fire base\n\
         \x20 aim <v>            set aim offset, -1.0 (left) to 1.0 (right)\n\
         \x20 squeeze on|off     hold or release the handle\n\
         \x20 status             show the latest snapshot\n\
         \x20 ask <question>     ask the safety advisor\n\
         \x20 reset              restart the drill\n\
         \x20 quit               exit"
    );
}
