//! slot-sim: Batch simulation of the single-line slot
//!
//! Prints a JSON report to stdout or writes it to `--output`.
//! Verbosity is controlled by `RUST_LOG`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use slot_sim::{SimConfig, SlotOverrides, StopOrder, load_slot_config, run_batch};

#[derive(Parser, Debug)]
#[command(author, version, about = "Seeded batch simulator for the slot round engine")]
struct Args {
    /// Slot config (.json, .yaml or .yml); classic strips when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Round cap per session
    #[arg(short, long, default_value = "1000")]
    rounds: u64,

    /// Independent sessions
    #[arg(short, long, default_value = "100")]
    sessions: usize,

    #[arg(long, default_value = "42")]
    seed: u64,

    #[arg(long, value_enum, default_value_t = StopOrder::Fixed)]
    stop_order: StopOrder,

    /// Override the starting balance
    #[arg(long)]
    initial_credit: Option<i64>,

    /// Override the left strip, e.g. "7,B,C,W,G"
    #[arg(long)]
    left: Option<String>,

    /// Override the center strip
    #[arg(long)]
    center: Option<String>,

    /// Override the right strip
    #[arg(long)]
    right: Option<String>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let overrides = SlotOverrides {
        initial_credit: args.initial_credit,
        left: args.left,
        center: args.center,
        right: args.right,
    };
    let slot = load_slot_config(args.config.as_deref(), &overrides)
        .with_context(|| match &args.config {
            Some(path) => format!("preparing slot config from {}", path.display()),
            None => "preparing slot config".to_string(),
        })?;

    let sim = SimConfig::new(args.rounds, args.sessions, args.seed).with_stop_order(args.stop_order);
    let report = run_batch(&slot, &sim)?;
    match &args.output {
        Some(path) => report
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{}", report.to_json()?),
    }

    Ok(())
}
