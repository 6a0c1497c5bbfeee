//! Trace-driven cache simulator CLI.
//!
//! This binary replays a valgrind-style memory trace against a modeled
//! set-associative cache and prints the final hit/miss/eviction totals.
//! The flag surface mirrors the reference tool: `-s`, `-E`, `-b`, `-t`,
//! and `-v` for per-access classifications.

use clap::Parser;
use std::error::Error;
use std::process;

use cachesim_core::trace::TraceFile;
use cachesim_core::{CacheGeometry, Operation, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Replay a valgrind-style memory trace against a set-associative cache \
with LRU replacement and report hit/miss/eviction totals.\n\nExamples:\n  \
csim -s 4 -E 1 -b 4 -t traces/yi.trace\n  csim -v -s 8 -E 2 -b 4 -t traces/yi.trace"
)]
struct Cli {
    /// Number of set index bits.
    #[arg(short = 's')]
    set_bits: u32,

    /// Number of lines per set (associativity).
    #[arg(short = 'E')]
    lines_per_set: usize,

    /// Number of block offset bits.
    #[arg(short = 'b')]
    block_bits: u32,

    /// Trace file to replay.
    #[arg(short = 't')]
    trace: String,

    /// Print the classification of every access.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Emit the final totals as JSON instead of the summary line.
    #[arg(long)]
    json: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let geometry = CacheGeometry::new(cli.set_bits, cli.lines_per_set, cli.block_bits);
    let mut sim = Simulator::new(&geometry);

    let trace = TraceFile::open(&cli.trace).unwrap_or_else(|e| fatal(&e));
    for record in trace {
        let record = record.unwrap_or_else(|e| fatal(&e));
        let Some(outcome) = sim.step(record) else {
            continue;
        };
        if cli.verbose {
            let extra = if record.op == Operation::Modify {
                " hit"
            } else {
                ""
            };
            println!(
                "{} {:x},{} {}{}",
                record.op,
                record.addr,
                record.size,
                outcome.label(),
                extra
            );
        }
    }

    if cli.json {
        let totals = serde_json::to_string(sim.totals()).unwrap_or_else(|e| fatal(&e));
        println!("{totals}");
    } else {
        println!("{}", sim.totals());
    }
}

/// Routes `RUST_LOG`-filtered core diagnostics to stderr.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Reports an unrecoverable error and exits; no partial results are printed.
fn fatal(err: &dyn Error) -> ! {
    eprintln!("\n[!] FATAL: {err}");
    process::exit(1);
}
