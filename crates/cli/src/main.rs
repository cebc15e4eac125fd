//! Accelerator simulator CLI.
//!
//! This binary drives the simulator without writing any test code. It performs:
//! 1. **Scenario run:** Open, configure and run inferences against a simulated device, with
//!    buffers from a simulated DMA pool; prints a JSON report.
//! 2. **Pool stress:** Hammer one buffer pool from several threads and check its accounting.
//! 3. **HEF fixture:** Write the synthetic HEF blob to disk for use by other tools.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use npusim_core::common::Operation;
use npusim_core::config::Config;
use npusim_core::fixtures::{self, HefHeader};
use npusim_core::pool::BufferPool;
use npusim_core::sim::{Scenario, loader, run_pool_stress};

#[derive(Parser, Debug)]
#[command(
    name = "npusim",
    author,
    version,
    about = "Neural accelerator and DMA buffer pool simulator",
    long_about = "Exercise accelerator driver logic against a simulated device.\n\nExamples:\n  npusim run --iterations 100\n  npusim run --config scenario.json --fail-on infer\n  npusim pool --size 4096 --count 4 --threads 8\n  npusim hef --out model.hef"
)]
struct Cli {
    /// Log device and pool transitions at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an inference scenario and print its report.
    Run {
        /// JSON scenario configuration (defaults apply to missing fields).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// HEF file passed to configure (defaults to the synthetic fixture).
        #[arg(long)]
        hef: Option<PathBuf>,

        /// Override the number of inference iterations.
        #[arg(short, long)]
        iterations: Option<u64>,

        /// Force an operation to fail (repeatable).
        #[arg(long, value_enum)]
        fail_on: Vec<FailOn>,
    },

    /// Stress a buffer pool from several threads.
    Pool {
        /// Buffer size in bytes.
        #[arg(long, default_value_t = 4096)]
        size: usize,

        /// Number of buffers.
        #[arg(long, default_value_t = 4)]
        count: usize,

        /// Worker threads.
        #[arg(long, default_value_t = 8)]
        threads: usize,

        /// Acquire attempts per thread.
        #[arg(long, default_value_t = 1000)]
        rounds: usize,
    },

    /// Write the synthetic HEF fixture to a file.
    Hef {
        /// Output path.
        #[arg(short, long)]
        out: PathBuf,
    },
}

/// Operations accepted by `--fail-on`.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum FailOn {
    /// Fail `open`.
    Open,
    /// Fail `configure`.
    Configure,
    /// Fail `infer`.
    Infer,
}

impl From<FailOn> for Operation {
    fn from(value: FailOn) -> Self {
        match value {
            FailOn::Open => Self::Open,
            FailOn::Configure => Self::Configure,
            FailOn::Infer => Self::Infer,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            hef,
            iterations,
            fail_on,
        } => cmd_run(config, hef, iterations, &fail_on),
        Commands::Pool {
            size,
            count,
            threads,
            rounds,
        } => cmd_pool(size, count, threads, rounds),
        Commands::Hef { out } => cmd_hef(&out),
    }
}

/// Installs a stderr subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints `value` as pretty JSON, exiting with code 1 if it cannot be serialized.
fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(&format!("could not serialize report: {e}")),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("[!] {message}");
    process::exit(1);
}

/// Runs one scenario: loads config and HEF, applies overrides, prints the report.
///
/// Exits with code 1 if the configuration is invalid or the device cannot be opened or
/// configured.
fn cmd_run(
    config_path: Option<PathBuf>,
    hef_path: Option<PathBuf>,
    iterations: Option<u64>,
    fail_on: &[FailOn],
) {
    let mut config = match config_path {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .unwrap_or_else(|e| fail(&format!("could not read '{}': {e}", path.display())));
            Config::from_json(&text).unwrap_or_else(|e| fail(&e.to_string()))
        }
        None => Config::default(),
    };
    if let Some(iterations) = iterations {
        config.workload.iterations = iterations;
    }
    for op in fail_on.iter().copied().map(Operation::from) {
        match op {
            Operation::Open => config.faults.fail_on_open = true,
            Operation::Configure => config.faults.fail_on_configure = true,
            Operation::Infer => config.faults.fail_on_infer = true,
        }
    }

    let mut scenario = Scenario::new(&config);
    if let Some(path) = hef_path {
        let hef = loader::load_hef(&path).unwrap_or_else(|e| fail(&e.to_string()));
        scenario = scenario.with_hef(hef);
    }

    match scenario.run() {
        Ok(report) => {
            print_json(&report);
            // Summary goes to stderr so stdout stays a single JSON document.
            if config.general.print_summary {
                report.print();
            }
        }
        Err(e) => fail(&format!("scenario aborted: {e}")),
    }
}

/// Stresses a fresh pool and prints the report; exits with code 1 if buffers went missing.
fn cmd_pool(size: usize, count: usize, threads: usize, rounds: usize) {
    let pool = BufferPool::new(size, count);
    let report = run_pool_stress(&pool, threads, rounds)
        .unwrap_or_else(|e| fail(&format!("stress failed: {e}")));
    print_json(&report);
    if report.final_available != count {
        fail(&format!(
            "pool leaked buffers: {} of {count} available",
            report.final_available
        ));
    }
}

/// Writes the synthetic HEF and echoes its header.
fn cmd_hef(out: &Path) {
    let hef = fixtures::fake_hef();
    if let Err(e) = fs::write(out, &hef) {
        fail(&format!("could not write '{}': {e}", out.display()));
    }
    match HefHeader::parse(&hef) {
        Some(header) => println!(
            "wrote {} bytes to {}: magic={:#010x} version={} payload_size={}",
            hef.len(),
            out.display(),
            header.magic,
            header.version,
            header.payload_size
        ),
        None => fail("fixture produced an invalid HEF header"),
    }
}
