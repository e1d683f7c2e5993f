//! Arena balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 campaigns of 20 battles
//!   cargo run --bin simulate -- -n 100 -b 50   # 100 campaigns of 50 battles
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use quest_arena::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              QUEST ARENA BALANCE SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:            {}", config.num_runs);
    println!("  Battles/Run:     {}", config.battles_per_run);
    println!("  Max Turns:       {}", config.max_turns_per_battle);
    println!("  Heal Below:      {:.0}% hp", config.heal_threshold * 100.0);
    if let Some(seed) = config.seed {
        println!("  Seed:            {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-b" | "--battles" => {
                if i + 1 < args.len() {
                    config.battles_per_run = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--turns" => {
                if i + 1 < args.len() {
                    config.max_turns_per_battle = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "--heal-at" => {
                if i + 1 < args.len() {
                    if let Ok(pct) = args[i + 1].parse::<f64>() {
                        config.heal_threshold = (pct / 100.0).clamp(0.0, 1.0);
                        i += 1;
                    }
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--progression" => {
                config = SimConfig::progression_test();
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Quest Arena Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of campaigns (default: 1000)");
    println!("    -b, --battles <B>   Battles per campaign (default: 20)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --turns <T>     Player turns before the bot flees (default: 100)");
    println!("    --heal-at <PCT>     Drink a potion below PCT% hp (default: 30)");
    println!("    -v, --verbose       Verbose output");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick test (100 campaigns of 10 battles)");
    println!("    --progression       Long campaigns (50 x 200 battles)");
    println!("    -h, --help          Show this help");
    println!();
    println!("Set RUST_LOG=debug to trace every battle action.");
}
