//! Battle balance simulator CLI.
//!
//! Run Monte Carlo simulations of the reel battle.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 1000 battles
//!   cargo run --bin simulate -- -n 100            # 100 battles
//!   cargo run --bin simulate -- --seed 42         # Reproducible run
//!   cargo run --bin simulate -- --spin-chance 1.0 # Lever-only player

use reelbrawl::build_info;
use reelbrawl::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              REEL BRAWL BATTLE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!(
        "reelbrawl {} (built {})",
        env!("CARGO_PKG_VERSION"),
        build_info::BUILD_DATE
    );
    println!();
    println!("Configuration:");
    println!("  Battles:        {}", config.num_battles);
    println!("  Spin chance:    {:.2}", config.spin_chance);
    println!("  Max turns:      {}", config.max_turns_per_battle);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "battle_report_{}.json",
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
            "-n" | "--battles" => {
                if i + 1 < args.len() {
                    config.num_battles = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--spin-chance" => {
                if i + 1 < args.len() {
                    config.spin_chance = args[i + 1].parse().unwrap_or(0.75);
                    i += 1;
                }
            }
            "--max-turns" => {
                if i + 1 < args.len() {
                    config.max_turns_per_battle = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {} // handled after the run
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --battles <N>       Number of battles to run (default 1000)");
    println!("      --seed <SEED>       Random seed for reproducible runs");
    println!("      --spin-chance <P>   Probability of lever pull vs basic attack (default 0.75)");
    println!("      --max-turns <N>     Turn cap per battle (default 1000)");
    println!("      --json              Also write a timestamped JSON report");
    println!("  -v, --verbose           Per-battle output");
    println!("  -q, --quiet             Summary only");
    println!("  -h, --help              Show this help");
}
