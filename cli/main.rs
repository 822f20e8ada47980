#![deny(unused_variables)]
#![deny(dead_code)]
#![deny(unused_imports)]

use bayesian_trap::TrapConfig;
use clap::Parser;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "bayesian-trap",
    version,
    about = "A simulation of the famous Bayesian trap involving a rare disease and an imperfect test kit",
    long_about = "Draws a synthetic population with the given disease base rate, applies a test \
                  with the given false positive and false negative rates, and reports how often \
                  a positive or negative result is actually right.",
    allow_negative_numbers = true
)]
struct Cli {
    /// Number of synthetic individuals to draw
    sample_size: usize,

    /// True prevalence of the disease, between 0 and 1
    base_rate: f64,

    /// Probability that a healthy individual tests positive, between 0 and 1
    false_pos: f64,

    /// Probability that a diseased individual tests negative, between 0 and 1
    false_neg: f64,

    /// Seed for a reproducible run
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> TrapConfig {
        TrapConfig {
            sample_size: self.sample_size,
            base_rate: self.base_rate,
            false_positive_rate: self.false_pos,
            false_negative_rate: self.false_neg,
            seed: self.seed,
        }
    }
}

fn run(config: TrapConfig) -> Result<(), Box<dyn std::error::Error>> {
    log::info!(
        "Simulating {} individuals (base rate {}, false positive {}, false negative {})",
        config.sample_size,
        config.base_rate,
        config.false_positive_rate,
        config.false_negative_rate
    );

    let trap = config.build()?;

    let rates = trap.rates();
    match rates.positive_predictive_value() {
        Some(ppv) => log::info!("Analytic positive diagnosis confidence: {ppv}"),
        None => log::info!("Analytic positive diagnosis confidence: undefined"),
    }
    match rates.negative_predictive_value() {
        Some(npv) => log::info!("Analytic negative diagnosis confidence: {npv}"),
        None => log::info!("Analytic negative diagnosis confidence: undefined"),
    }

    println!("{}", trap.summarize());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Malformed arguments exit here with clap's usage message.
    let cli = Cli::parse();

    if let Err(e) = run(cli.into_config()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
