//! churn-synth: synthetic customer churn dataset generator.
//!
//! Usage:
//!   churn-synth generate --count 10000 --seed 42 --output data/churn_customers_dataset.csv
//!   churn-synth predict --contract-months 4 --payment-delays 2 --monthly-usage 12.5 --plan-type BASIC

use anyhow::{Context, Result};
use churn_synth_core::{
    config::GeneratorConfig,
    generator::{self, RunReport},
    predict::{HeuristicPredictor, PredictionInput},
    summary::DatasetSummary,
    types::{DeviceType, PlanType},
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "churn-synth", version, about = "Synthetic customer churn dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the dataset and write it as CSV
    Generate(GenerateArgs),

    /// Score a single customer with the heuristic predictor
    Predict {
        #[arg(long)]
        contract_months: u32,

        #[arg(long)]
        payment_delays: u32,

        #[arg(long)]
        monthly_usage: f64,

        #[arg(long)]
        plan_type: String,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of records
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output CSV path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Locale for names and places (pt_BR, en_US)
    #[arg(short, long)]
    locale: Option<String>,

    /// Upper bound of the signup-date window (YYYY-MM-DD), defaults to today
    #[arg(long)]
    reference_date: Option<chrono::NaiveDate>,

    /// Print the summary as JSON instead of a table
    #[arg(long)]
    summary_json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => run_generate(args),
        Commands::Predict {
            contract_months,
            payment_delays,
            monthly_usage,
            plan_type,
        } => run_predict(PredictionInput {
            contract_months,
            payment_delays,
            monthly_usage,
            plan_type,
        }),
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = build_config(&args)?;
    config.validate().context("invalid configuration")?;
    log::info!(
        "starting generation: records={} locale={} output={}",
        config.record_count,
        config.locale,
        config.output_path.display()
    );

    let report = generator::run(config).context("dataset generation failed")?;
    let summary = DatasetSummary::from_records(&report.run.records);
    log::info!(
        "finished: {} records, churn rate {:.3}, seed {}",
        summary.records, summary.churn_rate, report.run.seed
    );

    if args.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&report, &summary);
    }
    Ok(())
}

fn build_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => {
            log::debug!("no config file given; using built-in defaults");
            GeneratorConfig::default()
        }
    };
    if let Some(count) = args.count {
        config.record_count = count;
    }
    if let Some(seed) = args.seed {
        config.random_seed = Some(seed);
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(locale) = &args.locale {
        config.locale = locale.clone();
    }
    if let Some(date) = args.reference_date {
        config.reference_date = Some(date);
    }
    Ok(config)
}

fn run_predict(input: PredictionInput) -> Result<()> {
    let mut predictor = HeuristicPredictor::new();
    let prediction = predictor.predict(&input)?;
    println!("{}", serde_json::to_string(&prediction)?);
    Ok(())
}

fn print_summary(report: &RunReport, summary: &DatasetSummary) {
    println!("=== DATASET SUMMARY ===");
    println!("  output:           {}", report.output_path.display());
    println!("  seed:             {}", report.run.seed);
    println!("  records:          {}", summary.records);
    println!("  churned:          {}", summary.churned);
    println!("  churn rate:       {:.3}", summary.churn_rate);
    println!("  mean churn prob:  {:.3}", summary.mean_churn_probability);
    println!("  mean usage:       {:.2}", summary.mean_monthly_usage);
    if report.run.state_fallbacks > 0 {
        println!("  state fallbacks:  {}", report.run.state_fallbacks);
    }

    println!();
    println!("=== PLAN MIX ===");
    for plan in PlanType::ALL {
        println!(
            "  {:<9} {:>6}  ({:.1}%)",
            plan.as_str(),
            summary.plan_mix.get(&plan).copied().unwrap_or(0),
            summary.plan_share(plan) * 100.0
        );
    }

    println!();
    println!("=== DEVICE MIX ===");
    for device in DeviceType::ALL {
        println!(
            "  {:<9} {:>6}",
            device.as_str(),
            summary.device_mix.get(&device).copied().unwrap_or(0)
        );
    }
}
