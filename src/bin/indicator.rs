//! Command-line wrapper around the scoring indicators.
//!
//! Reads the trial to score from the first line of stdin and the history of
//! scored trials from the second, then writes exactly one JSON record to
//! stdout: `{"score": <number>}` or `{"score": null, "error": "<message>"}`.
//! Logs go to stderr.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use trial_indicators::validation::{decode_reference_point, schemas};
use trial_indicators::{BestIndicator, HypervolumeIndicator, Indicator, IndicatorKind, ScoreRecord};

/// Score an optimization trial against the history of scored trials.
#[derive(Parser, Debug)]
#[command(name = "indicator")]
#[command(version)]
#[command(about = "Score optimization trials", long_about = None)]
struct Cli {
    /// Log level for messages written to stderr
    #[arg(long, global = true, value_enum, default_value = "info")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Best feasible objective value so far (single objective)
    Best {
        /// Score reported while no feasible trial exists
        #[arg(short = 'm', long, env = "BEST_FLOAT_MAX")]
        float_max: Option<f64>,
    },

    /// Hypervolume of the feasible Pareto front (multiple objectives)
    Hypervolume {
        /// Reference point as a JSON array, e.g. "[2, 4]"; derived from the
        /// front when omitted
        #[arg(short, long, env = "HV_REF_POINT")]
        ref_point: Option<String>,
    },

    /// Print the JSON Schema documents accepted on stdin
    Schema {
        /// Indicator whose input schemas to print
        #[arg(value_enum)]
        indicator: SchemaKind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaKind {
    Best,
    Hypervolume,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

fn build_indicator(command: &Commands) -> trial_indicators::Result<Option<Indicator>> {
    let indicator = match command {
        Commands::Best { float_max } => {
            let mut best = BestIndicator::new();
            if let Some(worst) = float_max {
                best = best.with_worst_value(*worst)?;
            }
            tracing::info!(worst_value = best.worst_value(), "best indicator configured");
            Indicator::Best(best)
        }
        Commands::Hypervolume { ref_point } => {
            tracing::info!(ref_point = ?ref_point, "hypervolume indicator configured");
            let mut hv = HypervolumeIndicator::new();
            let reference = ref_point
                .as_deref()
                .map(decode_reference_point)
                .transpose()?
                .flatten();
            if let Some(reference) = reference {
                hv = hv.with_reference_point(reference)?;
            }
            Indicator::Hypervolume(hv)
        }
        Commands::Schema { .. } => return Ok(None),
    };
    Ok(Some(indicator))
}

fn print_schemas(kind: SchemaKind, out: &mut impl Write) -> Result<()> {
    let kind = match kind {
        SchemaKind::Best => IndicatorKind::Best,
        SchemaKind::Hypervolume => IndicatorKind::Hypervolume,
    };
    let (candidate, history) = schemas::for_kind(kind);
    writeln!(out, "{candidate}")?;
    writeln!(out, "{history}")?;
    if kind == IndicatorKind::Hypervolume {
        writeln!(out, "{}", schemas::REFERENCE_POINT)?;
    }
    Ok(())
}

fn read_line(input: &mut impl BufRead, what: &str) -> Result<String> {
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .with_context(|| format!("failed to read the {what} from stdin"))?;
    anyhow::ensure!(n > 0, "missing the {what} on stdin");
    Ok(line)
}

fn read_input(input: &mut impl BufRead) -> Result<(String, String)> {
    let candidate = read_line(input, "trial to score")?;
    let history = read_line(input, "scored trials")?;
    Ok((candidate, history))
}

fn run(indicator: &Indicator, input: &mut impl BufRead) -> ScoreRecord {
    match read_input(input) {
        Ok((candidate, history)) => indicator.evaluate_json(&candidate, &history),
        Err(e) => {
            tracing::error!(error = %e, "failed to read input");
            ScoreRecord::failure(e.to_string())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            cli.log_level.as_directive(),
        ))
        .with_target(false)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Commands::Schema { indicator } = cli.command {
        return print_schemas(indicator, &mut out);
    }

    let record = match build_indicator(&cli.command) {
        Ok(Some(indicator)) => run(&indicator, &mut io::stdin().lock()),
        Ok(None) => return Ok(()),
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            ScoreRecord::failure(e.to_string())
        }
    };

    tracing::info!("outputting the result");
    write!(out, "{}", record.to_json())?;
    out.flush()?;
    Ok(())
}
