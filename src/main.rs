use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use bookbot_math::Operands;

/// Add and subtract two numbers and print both results
///
/// Without arguments, prints `Sum: 3.0, Difference: -1.0`
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Cli {
    /// TOML file with `lhs` and/or `rhs` operands
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,
    /// Left-hand operand, overrides the config file
    #[clap(long, allow_negative_numbers = true)]
    lhs: Option<f64>,
    /// Right-hand operand, overrides the config file
    #[clap(long, allow_negative_numbers = true)]
    rhs: Option<f64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = main_internal(args) {
        eprintln!("Error: {:?}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn main_internal(args: Cli) -> anyhow::Result<()> {
    log::debug!("parsed arguments: {args:#?}");
    let operands = resolve_operands(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    bookbot_math::write_report(&mut out, &operands).context("failed to write report")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Flags take precedence over the config file, which takes precedence over defaults
fn resolve_operands(args: &Cli) -> anyhow::Result<Operands> {
    let base = match &args.config {
        Some(path) => Operands::load(path).context("failed to load operands")?,
        None => {
            log::trace!("no config file given, using default operands");
            Operands::default()
        }
    };
    Ok(base.with_overrides(args.lhs, args.rhs))
}
