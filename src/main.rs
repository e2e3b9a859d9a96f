use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_report::application::calculator::PaymentCalculator;
use payment_report::interfaces::csv::order_reader::OrderReader;
use payment_report::observability;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders CSV file (`name,final_value`). Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(&cli.log_level);

    let source: Box<dyn Read> = match cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut calculator = PaymentCalculator::new(stdout.lock());

    for order_result in OrderReader::new(source).orders() {
        match order_result {
            Ok(order) => calculator.calculate(&order).into_diagnostic()?,
            Err(e) => warn!("Error reading order: {}", e),
        }
    }

    Ok(())
}
