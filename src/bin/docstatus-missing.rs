use anyhow::Result;
use clap::Parser;
use docstatus::{
    classifier,
    config::Config,
    logging,
    report::text,
    source::{CountSource, JsonSource},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docstatus-missing")]
#[command(about = "Print the missing documents card for a period")]
#[command(version)]
struct Cli {
    /// JSON file with document counts, `-` for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: PathBuf,

    /// Field or /json/pointer holding the document map (overrides config)
    #[arg(long)]
    field: Option<String>,

    /// Reporting period shown in the header
    #[arg(long)]
    period: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();
    logging::init(&logging::default_filter(cli.verbose, &config.logging.level));

    let field = cli.field.or_else(|| config.input.field.clone());
    let input = JsonSource::new(&cli.input, field).load()?;

    let completeness = classifier::build_report(Some(&input), cli.period.as_deref());
    print!("{}", text::render_missing(&completeness, config.report.localized_labels));

    Ok(())
}
