use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use docstatus::{
    classifier,
    config::Config,
    constants::DOCUMENT_CATEGORIES,
    logging,
    report::{self, RenderOptions, ReportFormat, ReportView},
    source::{CountSource, DirectorySource, JsonSource},
};
use std::path::PathBuf;

/// Exit code for `check --strict` when documents are missing
const EXIT_INCOMPLETE: i32 = 2;

#[derive(Parser)]
#[command(name = "docstatus")]
#[command(about = "Check which required tax documents are uploaded for a period")]
#[command(version)]
struct Cli {
    /// Config file (defaults to config/settings.toml, then ~/.config/docstatus/settings.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// JSON file with document counts (`-` for stdin), or a staging directory with --dir
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Field or /json/pointer holding the document map (overrides config)
    #[arg(long)]
    field: Option<String>,

    /// Treat INPUT as a staging directory with one folder per category
    #[arg(long)]
    dir: bool,

    /// Reporting period shown in the report header
    #[arg(long)]
    period: Option<String>,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Use English labels instead of Turkish ones
    #[arg(long)]
    english: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full completeness report for every category
    Check {
        #[command(flatten)]
        input: InputArgs,
        /// Exit with status 2 when documents are missing
        #[arg(long)]
        strict: bool,
    },
    /// List only the missing categories
    Missing {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print only the summary statistics
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },
    /// List the required document categories
    Categories,
}

fn open_source(args: &InputArgs, config: &Config) -> Box<dyn CountSource> {
    if args.dir {
        Box::new(DirectorySource::with_depth(&args.input, config.input.scan_depth))
    } else {
        let field = args.field.clone().or_else(|| config.input.field.clone());
        Box::new(JsonSource::new(&args.input, field))
    }
}

/// Load, classify and print; returns whether every category is present
fn run_report(args: &InputArgs, view: ReportView, config: &Config) -> Result<bool> {
    let source = open_source(args, config);
    tracing::info!(source = %source.describe(), "checking document completeness");

    let input = source.load()?;
    let completeness = classifier::build_report(Some(&input), args.period.as_deref());

    let format = args.format.unwrap_or(config.report.format);
    let options = RenderOptions {
        view,
        localized: config.report.localized_labels && !args.english,
    };
    print!("{}", report::render(&completeness, format, options)?);

    Ok(completeness.complete)
}

fn print_categories() {
    for (i, category) in DOCUMENT_CATEGORIES.iter().enumerate() {
        println!(
            "{}. {:<14} {} / {}",
            i + 1,
            category.key,
            category.localized_label,
            category.label
        );
        println!("   {}", category.description);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit --config must load; default locations fall back to defaults
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load().unwrap_or_default(),
    };
    logging::init(&logging::default_filter(cli.verbose, &config.logging.level));

    match cli.command {
        Commands::Check { input, strict } => {
            let complete = run_report(&input, ReportView::Full, &config)?;
            if strict && !complete {
                std::process::exit(EXIT_INCOMPLETE);
            }
        }
        Commands::Missing { input } => {
            run_report(&input, ReportView::MissingOnly, &config)?;
        }
        Commands::Summary { input } => {
            run_report(&input, ReportView::SummaryOnly, &config)?;
        }
        Commands::Categories => print_categories(),
    }

    Ok(())
}
