use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use cmt_stats::config::Config;
use cmt_stats::db::{Database, schema};
use cmt_stats::import::{self, ImportKind};
use cmt_stats::io::excel_write;
use cmt_stats::report::{self, ReportName, ReportTable};
use cmt_stats::{Result, StatsError};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    let db = Database::connect(&config.database_url).await?;
    let outcome = match cli.command {
        Command::Init => schema::recreate(&db).await,
        Command::Import(args) => execute_import(&db, &config, args).await,
        Command::Report(args) => execute_report(&db, &config, args).await,
    };
    db.close().await;
    outcome
}

fn init_logging(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| StatsError::Logging(err.to_string()))
}

async fn execute_import(db: &Database, config: &Config, args: ImportArgs) -> Result<()> {
    let summary = match args.only {
        Some(kind) => import::run_one(db, config, kind.into())
            .await?
            .unwrap_or_default(),
        None => import::import_all(db, config).await?,
    };
    println!("{summary}");
    Ok(())
}

async fn execute_report(db: &Database, config: &Config, args: ReportArgs) -> Result<()> {
    let name = ReportName::from(args.name);
    let tables = report::run(db, name).await?;
    match args.format {
        OutputFormat::Text => print_tables(&tables),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tables)?),
        OutputFormat::Xlsx => {
            std::fs::create_dir_all(&config.output_dir)?;
            let path = config.output_dir.join(format!("{}.xlsx", name.file_stem()));
            excel_write::write_reports(&path, &tables)?;
            info!(path = %path.display(), "report written");
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn print_tables(tables: &[ReportTable]) {
    for (idx, table) in tables.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print!("{table}");
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Import conference-management exports and report on them."
)]
struct Cli {
    /// Increase log verbosity; RUST_LOG takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database URL, overriding the configuration file.
    #[arg(long, env = "CMT_DATABASE_URL", global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Drop and recreate every table.
    Init,
    /// Recreate the schema and load every export, or run one importer.
    Import(ImportArgs),
    /// Run a report against the imported data.
    Report(ReportArgs),
}

#[derive(clap::Args)]
struct ImportArgs {
    /// Run only this importer, without recreating the schema.
    #[arg(long, value_enum)]
    only: Option<ImportKindArg>,
}

#[derive(clap::Args)]
struct ReportArgs {
    /// Report to run.
    #[arg(value_enum)]
    name: ReportArg,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ImportKindArg {
    People,
    Papers,
    Reviews,
    Metareviews,
    Seniormetareviews,
    Mapping,
}

impl From<ImportKindArg> for ImportKind {
    fn from(kind: ImportKindArg) -> Self {
        match kind {
            ImportKindArg::People => ImportKind::People,
            ImportKindArg::Papers => ImportKind::Papers,
            ImportKindArg::Reviews => ImportKind::Reviews,
            ImportKindArg::Metareviews => ImportKind::Metareviews,
            ImportKindArg::Seniormetareviews => ImportKind::Seniormetareviews,
            ImportKindArg::Mapping => ImportKind::Mapping,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ReportArg {
    NeedingRevision,
    Accepted,
    SuggestMapping,
    MismatchedTitles,
    MismatchedAuthors,
    PeopleCounts,
    AcceptanceByTrack,
    RatingVsConfidence,
}

impl From<ReportArg> for ReportName {
    fn from(name: ReportArg) -> Self {
        match name {
            ReportArg::NeedingRevision => ReportName::NeedingRevision,
            ReportArg::Accepted => ReportName::Accepted,
            ReportArg::SuggestMapping => ReportName::SuggestMapping,
            ReportArg::MismatchedTitles => ReportName::MismatchedTitles,
            ReportArg::MismatchedAuthors => ReportName::MismatchedAuthors,
            ReportArg::PeopleCounts => ReportName::PeopleCounts,
            ReportArg::AcceptanceByTrack => ReportName::AcceptanceByTrack,
            ReportArg::RatingVsConfidence => ReportName::RatingVsConfidence,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Xlsx,
}
