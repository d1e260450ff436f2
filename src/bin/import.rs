use clap::Parser;
use gedview::Config;
use gedview::db::Db;
use gedview::gedcom::RecordKind;
use gedview::import::{ImportStats, discover_gedcom_files, import_file, split_records};
use std::path::{Path, PathBuf};
use std::time::Instant;
use anyhow::{Context, Result};

#[derive(Parser, Debug)]
#[command(name = "import")]
#[command(about = "Import individuals and families from GEDCOM files into the gedview database")]
struct Args {
    /// A .ged file, or a directory searched recursively for .ged files
    path: PathBuf,

    /// Parse and count records without writing to the database
    #[arg(short = 'n', long)]
    dry_run: bool,
}

/// Count what an import would write, without touching the database.
fn dry_run_counts(file: &Path) -> Result<ImportStats> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let records = split_records(&text)
        .with_context(|| format!("Failed to split {}", file.display()))?;

    let individuals = records.iter().filter(|r| r.kind == RecordKind::Individual).count();
    Ok(ImportStats {
        individuals,
        families: records.len() - individuals,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", "info")
    ).init();

    let args = Args::parse();
    let config = Config::load()?;

    let db = Db::new(config.db_path());
    db.migrate(Path::new("migrations")).await?;
    log::info!("Database path: {}", config.db_path().display());

    let files = discover_gedcom_files(&args.path)?;
    if files.is_empty() {
        log::warn!("No GEDCOM files found under {}", args.path.display());
        return Ok(());
    }

    let start = Instant::now();
    let mut total = ImportStats::default();

    for file in &files {
        let stats = if args.dry_run {
            dry_run_counts(file)?
        } else {
            import_file(&db, file).await?
        };
        log::info!(
            "{}: {} individuals, {} families",
            file.display(),
            stats.individuals,
            stats.families
        );
        total += stats;
    }

    println!("Files:       {}", files.len());
    println!("Individuals: {}", total.individuals);
    println!("Families:    {}", total.families);
    println!("Elapsed:     {:?}", start.elapsed());
    if args.dry_run {
        println!("(dry run, nothing written)");
    }

    Ok(())
}
