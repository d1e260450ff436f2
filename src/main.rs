use gedview::db::{Db, migrate};
use gedview::http::HttpServer;
use gedview::{Config, Resolver, SqliteStore};
use std::path::Path;
use anyhow::Result;

/// Load config, then initialise logging with RUST_LOG taking precedence over `gedview.log_level`.
fn load_config_and_logger() -> Result<Config> {
    let config = Config::load()?;
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", &config.gedview.log_level)
    ).init();
    Ok(config)
}

async fn open_db(config: &Config) -> Result<Db> {
    let db = Db::new(config.db_path());
    db.migrate(Path::new("migrations")).await?;
    log::info!("Database initialized: {}", db.path().display());
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("verify");

    match command {
        "serve" => run_http_server().await?,
        "verify" => run_schema_verification().await?,
        other => anyhow::bail!("Unknown command '{}'. Usage: gedview [serve|verify]", other),
    }

    Ok(())
}

async fn run_http_server() -> Result<()> {
    let config = load_config_and_logger()?;
    log::info!("Starting gedview v{}", env!("CARGO_PKG_VERSION"));

    let db = open_db(&config).await?;
    let resolver = Resolver::new(SqliteStore::new(db));

    HttpServer::new(resolver).run(&config.http_addr()).await?;

    Ok(())
}

async fn run_schema_verification() -> Result<()> {
    let config = load_config_and_logger()?;
    log::info!("Starting gedview v{}", env!("CARGO_PKG_VERSION"));

    let db = open_db(&config).await?;

    let (missing, individuals, families) = db.with_connection(|conn| {
        let missing = migrate::missing_record_tables(conn)?;
        if !missing.is_empty() {
            return Ok((missing, 0, 0));
        }
        let individuals: i64 = conn.query_row("SELECT COUNT(*) FROM wt_individuals", [], |row| row.get(0))?;
        let families: i64 = conn.query_row("SELECT COUNT(*) FROM wt_families", [], |row| row.get(0))?;
        Ok((missing, individuals, families))
    }).await?;

    if !missing.is_empty() {
        for table in &missing {
            log::error!("Missing table: {}", table);
        }
        anyhow::bail!("Record tables missing: {}", missing.join(", "));
    }

    log::info!("✓ {} individuals, {} families", individuals, families);
    if individuals == 0 {
        log::warn!("No individuals stored yet. Run `import <file.ged>` first.");
    }

    Ok(())
}
