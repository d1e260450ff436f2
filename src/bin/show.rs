use clap::Parser;
use gedview::db::Db;
use gedview::{Config, Individual, Resolver, SqliteStore};
use anyhow::Result;

#[derive(Parser, Debug)]
#[command(name = "show")]
#[command(about = "Print an individual with parents, partners and children")]
struct Args {
    /// Individual id, with or without @ delimiters
    id: String,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn print_text(individual: &Individual) {
    println!("{} ({})", individual.name(), individual.id());
    println!("  Sex:    {}", individual.sex());
    println!("  Born:   {}", individual.birth());
    println!("  Died:   {}", individual.death());

    let label = |person: Option<&Individual>| {
        person
            .map(|p| format!("{} ({})", p.name(), p.id()))
            .unwrap_or_else(|| "Unknown".to_string())
    };
    println!("  Mother: {}", label(individual.mother()));
    println!("  Father: {}", label(individual.father()));

    for family in individual.families() {
        println!("\n  Family {}", family.id());
        println!("    Partner: {}", label(family.partner()));
        for child in family.children() {
            println!("    Child:   {} ({})", child.name(), child.id());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", "warn")
    ).init();

    let args = Args::parse();
    let config = Config::load()?;

    let resolver = Resolver::new(SqliteStore::new(Db::new(config.db_path())));

    match resolver.resolve_individual(&args.id).await? {
        Some(individual) if args.json => println!("{}", serde_json::to_string_pretty(&individual)?),
        Some(individual) => print_text(&individual),
        None => anyhow::bail!("No individual with id {}", args.id),
    }

    Ok(())
}
