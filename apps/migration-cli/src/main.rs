use clap::Parser;
use migration::{migrate, MigrationCommand};
use wedding_backend::config::db::{db_url, sanitize_db_url, StoreConfig};
use wedding_backend::connect_store;

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Wedding remote store schema and seed tool")]
struct Args {
    /// up | down | fresh | reset | refresh | status
    #[arg(value_parser = parse_command)]
    command: MigrationCommand,

    /// Store URL; defaults to WEDDING_STORE_URL (+ WEDDING_STORE_KEY)
    #[arg(long)]
    url: Option<String>,
}

fn parse_command(raw: &str) -> Result<MigrationCommand, String> {
    raw.parse()
}

fn resolve_url(args: &Args) -> Result<String, String> {
    let url = match &args.url {
        Some(url) => {
            let key = std::env::var("WEDDING_STORE_KEY").ok();
            db_url(url, key.as_deref()).map_err(|e| e.to_string())?
        }
        None => match StoreConfig::from_env().map_err(|e| e.to_string())? {
            StoreConfig::Remote { url } => url,
            StoreConfig::Local { .. } => {
                return Err(
                    "No remote store configured: set WEDDING_STORE_URL or pass --url".to_string(),
                )
            }
        },
    };

    // An in-memory database vanishes when this process exits.
    if url.contains(":memory:") || url.contains("mode=memory") {
        return Err("In-memory SQLite stores cannot be migrated from the CLI".to_string());
    }
    Ok(url)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,wedding_backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let url = match resolve_url(&args) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };

    let conn = match connect_store(&url).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("❌ Could not connect to {}: {e}", sanitize_db_url(&url));
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
