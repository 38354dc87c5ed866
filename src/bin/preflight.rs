use products_api::infra::telemetry;
use products_api::{AppConfig, DatabaseService, ProductStorage};
use sqlx::postgres::PgPoolOptions;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--create-schema]\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         Optional:\n\
           BIND_ADDR, DB_MAX_CONNECTIONS, RUST_LOG\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let create_schema = args.iter().any(|a| a == "--create-schema");

    let config = AppConfig::from_env()?;
    println!("> Preflight:");
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  DB_MAX_CONNECTIONS={}", config.max_connections);

    // Connect without bootstrapping so a missing table is reported, not created.
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot connect to DATABASE_URL: {}", e))?;
    let db = DatabaseService::with_pool(pool);

    db.product_storage()
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("Database ping failed: {}", e))?;
    println!("  Database reachable.");

    if db.products_table_exists().await? {
        println!("  Table `products` exists.");
    } else if create_schema {
        println!("  Table `products` missing -> creating it...");
        db.ensure_schema().await?;
        if !db.products_table_exists().await? {
            return Err(anyhow::anyhow!("Table `products` still missing after create"));
        }
        println!("  Table `products` created.");
    } else {
        return Err(anyhow::anyhow!(
            "Table `products` does not exist. Re-run with --create-schema"
        ));
    }

    db.close().await;
    println!("> Preflight OK.");
    Ok(())
}
