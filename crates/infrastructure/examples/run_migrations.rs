use infrastructure::{AppConfig, RegistryStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env
    dotenv::dotenv().ok();

    let config = AppConfig::load("config")?;

    println!("Connecting to database...");
    let store = RegistryStore::connect(&config.database).await?;

    println!("Running migrations...");
    store.ensure_schema().await?;
    store.close().await?;

    println!("✅ Schema is up to date.");

    Ok(())
}
