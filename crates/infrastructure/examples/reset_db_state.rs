//! Drops the registry tables so the next start recreates them empty.
//!
//! Reads the same configuration as the `yardlog` binary; pass `--yes` to
//! confirm, since every vehicle and operation is lost.

use infrastructure::{AppConfig, RegistryStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    if !std::env::args().any(|arg| arg == "--yes") {
        eprintln!("Refusing to drop the registry without --yes");
        std::process::exit(2);
    }

    let config = AppConfig::load("config")?;
    let store = RegistryStore::connect(&config.database).await?;

    println!("Rolling back every migration...");
    store.reset_schema().await?;
    store.close().await?;

    println!("Registry dropped. Run run_migrations or any yardlog command to recreate it.");
    Ok(())
}
