use anyhow::{Context, Result, bail};
use chrono::Local;
use std::path::Path;
use tracing::{debug, info};

use application::{FleetService, OperationLog, RecordOperation, UploadedPhoto};
use domain::operation::{OperationFilter, OperationId, PlateFilter};
use domain::vehicle::Plate;
use infrastructure::RegistryStore;

use crate::cli::{Command, HistoryArgs, OpCommand, RecordArgs, SchemaCommand, VehicleCommand};
use crate::output;

/// Services a command runs against
pub struct App {
    pub store: RegistryStore,
    pub fleet: FleetService,
    pub log: OperationLog,
}

pub async fn run(app: &App, command: Command) -> Result<()> {
    match command {
        Command::Schema(SchemaCommand::Init) => {
            // Startup already ran it; running again is a no-op that confirms the state.
            app.store.ensure_schema().await?;
            println!("schema is up to date");
        }
        Command::Vehicle(cmd) => vehicle(app, cmd).await?,
        Command::Op(cmd) => op(app, cmd).await?,
    }
    Ok(())
}

async fn vehicle(app: &App, command: VehicleCommand) -> Result<()> {
    match command {
        VehicleCommand::List { json } => {
            let vehicles = app.fleet.list().await.context("could not list vehicles")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&vehicles)?);
            } else {
                print!("{}", output::vehicle_table(&vehicles));
            }
        }
        VehicleCommand::Save {
            plate,
            kind,
            driver,
        } => {
            let saved = app
                .fleet
                .register(&plate, &kind, driver.as_deref())
                .await
                .context("could not save vehicle")?;
            println!("saved {}", saved.plate);
        }
        VehicleCommand::Delete { plate } => {
            app.fleet
                .remove(&plate)
                .await
                .context("could not delete vehicle")?;
            println!("deleted {}", plate.trim().to_uppercase());
        }
    }
    Ok(())
}

async fn op(app: &App, command: OpCommand) -> Result<()> {
    match command {
        OpCommand::Record(args) => record(app, args).await?,
        OpCommand::History(args) => history(app, args).await?,
        OpCommand::Photo { id, out } => photo(app, OperationId::new(id), &out).await?,
        OpCommand::Delete { id } => {
            app.log
                .remove(OperationId::new(id))
                .await
                .context("could not delete operation")?;
            println!("deleted operation {}", id);
        }
    }
    Ok(())
}

async fn record(app: &App, args: RecordArgs) -> Result<()> {
    let driver = match args.driver {
        Some(driver) => Some(driver),
        None => {
            let plate = Plate::new(&args.plate)?;
            let driver = app.fleet.default_driver(&plate).await?;
            debug!(plate = %plate, driver = ?driver, "Using the vehicle's usual driver");
            driver
        }
    };

    let photo = match args.photo {
        Some(path) => Some(read_photo(&path).await?),
        None => None,
    };

    let id = app
        .log
        .record(RecordOperation {
            operation_date: args.date.unwrap_or_else(|| Local::now().date_naive()),
            plate: args.plate,
            driver,
            description: args.description,
            sack_count: args.sacks,
            tonnage: args.tons,
            photo,
        })
        .await
        .context("could not record operation")?;

    println!("recorded operation {}", id);
    Ok(())
}

async fn read_photo(path: &Path) -> Result<UploadedPhoto> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("could not read photo {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    Ok(UploadedPhoto { bytes, filename })
}

async fn history(app: &App, args: HistoryArgs) -> Result<()> {
    let (from, to) = args.window(Local::now().date_naive());
    if from > to {
        bail!("--from ({}) is after --to ({})", from, to);
    }

    let mut filter = OperationFilter::between(from, to).with_plate(PlateFilter::parse(&args.plate)?);
    if let Some(driver) = &args.driver {
        filter = filter.with_driver(driver.as_str());
    }

    let history = app
        .log
        .history(&filter)
        .await
        .context("could not query operations")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&history)?);
    } else {
        print!("{}", output::history_table(&history));
    }
    Ok(())
}

async fn photo(app: &App, id: OperationId, out: &Path) -> Result<()> {
    let Some(bytes) = app
        .log
        .proof_image(id)
        .await
        .context("could not fetch proof image")?
    else {
        println!("operation {} has no photo", id);
        return Ok(());
    };

    tokio::fs::write(out, &bytes)
        .await
        .with_context(|| format!("could not write {}", out.display()))?;
    info!(id = %id, bytes = bytes.len(), path = %out.display(), "Proof image exported");
    println!("wrote {} ({} bytes)", out.display(), bytes.len());
    Ok(())
}
