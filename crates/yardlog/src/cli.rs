use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Cargo movement logbook for the truck yard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and the per RUN_MODE overrides
    #[arg(long, global = true, default_value = "config")]
    pub config_dir: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Database schema maintenance
    #[command(subcommand)]
    Schema(SchemaCommand),
    /// Fleet registry
    #[command(subcommand)]
    Vehicle(VehicleCommand),
    /// Cargo movements
    #[command(subcommand)]
    Op(OpCommand),
}

#[derive(Subcommand, Debug)]
pub enum SchemaCommand {
    /// Create missing tables, columns and indexes
    Init,
}

#[derive(Subcommand, Debug)]
pub enum VehicleCommand {
    List {
        #[arg(long)]
        json: bool,
    },
    /// Register a vehicle or update an existing one
    Save {
        #[arg(long)]
        plate: String,
        /// Tractomula, Dobletroque, Sencillo, Turbo or free text
        #[arg(long, default_value = "Tractomula")]
        kind: String,
        /// Usual driver, prefilled when recording movements
        #[arg(long)]
        driver: Option<String>,
    },
    Delete {
        #[arg(long)]
        plate: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum OpCommand {
    /// Record a cargo movement
    Record(RecordArgs),
    /// List movements and totals
    History(HistoryArgs),
    /// Write the proof photo of a movement to a file
    Photo {
        #[arg(long)]
        id: i32,
        #[arg(long)]
        out: PathBuf,
    },
    Delete {
        #[arg(long)]
        id: i32,
    },
}

#[derive(Args, Debug)]
pub struct RecordArgs {
    #[arg(long)]
    pub plate: String,
    #[arg(long)]
    pub sacks: i32,
    #[arg(long)]
    pub tons: f32,
    /// Defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Defaults to the vehicle's usual driver
    #[arg(long)]
    pub driver: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Photo of the delivery note (PNG, JPEG or WebP)
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Defaults to 15 days before --to
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Defaults to today
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// A plate, or "all"
    #[arg(long, default_value = "all")]
    pub plate: String,
    /// Case-insensitive part of the driver name
    #[arg(long)]
    pub driver: Option<String>,
    #[arg(long)]
    pub json: bool,
}

/// Number of days shown by `op history` when no start date is given
pub const DEFAULT_HISTORY_DAYS: i64 = 15;

impl HistoryArgs {
    /// Inclusive date window, defaulting to the last fifteen days up to `today`.
    pub fn window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let to = self.to.unwrap_or(today);
        let from = self
            .from
            .unwrap_or(to - chrono::Duration::days(DEFAULT_HISTORY_DAYS));
        (from, to)
    }
}
