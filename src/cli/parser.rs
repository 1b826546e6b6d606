use crate::export::{ExportFormat, ExportTarget};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rCigarLog
/// CLI application to track a cigar collection with SQLite
#[derive(Parser)]
#[command(
    name = "rcigarlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal cigar tracker: stock, tasting sessions, history and flavor recommendations on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// View or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Manage the cigar stock
    Stock {
        #[command(subcommand)]
        action: StockAction,
    },

    /// Start, finish or review tasting sessions
    Taste {
        #[command(subcommand)]
        action: TasteAction,
    },

    /// Completed tastings, optionally filtered
    History {
        #[arg(long, short, help = "Match name, brand, origin or notes (case-insensitive)")]
        search: Option<String>,

        #[arg(
            long,
            short,
            value_name = "BAND",
            help = "Rating band: all, 9-10, 7-8, 5-6, 3-4, 1-2"
        )]
        rating: Option<String>,
    },

    /// Collection statistics and flavor-based recommendations
    Dashboard {
        #[arg(
            long = "flavor",
            short = 'f',
            value_name = "FLAVOR",
            help = "Flavor to match (repeatable)"
        )]
        flavors: Vec<String>,
    },

    /// Print the flavor palette
    Flavors,

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },

    /// Export stock or history
    Export {
        #[arg(long, value_enum, default_value = "stock")]
        what: ExportTarget,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (start:end)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Optional stock fields shared by `stock add` and `stock edit`.
#[derive(Args, Debug, Default)]
pub struct StockFields {
    #[arg(long, help = "Country of origin")]
    pub origin: Option<String>,

    #[arg(long, help = "Unit price")]
    pub price: Option<f64>,

    #[arg(long = "qty", help = "Units in stock")]
    pub quantity: Option<i64>,

    #[arg(long = "date", help = "Purchase date (YYYY-MM-DD)")]
    pub purchase_date: Option<String>,

    #[arg(long, help = "Photo reference (stored as-is)")]
    pub photo: Option<String>,
}

#[derive(Subcommand)]
pub enum StockAction {
    /// Add a cigar to the stock
    Add {
        name: String,
        brand: String,

        #[command(flatten)]
        fields: StockFields,
    },

    /// Update fields of a stock row
    Edit {
        id: i32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        brand: Option<String>,

        #[command(flatten)]
        fields: StockFields,
    },

    /// Remove a stock row
    Del { id: i32 },

    /// List the stock with its summary
    List {
        #[arg(long, help = "Only rows with units left")]
        available: bool,
    },
}

#[derive(Subcommand)]
pub enum TasteAction {
    /// Light up a cigar from the stock (takes one unit)
    Start {
        cigar_id: i32,

        #[arg(long, help = "straight | v | punch")]
        cut: Option<String>,

        #[arg(long, help = "alone | social")]
        moment: Option<String>,

        #[arg(long, help = "loose | medium | tight")]
        draw: Option<String>,

        #[arg(long)]
        vitola: Option<String>,
    },

    /// Close an active session with its evaluation
    Finish {
        id: i32,

        #[arg(long, help = "Rating from 0 to 10")]
        rating: i64,

        #[arg(long = "duration", help = "Smoke duration in minutes")]
        duration: u32,

        #[arg(long, help = "Would you buy it again: yes | no | depends")]
        repurchase: String,

        #[arg(long = "flavor", short = 'f', value_name = "FLAVOR", help = "Perceived flavor (repeatable)")]
        flavors: Vec<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long = "band-photo", help = "Ring band photo reference (stored as-is)")]
        band_photo: Option<String>,
    },

    /// Delete a session (any status)
    Del { id: i32 },

    /// Active sessions and completed totals
    List,
}
