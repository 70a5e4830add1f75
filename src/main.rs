use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledgerly::cli::{self, CategoryCommands, Context, ExportFormat};
use ledgerly::config::{LedgerPaths, Settings};
use ledgerly::logging;
use ledgerly::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledgerly",
    version,
    about = "Simple personal finance tracker",
    long_about = "ledgerly records income and expenses under your own categories, \
                  keeps running totals and shows how income and expenses compare."
)]
struct Cli {
    /// Directory holding categories.json and finances.json (default: current directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Record an income or expense under a category
    Add {
        /// Category name (decides income vs expense)
        category: String,
        /// Amount, e.g. 1500 or 12.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date (dd.mm.yyyy), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show all entries in the order they were recorded
    #[command(alias = "chronology")]
    History,

    /// Change the amount, category or date of an entry
    Edit {
        /// Row number from `history`
        number: usize,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category name
        #[arg(short, long)]
        category: Option<String>,
        /// New date (dd.mm.yyyy)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Row number from `history`
        number: usize,
    },

    /// Show totals and the income/expense chart
    #[command(alias = "statistics")]
    Stats,

    /// Export data
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config {
        /// Write settings.json with the current values if it doesn't exist
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_default(&paths)?;
    logging::init_tracing(
        logging::default_level(cli.verbose),
        settings.error_log.as_deref(),
    )?;

    let mut storage = Storage::new(paths, &settings)?;
    storage.load_all()?;

    let ctx = Context::new(settings);

    let result = match cli.command {
        Commands::Category(cmd) => cli::handle_category_command(&mut storage, &ctx, cmd),
        Commands::Add {
            category,
            amount,
            date,
        } => cli::handle_add(&mut storage, &ctx, &category, &amount, date.as_deref()),
        Commands::History => cli::handle_history(&storage, &ctx),
        Commands::Edit {
            number,
            amount,
            category,
            date,
        } => cli::handle_edit(
            &mut storage,
            &ctx,
            number,
            amount.as_deref(),
            category,
            date.as_deref(),
        ),
        Commands::Delete { number } => cli::handle_delete(&mut storage, &ctx, number),
        Commands::Stats => cli::handle_stats(&storage, &ctx),
        Commands::Export { format, output } => cli::handle_export(&storage, format, output),
        Commands::Config { init } => {
            let paths = storage.paths();
            if init {
                if paths.settings_file().exists() {
                    println!("Settings file already exists: {}", paths.settings_file().display());
                } else {
                    ctx.settings.save(paths)?;
                    println!("Wrote settings to {}", paths.settings_file().display());
                }
                println!();
            }

            println!("ledgerly Configuration");
            println!("======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Categories:     {}", paths.categories_file().display());
            println!("Ledger:         {}", paths.ledger_file().display());
            println!("Settings:       {}", paths.settings_file().display());
            println!();
            println!("Currency:          {}", ctx.settings.currency_symbol);
            println!("Date format:       {}", ctx.settings.date_format);
            println!("Strict categories: {}", ctx.settings.strict_categories);
            Ok(())
        }
    };

    if let Err(e) = result {
        anyhow::bail!(cli::user_message(&e, &ctx.strings));
    }

    Ok(())
}
