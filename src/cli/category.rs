//! Category CLI commands

use clap::Subcommand;

use super::{row_to_index, Context};
use crate::display::{format_category_list, TextKey};
use crate::error::FinanceResult;
use crate::models::Kind;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories in the order they were added
    List {
        /// Only show income or expense categories
        #[arg(short, long)]
        kind: Option<Kind>,
    },

    /// Add a category
    Add {
        /// Category name
        name: String,
        /// income or expense
        #[arg(short, long)]
        kind: Kind,
    },

    /// Remove a category by its row number
    #[command(alias = "delete")]
    Remove {
        /// Row number from `category list`
        number: usize,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &mut Storage,
    ctx: &Context,
    cmd: CategoryCommands,
) -> FinanceResult<()> {
    match cmd {
        CategoryCommands::List { kind } => {
            let output = match kind {
                Some(kind) => format_category_list(storage.categories.of_kind(kind), &ctx.strings),
                None => format_category_list(
                    storage.categories.list().iter().enumerate(),
                    &ctx.strings,
                ),
            };
            print!("{}", output);
        }

        CategoryCommands::Add { name, kind } => {
            let index = storage.categories.add(&name, kind)?;
            println!(
                "{} #{} {} ({})",
                ctx.strings.get(TextKey::CategoryAdded),
                index + 1,
                name,
                ctx.strings.kind_label(kind)
            );
        }

        CategoryCommands::Remove { number } => {
            let removed = storage.categories.remove(row_to_index(number)?)?;
            println!(
                "{} {}",
                ctx.strings.get(TextKey::CategoryDeleted),
                removed.name
            );
        }
    }

    Ok(())
}
