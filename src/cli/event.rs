//! Entry and history CLI commands

use super::{normalize_date, row_to_index, Context};
use crate::display::{format_history, TextKey};
use crate::error::FinanceResult;
use crate::models::{parse_amount, today, EventPatch, Kind};
use crate::storage::Storage;

/// Record an income or expense under an existing category
///
/// The kind comes from the category. The date defaults to today.
pub fn handle_add(
    storage: &mut Storage,
    ctx: &Context,
    category: &str,
    amount: &str,
    date: Option<&str>,
) -> FinanceResult<()> {
    let format = &ctx.settings.date_format;
    let date = match date {
        Some(text) => normalize_date(text, format)?,
        None => today(format),
    };

    let index = storage
        .ledger
        .record(&storage.categories, category, amount, &date)?;

    let added = match storage.ledger.events()[index].kind {
        Kind::Income => TextKey::IncomeAdded,
        Kind::Expense => TextKey::ExpenseAdded,
    };
    println!("{} #{}", ctx.strings.get(added), index + 1);
    Ok(())
}

/// Print the event history in entry order
pub fn handle_history(storage: &Storage, ctx: &Context) -> FinanceResult<()> {
    print!(
        "{}",
        format_history(storage.ledger.events(), &ctx.strings, ctx.currency())
    );
    Ok(())
}

/// Edit the amount, category or date of an event
pub fn handle_edit(
    storage: &mut Storage,
    ctx: &Context,
    number: usize,
    amount: Option<&str>,
    category: Option<String>,
    date: Option<&str>,
) -> FinanceResult<()> {
    let index = row_to_index(number)?;

    let patch = EventPatch {
        amount: amount.map(parse_amount).transpose()?,
        category_name: category,
        date: date
            .map(|d| normalize_date(d, &ctx.settings.date_format))
            .transpose()?,
    };

    if patch.is_empty() {
        println!("No changes specified. Use --amount, --category, or --date.");
        return Ok(());
    }

    storage.ledger.amend(&storage.categories, index, patch)?;
    println!("{} #{}", ctx.strings.get(TextKey::EventUpdated), number);
    Ok(())
}

/// Delete an event by row number
pub fn handle_delete(storage: &mut Storage, ctx: &Context, number: usize) -> FinanceResult<()> {
    let removed = storage.ledger.delete_event(row_to_index(number)?)?;
    println!(
        "{} {} {}",
        ctx.strings.get(TextKey::EventDeleted),
        removed.date,
        removed.category_name
    );
    Ok(())
}
