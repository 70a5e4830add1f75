//! Statistics CLI command

use super::Context;
use crate::display::format_statistics;
use crate::error::FinanceResult;
use crate::reports::distribution;
use crate::storage::Storage;

/// Print totals and the income/expense chart
pub fn handle_stats(storage: &Storage, ctx: &Context) -> FinanceResult<()> {
    let totals = storage.ledger.totals();
    let distribution = distribution(storage.ledger.events());
    print!(
        "{}",
        format_statistics(&totals, &distribution, &ctx.strings, ctx.currency())
    );
    Ok(())
}
