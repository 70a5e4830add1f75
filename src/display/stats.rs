//! Statistics screen formatting
//!
//! Running totals followed by a text proportion chart of income vs expenses.

use super::strings::{Strings, TextKey};
use crate::models::{format_amount, Kind};
use crate::reports::{Distribution, Totals};

const BAR_WIDTH: usize = 40;

/// Format the totals block
pub fn format_totals(totals: &Totals, strings: &Strings, currency: &str) -> String {
    format!(
        "{}: {}\n{}: {}\n{}: {}\n",
        strings.get(TextKey::Income),
        format_amount(totals.income, currency),
        strings.get(TextKey::Expenses),
        format_amount(totals.expenses, currency),
        strings.get(TextKey::TotalBalance),
        format_amount(totals.balance, currency)
    )
}

/// Format the proportion chart, one bar per kind
///
/// With no data the chart is replaced by a single notice line.
pub fn format_chart(distribution: &Distribution, strings: &Strings) -> String {
    let Some(shares) = distribution.shares() else {
        return format!("{}.\n", strings.get(TextKey::NoData));
    };

    let labels: Vec<String> = Kind::ALL
        .iter()
        .map(|k| strings.kind_total_label(*k))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(8);

    let mut output = String::new();
    for ((_, share), label) in shares.iter().zip(labels) {
        let filled = ((share / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        output.push_str(&format!(
            "{:<width$}  {}{}  {:>5.1}%\n",
            label,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            share,
            width = label_width
        ));
    }

    output
}

/// Format the full statistics screen
pub fn format_statistics(
    totals: &Totals,
    distribution: &Distribution,
    strings: &Strings,
    currency: &str,
) -> String {
    let mut output = format!("{}\n\n", strings.get(TextKey::Statistics));
    output.push_str(&format_totals(totals, strings, currency));
    output.push('\n');
    output.push_str(&format_chart(distribution, strings));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;
    use crate::reports::{distribution, totals};

    #[test]
    fn test_totals_block() {
        let output = format_totals(&Totals::from_sums(1500.0, 300.0), &Strings::english(), "$");
        assert_eq!(
            output,
            "Income: 1500.00 $\nExpenses: 300.00 $\nTotal balance: 1200.00 $\n"
        );
    }

    #[test]
    fn test_totals_block_on_empty_ledger() {
        let output = format_totals(&totals(&[]), &Strings::english(), "$");
        assert_eq!(
            output,
            "Income: 0.00 $\nExpenses: 0.00 $\nTotal balance: 0.00 $\n"
        );

        let expense_only = vec![Event::expense(100.0, "Rent", "01.03.2024")];
        let output = format_totals(&totals(&expense_only), &Strings::english(), "$");
        assert!(output.starts_with("Income: 0.00 $\n"));
    }

    #[test]
    fn test_chart_no_data() {
        let output = format_chart(&Distribution::NoData, &Strings::english());
        assert_eq!(output, "No data to chart yet.\n");
    }

    #[test]
    fn test_chart_bars() {
        let events = vec![
            Event::income(750.0, "Salary", "01.03.2024"),
            Event::expense(250.0, "Rent", "02.03.2024"),
        ];
        let output = format_chart(&distribution(&events), &Strings::english());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Incomes "));
        assert!(lines[0].ends_with("75.0%"));
        assert_eq!(lines[0].matches('█').count(), 30);
        assert!(lines[1].starts_with("Expenses"));
        assert!(lines[1].ends_with("25.0%"));
        assert_eq!(lines[1].matches('█').count(), 10);
    }

    #[test]
    fn test_statistics_screen() {
        let events = vec![Event::income(1500.0, "Salary", "01.03.2024")];
        let output = format_statistics(
            &totals(&events),
            &distribution(&events),
            &Strings::english(),
            "$",
        );
        assert!(output.starts_with("Statistics\n\n"));
        assert!(output.contains("Total balance: 1500.00 $"));
        assert!(output.contains("100.0%"));
    }
}
