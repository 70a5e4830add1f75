//! Ledger repository for JSON storage
//!
//! Manages the events document (finances.json):
//!
//! ```json
//! { "income": 1500.0, "expenses": 0.0, "events": [ { "type": "income", ... } ] }
//! ```
//!
//! The top-level `income`/`expenses` fields are written for compatibility but
//! never read back as truth; totals are always recomputed from the events.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{check_amount, parse_amount, Event, EventPatch, Kind};
use crate::reports::aggregate::{self, Totals};

use super::categories::CategoryStore;
use super::file_io::{read_json, write_json_atomic};

/// Serializable ledger document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: f64,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Repository for the event list
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    events: Vec<Event>,
}

impl LedgerStore {
    /// Create a new, empty ledger backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            events: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from disk
    ///
    /// A missing file yields an empty ledger. An unreadable file is a
    /// [`FinanceError::DataCorruption`]: the file is left untouched and the
    /// in-memory ledger is not modified.
    pub fn load(&mut self) -> FinanceResult<()> {
        match read_json::<LedgerData, _>(&self.path) {
            Ok(Some(data)) => {
                let recomputed = aggregate::totals(&data.events);
                if recomputed.income != data.income || recomputed.expenses != data.expenses {
                    debug!(
                        cached_income = data.income,
                        cached_expenses = data.expenses,
                        income = recomputed.income,
                        expenses = recomputed.expenses,
                        "cached totals differ from events, using recomputed totals"
                    );
                }
                debug!(path = %self.path.display(), count = data.events.len(), "loaded ledger");
                self.events = data.events;
                Ok(())
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "ledger file not found, starting empty");
                self.events.clear();
                Ok(())
            }
            Err(e) => {
                if e.is_corruption() {
                    error!(path = %self.path.display(), error = %e, "ledger file is unreadable, refusing to continue");
                }
                Err(e)
            }
        }
    }

    /// Save the ledger to disk, recomputing the cached totals
    pub fn save(&self) -> FinanceResult<()> {
        let totals = self.totals();
        let data = LedgerData {
            income: totals.income,
            expenses: totals.expenses,
            events: self.events.clone(),
        };
        write_json_atomic(&self.path, &data)?;
        debug!(path = %self.path.display(), count = self.events.len(), "saved ledger");
        Ok(())
    }

    /// Parse `amount_text`, append a new event and persist; returns its position
    pub fn add_event(
        &mut self,
        kind: Kind,
        amount_text: &str,
        category_name: &str,
        date: &str,
    ) -> FinanceResult<usize> {
        let amount = parse_amount(amount_text)?;
        self.push_event(Event::new(kind, amount, category_name, date))
    }

    /// Append an already-built event and persist; returns its position
    pub fn push_event(&mut self, event: Event) -> FinanceResult<usize> {
        check_amount(event.amount)?;

        self.events.push(event);
        if let Err(e) = self.save() {
            self.events.pop();
            return Err(e);
        }

        let index = self.events.len() - 1;
        let event = &self.events[index];
        info!(
            index,
            kind = event.kind.code(),
            amount = event.amount,
            category = %event.category_name,
            "recorded event"
        );
        Ok(index)
    }

    /// Record an event whose kind comes from the named category
    ///
    /// With duplicate names the first matching category decides the kind.
    pub fn record(
        &mut self,
        categories: &CategoryStore,
        category_name: &str,
        amount_text: &str,
        date: &str,
    ) -> FinanceResult<usize> {
        let kind = categories
            .kind_of(category_name)
            .ok_or_else(|| FinanceError::category_not_found(category_name))?;
        self.add_event(kind, amount_text, category_name, date)
    }

    /// Replace the amount of the event at `index` with parsed `amount_text`
    pub fn update_event_amount(&mut self, index: usize, amount_text: &str) -> FinanceResult<()> {
        self.check_index(index)?;
        let amount = parse_amount(amount_text)?;
        self.edit_event(index, EventPatch::amount(amount))
    }

    /// Apply a patch to the event at `index` and persist
    pub fn edit_event(&mut self, index: usize, patch: EventPatch) -> FinanceResult<()> {
        self.check_index(index)?;
        if let Some(amount) = patch.amount {
            check_amount(amount)?;
        }

        let previous = self.events[index].clone();
        patch.apply(&mut self.events[index]);
        if let Err(e) = self.save() {
            self.events[index] = previous;
            return Err(e);
        }

        info!(index, "updated event");
        Ok(())
    }

    /// Apply a patch, checking a new category name against `categories`
    ///
    /// The new category must exist and share the event's kind, since the
    /// kind itself is not editable.
    pub fn amend(
        &mut self,
        categories: &CategoryStore,
        index: usize,
        patch: EventPatch,
    ) -> FinanceResult<()> {
        self.check_index(index)?;

        if let Some(name) = &patch.category_name {
            let kind = categories
                .kind_of(name)
                .ok_or_else(|| FinanceError::category_not_found(name.as_str()))?;
            let event_kind = self.events[index].kind;
            if kind != event_kind {
                return Err(FinanceError::Validation(format!(
                    "Category '{}' is {}, but the entry is {}",
                    name, kind, event_kind
                )));
            }
        }

        self.edit_event(index, patch)
    }

    /// Delete the event at `index` and persist; returns the removed event
    pub fn delete_event(&mut self, index: usize) -> FinanceResult<Event> {
        self.check_index(index)?;

        let removed = self.events.remove(index);
        if let Err(e) = self.save() {
            self.events.insert(index, removed);
            return Err(e);
        }

        info!(index, "deleted event");
        Ok(removed)
    }

    /// Events in entry order (not sorted by date)
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Event at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// Totals derived from the current events
    pub fn totals(&self) -> Totals {
        aggregate::totals(&self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn check_index(&self, index: usize) -> FinanceResult<()> {
        if index < self.events.len() {
            Ok(())
        } else {
            Err(FinanceError::event_index(index, self.events.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::aggregate::{distribution, Distribution};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finances.json");
        let mut store = LedgerStore::new(path);
        store.load().unwrap();
        (temp_dir, store)
    }

    fn assert_totals_match_events(store: &LedgerStore) {
        let income: f64 = store
            .events()
            .iter()
            .filter(|e| e.kind == Kind::Income)
            .map(|e| e.amount)
            .sum();
        let expenses: f64 = store
            .events()
            .iter()
            .filter(|e| e.kind == Kind::Expense)
            .map(|e| e.amount)
            .sum();
        let totals = store.totals();
        assert_eq!(totals.income, income);
        assert_eq!(totals.expenses, expenses);
        assert_eq!(totals.balance, income - expenses);
    }

    #[test]
    fn test_missing_file_is_empty_ledger() {
        let (temp_dir, store) = create_test_store();
        assert!(store.is_empty());
        assert_eq!(store.totals(), Totals::default());
        assert!(!temp_dir.path().join("finances.json").exists());
    }

    #[test]
    fn test_first_income() {
        let (_temp_dir, mut store) = create_test_store();
        let index = store
            .add_event(Kind::Income, "1500.0", "Salary", "01.03.2024")
            .unwrap();

        assert_eq!(index, 0);
        assert_eq!(store.totals(), Totals::from_sums(1500.0, 0.0));
        assert_eq!(store.totals().balance, 1500.0);
    }

    #[test]
    fn test_invalid_amount_leaves_events_unchanged() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_event(Kind::Expense, "20", "Food", "01.03.2024").unwrap();
        let before = store.events().to_vec();

        let err = store
            .add_event(Kind::Income, "abc", "Salary", "01.03.2024")
            .unwrap_err();

        assert!(matches!(err, FinanceError::InvalidAmount(_)));
        assert_eq!(store.events(), before.as_slice());
    }

    #[test]
    fn test_negative_and_zero_amounts_accepted() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_event(Kind::Income, "0", "Salary", "01.03.2024").unwrap();
        store.add_event(Kind::Expense, "-15.5", "Refund", "02.03.2024").unwrap();

        assert_eq!(store.totals(), Totals::from_sums(0.0, -15.5));
    }

    #[test]
    fn test_delete_out_of_range_leaves_state() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_event(Kind::Income, "10", "a", "01.01.2024").unwrap();
        store.add_event(Kind::Expense, "4", "b", "02.01.2024").unwrap();
        let before = store.events().to_vec();

        let err = store.delete_event(5).unwrap_err();
        assert!(matches!(
            err,
            FinanceError::IndexOutOfRange { index: 5, len: 2, .. }
        ));
        assert_eq!(store.events(), before.as_slice());
        assert_eq!(store.totals(), Totals::from_sums(10.0, 4.0));
    }

    #[test]
    fn test_distribution_after_delete() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_event(Kind::Income, "1000", "Salary", "01.03.2024").unwrap();
        store.add_event(Kind::Expense, "300", "Rent", "02.03.2024").unwrap();

        assert_eq!(
            distribution(store.events()),
            Distribution::Split([(Kind::Income, 1000.0), (Kind::Expense, 300.0)])
        );

        let removed = store.delete_event(0).unwrap();
        assert_eq!(removed.category_name, "Salary");
        assert_eq!(
            distribution(store.events()),
            Distribution::Split([(Kind::Income, 0.0), (Kind::Expense, 300.0)])
        );
    }

    #[test]
    fn test_update_amount() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_event(Kind::Expense, "100", "Rent", "01.03.2024").unwrap();
        store.add_event(Kind::Income, "900", "Salary", "02.03.2024").unwrap();

        store.update_event_amount(0, "250.50").unwrap();
        assert_eq!(store.events()[0], Event::expense(250.5, "Rent", "01.03.2024"));
        assert_eq!(store.events()[1], Event::income(900.0, "Salary", "02.03.2024"));
        assert_eq!(store.totals(), Totals::from_sums(900.0, 250.5));

        let err = store.update_event_amount(0, "notanumber").unwrap_err();
        assert!(matches!(err, FinanceError::InvalidAmount(_)));
        assert_eq!(store.events()[0].amount, 250.5);
        assert_eq!(store.totals(), Totals::from_sums(900.0, 250.5));
    }

    #[test]
    fn test_update_amount_out_of_range() {
        let (_temp_dir, mut store) = create_test_store();
        let err = store.update_event_amount(0, "12").unwrap_err();
        assert!(matches!(err, FinanceError::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_edit_event_keeps_kind() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_event(Kind::Expense, "8", "Food", "01.03.2024").unwrap();

        store
            .edit_event(
                0,
                EventPatch {
                    category_name: Some("Groceries".into()),
                    date: Some("05.03.2024".into()),
                    ..EventPatch::default()
                },
            )
            .unwrap();

        assert_eq!(store.events()[0], Event::expense(8.0, "Groceries", "05.03.2024"));
    }

    #[test]
    fn test_edit_event_rejects_non_finite() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_event(Kind::Expense, "8", "Food", "01.03.2024").unwrap();

        let err = store.edit_event(0, EventPatch::amount(f64::INFINITY)).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidAmount(_)));
        assert_eq!(store.events()[0].amount, 8.0);
    }

    #[test]
    fn test_totals_hold_after_mixed_operations() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_event(Kind::Income, "1200", "Salary", "01.01.2024").unwrap();
        assert_totals_match_events(&store);
        store.add_event(Kind::Expense, "400", "Rent", "02.01.2024").unwrap();
        store.add_event(Kind::Expense, "35.25", "Food", "03.01.2024").unwrap();
        assert_totals_match_events(&store);
        store.update_event_amount(1, "450").unwrap();
        assert_totals_match_events(&store);
        store.delete_event(0).unwrap();
        assert_totals_match_events(&store);
        let _ = store.add_event(Kind::Income, "oops", "Salary", "04.01.2024");
        assert_totals_match_events(&store);
        assert_eq!(store.totals(), store.totals());
    }

    #[test]
    fn test_entry_order_not_date_order() {
        let (_temp_dir, mut store) = create_test_store();
        store.add_event(Kind::Expense, "1", "a", "31.12.2024").unwrap();
        store.add_event(Kind::Expense, "2", "b", "01.01.2020").unwrap();

        let dates: Vec<_> = store.events().iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["31.12.2024", "01.01.2020"]);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let (temp_dir, mut store) = create_test_store();
        store.add_event(Kind::Income, "1000", "Salary", "01.03.2024").unwrap();
        store.add_event(Kind::Expense, "12.75", "Food", "02.03.2024").unwrap();
        store.add_event(Kind::Expense, "300", "Rent", "01.03.2024").unwrap();

        let mut reloaded = LedgerStore::new(temp_dir.path().join("finances.json"));
        reloaded.load().unwrap();

        assert_eq!(reloaded.events(), store.events());
        assert_eq!(reloaded.totals(), store.totals());
    }

    #[test]
    fn test_saved_document_carries_totals() {
        let (temp_dir, mut store) = create_test_store();
        store.add_event(Kind::Income, "1000", "Salary", "01.03.2024").unwrap();
        store.add_event(Kind::Expense, "300", "Rent", "02.03.2024").unwrap();

        let raw = fs::read_to_string(temp_dir.path().join("finances.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["income"], 1000.0);
        assert_eq!(value["expenses"], 300.0);
        assert_eq!(value["events"][1]["type"], "expense");
        assert_eq!(value["events"][1]["reason"], "Rent");
    }

    #[test]
    fn test_expense_only_document_has_positive_zero_income() {
        let (temp_dir, mut store) = create_test_store();
        store
            .add_event(Kind::Expense, "100", "Rent", "01.03.2024")
            .unwrap();

        let raw = fs::read_to_string(temp_dir.path().join("finances.json")).unwrap();
        assert!(!raw.contains("-0.0"));
        let data: LedgerData = serde_json::from_str(&raw).unwrap();
        assert!(data.income.is_sign_positive());
    }

    #[test]
    fn test_stale_cached_totals_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finances.json");
        fs::write(
            &path,
            r#"{"income": 99999, "expenses": 1, "events": [
                {"type": "income", "amount": 100, "reason": "Salary", "date": "01.03.2024"},
                {"type": "expense", "amount": 40, "reason": "Food", "date": "02.03.2024"}
            ]}"#,
        )
        .unwrap();

        let mut store = LedgerStore::new(path);
        store.load().unwrap();
        assert_eq!(store.totals(), Totals::from_sums(100.0, 40.0));
    }

    #[test]
    fn test_totals_fields_optional() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finances.json");
        fs::write(
            &path,
            r#"{"events": [{"type": "income", "amount": 5, "reason": "Gift", "date": "01.03.2024"}]}"#,
        )
        .unwrap();

        let mut store = LedgerStore::new(path);
        store.load().unwrap();
        assert_eq!(store.totals().income, 5.0);
    }

    #[test]
    fn test_corrupt_file_fails_and_is_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finances.json");
        fs::write(&path, "{\"events\": [").unwrap();

        let mut store = LedgerStore::new(path.clone());
        let err = store.load().unwrap_err();

        assert!(err.is_corruption());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"events\": [");
    }

    #[test]
    fn test_record_resolves_kind_from_category() {
        let (temp_dir, mut store) = create_test_store();
        let mut categories = CategoryStore::new(temp_dir.path().join("categories.json"));
        categories.load().unwrap();
        categories.add("Salary", Kind::Income).unwrap();
        categories.add("Rent", Kind::Expense).unwrap();

        store.record(&categories, "Rent", "700", "01.03.2024").unwrap();
        store.record(&categories, "Salary", "2000", "01.03.2024").unwrap();

        assert_eq!(store.events()[0].kind, Kind::Expense);
        assert_eq!(store.events()[1].kind, Kind::Income);

        let err = store.record(&categories, "Lottery", "5", "01.03.2024").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_amend_checks_new_category() {
        let (temp_dir, mut store) = create_test_store();
        let mut categories = CategoryStore::new(temp_dir.path().join("categories.json"));
        categories.load().unwrap();
        categories.add("Salary", Kind::Income).unwrap();
        categories.add("Rent", Kind::Expense).unwrap();
        categories.add("Utilities", Kind::Expense).unwrap();
        store.record(&categories, "Rent", "100", "01.03.2024").unwrap();
        let before = store.events().to_vec();

        let rename = |name: &str| EventPatch {
            category_name: Some(name.to_string()),
            ..EventPatch::default()
        };

        let missing = store.amend(&categories, 0, rename("NoSuchCategory")).unwrap_err();
        assert!(missing.is_not_found());

        let wrong_kind = store.amend(&categories, 0, rename("Salary")).unwrap_err();
        assert!(wrong_kind.is_validation());
        assert_eq!(store.events(), before.as_slice());

        store.amend(&categories, 0, rename("Utilities")).unwrap();
        assert_eq!(store.events()[0].category_name, "Utilities");
        assert_eq!(store.events()[0].kind, Kind::Expense);

        let amount_only = store.amend(&categories, 0, EventPatch::amount(80.0));
        assert!(amount_only.is_ok());
        assert_eq!(store.totals().expenses, 80.0);
    }

    #[test]
    fn test_deleting_category_keeps_events() {
        let (temp_dir, mut store) = create_test_store();
        let mut categories = CategoryStore::new(temp_dir.path().join("categories.json"));
        categories.load().unwrap();
        categories.add("Food", Kind::Expense).unwrap();

        store.record(&categories, "Food", "12", "01.03.2024").unwrap();
        categories.remove(0).unwrap();

        assert_eq!(store.events()[0].category_name, "Food");
        assert_eq!(store.totals().expenses, 12.0);
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let mut store = LedgerStore::new(blocker.join("finances.json"));

        assert!(store.add_event(Kind::Income, "10", "a", "01.01.2024").is_err());
        assert!(store.is_empty());
    }
}
