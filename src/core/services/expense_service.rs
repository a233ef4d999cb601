//! Record creation and listing over the persisted expense store.

use std::str::FromStr;

use crate::core::audit::AuditLog;
use crate::core::services::summary_service::{Summary, SummaryService};
use crate::core::time::Clock;
use crate::domain::expense::DATE_FORMAT;
use crate::domain::{parse_date, Expense, DEFAULT_CURRENCY};
use crate::errors::{Result, TrackerError};
use crate::storage::StorageBackend;

/// Input for a new expense record, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub category: String,
    pub amount: f64,
    pub date: Option<String>,
    pub note: String,
    pub currency: Option<String>,
}

/// Filters applied to a listing, in fixed order: month prefix, category,
/// minimum amount, maximum amount, then sort and limit. Unset fields are
/// no-ops.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub month: Option<String>,
    pub category: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub sort: Option<String>,
    pub descending: bool,
    pub limit: Option<usize>,
}

/// Sortable fields of an [`Expense`]. Amount compares numerically, the rest
/// lexicographically or by their natural chrono order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Date,
    Category,
    Amount,
    Currency,
    Note,
    CreatedAt,
}

impl FromStr for SortField {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "id" => Ok(Self::Id),
            "date" => Ok(Self::Date),
            "category" => Ok(Self::Category),
            "amount" => Ok(Self::Amount),
            "currency" => Ok(Self::Currency),
            "note" => Ok(Self::Note),
            "created_at" => Ok(Self::CreatedAt),
            other => Err(TrackerError::UnknownSortField(other.to_string())),
        }
    }
}

impl ListFilter {
    /// Runs the full filter pipeline over an already-loaded record list.
    pub fn apply(&self, mut expenses: Vec<Expense>) -> Result<Vec<Expense>> {
        if let Some(month) = self.month.as_deref() {
            expenses.retain(|e| e.date.format(DATE_FORMAT).to_string().starts_with(month));
        }
        if let Some(category) = self.category.as_deref() {
            expenses.retain(|e| e.category == category);
        }
        if let Some(min) = self.min_amount {
            expenses.retain(|e| e.amount >= min);
        }
        if let Some(max) = self.max_amount {
            expenses.retain(|e| e.amount <= max);
        }
        if let Some(field) = self.sort.as_deref() {
            let field: SortField = field.parse()?;
            sort_by_field(&mut expenses, field, self.descending);
        }
        if let Some(limit) = self.limit {
            expenses.truncate(limit);
        }
        Ok(expenses)
    }
}

fn sort_by_field(expenses: &mut [Expense], field: SortField, descending: bool) {
    expenses.sort_by(|a, b| {
        let ordering = match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Date => a.date.cmp(&b.date),
            SortField::Category => a.category.cmp(&b.category),
            SortField::Amount => a.amount.total_cmp(&b.amount),
            SortField::Currency => a.currency.cmp(&b.currency),
            SortField::Note => a.note.cmp(&b.note),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Facade that coordinates the storage backend, clock, and audit log for
/// every tracker operation. Each call performs at most one load and one
/// save; no state is cached between calls.
pub struct ExpenseService {
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
    audit: Box<dyn AuditLog>,
}

impl ExpenseService {
    pub fn new(
        storage: Box<dyn StorageBackend>,
        clock: Box<dyn Clock>,
        audit: Box<dyn AuditLog>,
    ) -> Self {
        Self {
            storage,
            clock,
            audit,
        }
    }

    /// Validates the draft, appends the new record, persists the whole
    /// store, and notifies the audit log. Fails on the first violated
    /// precondition without touching the file.
    pub fn add_expense(&self, draft: NewExpense) -> Result<Expense> {
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            return Err(TrackerError::InvalidAmount(draft.amount));
        }
        let date = match draft.date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => self.clock.today(),
        };

        let mut store = self.storage.load()?;
        let expense = Expense {
            id: store.next_id(self.clock.today()),
            date,
            category: draft.category.to_lowercase(),
            amount: draft.amount,
            currency: draft
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            note: draft.note,
            created_at: self.clock.now(),
        };
        store.append(expense.clone());
        self.storage.save(&store)?;
        self.audit.record("ADD", &expense.id);
        Ok(expense)
    }

    /// Loads the store and returns the records matching `filter`, in filter
    /// pipeline order. The result may be empty.
    pub fn list_expenses(&self, filter: &ListFilter) -> Result<Vec<Expense>> {
        let store = self.storage.load()?;
        filter.apply(store.expenses)
    }

    /// Aggregates the records matching `filter`, or `None` when nothing
    /// matches.
    pub fn summary(&self, filter: &ListFilter) -> Result<Option<Summary>> {
        let expenses = self.list_expenses(filter)?;
        Ok(SummaryService::summarize(&expenses))
    }
}
