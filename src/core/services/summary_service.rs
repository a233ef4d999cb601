use crate::domain::Expense;

/// Aggregate totals over a set of matching expenses.
///
/// Amounts from mixed currencies are summed as raw numbers; no conversion is
/// performed.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub grand_total: f64,
    pub by_category: Vec<CategoryTotal>,
}

/// One category's summed amount. Entries keep first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Aggregates the given expenses, or `None` when there is nothing to
    /// sum. An empty result is absence of data, not an error.
    pub fn summarize(expenses: &[Expense]) -> Option<Summary> {
        if expenses.is_empty() {
            return None;
        }
        let mut grand_total = 0.0;
        let mut by_category: Vec<CategoryTotal> = Vec::new();
        for expense in expenses {
            grand_total += expense.amount;
            match by_category
                .iter_mut()
                .find(|entry| entry.category == expense.category)
            {
                Some(entry) => entry.total += expense.amount,
                None => by_category.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                }),
            }
        }
        Some(Summary {
            count: expenses.len(),
            grand_total,
            by_category,
        })
    }
}
