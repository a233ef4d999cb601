use crate::core::services::Summary;
use crate::domain::{Expense, DEFAULT_CURRENCY};

/// Renders one expense as a single pipe-delimited line.
pub fn expense_line(expense: &Expense) -> String {
    format!(
        "{} | {} | {} | {:.2} {} | {}",
        expense.id, expense.date, expense.category, expense.amount, expense.currency, expense.note
    )
}

/// Prints the aggregate block for a summary.
pub fn print_summary(summary: &Summary) {
    println!("Total expenses: {}", summary.count);
    println!("Grand total: {:.2} {}", summary.grand_total, DEFAULT_CURRENCY);
    println!("By category:");
    for entry in &summary.by_category {
        println!("  {}: {:.2} {}", entry.category, entry.total, DEFAULT_CURRENCY);
    }
}
