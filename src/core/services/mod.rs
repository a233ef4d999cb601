pub mod expense_service;
pub mod summary_service;

pub use expense_service::{ExpenseService, ListFilter, NewExpense, SortField};
pub use summary_service::{CategoryTotal, Summary, SummaryService};
