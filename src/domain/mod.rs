//! Domain models for the expense store document.

pub mod expense;

pub use expense::{parse_date, Expense, Store, DEFAULT_CURRENCY, STORE_VERSION};
