//! Command-line surface: argument parsing, service wiring, and output.

pub mod output;

use clap::{Parser, Subcommand};

use crate::core::audit::FileAuditLog;
use crate::core::services::{ExpenseService, ListFilter, NewExpense};
use crate::core::time::SystemClock;
use crate::domain::DEFAULT_CURRENCY;
use crate::errors::Result;
use crate::storage::JsonStore;
use crate::utils;

#[derive(Parser)]
#[command(name = "tracker", about = "Personal expense tracker", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Records a new expense
    Add {
        #[arg(long)]
        category: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        /// Expense date as YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value = "")]
        note: String,
        #[arg(long, default_value = DEFAULT_CURRENCY)]
        currency: String,
    },
    /// Lists expenses matching the given filters
    List {
        /// Keep expenses whose date starts with this YYYY-MM prefix
        #[arg(long)]
        month: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Keep expenses with amount >= this value
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,
        /// Keep expenses with amount <= this value
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,
        /// Sort by field: id, date, category, amount, currency, note, created_at
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        desc: bool,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Prints count, grand total, and per-category totals
    Summary {
        #[arg(long)]
        month: Option<String>,
    },
}

/// Parses CLI arguments, wires up the service, and runs one command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let service = ExpenseService::new(
        Box::new(JsonStore::new(utils::data_file())),
        Box::new(SystemClock),
        Box::new(FileAuditLog::new(utils::log_file())),
    );

    match cli.command {
        Command::Add {
            category,
            amount,
            date,
            note,
            currency,
        } => {
            let expense = service.add_expense(NewExpense {
                category,
                amount,
                date,
                note,
                currency: Some(currency),
            })?;
            println!("Added: {}", output::expense_line(&expense));
        }
        Command::List {
            month,
            category,
            min,
            max,
            sort,
            desc,
            limit,
        } => {
            let filter = ListFilter {
                month,
                category,
                min_amount: min,
                max_amount: max,
                sort,
                descending: desc,
                limit,
            };
            let expenses = service.list_expenses(&filter)?;
            if expenses.is_empty() {
                println!("No expenses found");
                return Ok(());
            }
            for expense in &expenses {
                println!("{}", output::expense_line(expense));
            }
        }
        Command::Summary { month } => {
            let filter = ListFilter {
                month,
                ..ListFilter::default()
            };
            match service.summary(&filter)? {
                Some(summary) => output::print_summary(&summary),
                None => println!("No expenses found"),
            }
        }
    }
    Ok(())
}
