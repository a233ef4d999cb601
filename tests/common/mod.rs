use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use expense_core::core::audit::AuditLog;
use expense_core::core::services::ExpenseService;
use expense_core::core::time::Clock;
use expense_core::storage::JsonStore;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Clock pinned to a single instant, so ids and timestamps are predictable.
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at(date: &str, hour: u32, minute: u32) -> Self {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date");
        Self(date.and_hms_opt(hour, minute, 0).expect("valid test time"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Audit log that records events in memory instead of touching the disk.
pub struct RecordingAudit {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingAudit {
    pub fn new(events: Arc<Mutex<Vec<String>>>) -> Self {
        Self { events }
    }
}

impl AuditLog for RecordingAudit {
    fn record(&self, event: &str, id: &str) {
        self.events
            .lock()
            .expect("lock audit events")
            .push(format!("{event} {id}"));
    }
}

pub struct TestContext {
    pub service: ExpenseService,
    pub data_file: PathBuf,
    pub events: Arc<Mutex<Vec<String>>>,
}

/// Creates an isolated service backed by a unique directory, a pinned clock,
/// and an in-memory audit log.
pub fn setup_service_at(clock: FixedClock) -> TestContext {
    let temp = TempDir::new().expect("create temp dir");
    let data_file = temp.path().join("data").join("expenses.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let events = Arc::new(Mutex::new(Vec::new()));
    let service = ExpenseService::new(
        Box::new(JsonStore::new(data_file.clone())),
        Box::new(clock),
        Box::new(RecordingAudit::new(events.clone())),
    );
    TestContext {
        service,
        data_file,
        events,
    }
}

pub fn setup_service() -> TestContext {
    setup_service_at(FixedClock::at("2024-01-15", 10, 30))
}
