use std::{
    env,
    path::PathBuf,
    sync::Once,
};

const HOME_ENV: &str = "EXPENSE_CORE_HOME";
const DATA_DIR: &str = "data";
const DATA_FILE: &str = "expenses.json";
const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "tracker.log";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
/// Diagnostics go to stderr so they never mix with command output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expense_core=info".parse().unwrap());

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

/// Returns the tracker's base directory: `EXPENSE_CORE_HOME` when set,
/// otherwise the current working directory.
pub fn base_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    PathBuf::from(".")
}

/// Path of the JSON expense store.
pub fn data_file() -> PathBuf {
    base_dir().join(DATA_DIR).join(DATA_FILE)
}

/// Path of the append-only audit log.
pub fn log_file() -> PathBuf {
    base_dir().join(LOG_DIR).join(LOG_FILE)
}
