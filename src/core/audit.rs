use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use chrono::Local;

const LINE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Collaborator notified after every successful expense write. Read paths
/// never call it.
pub trait AuditLog: Send + Sync {
    fn record(&self, event: &str, id: &str);
}

/// Appends timestamped lines such as `2024-01-15T10:30:00 | INFO | ADD
/// EXP-20240115-0001` to a plain text log, creating the containing directory
/// on first use.
///
/// The notified write has already been persisted, so a failed append is
/// reported through tracing diagnostics rather than returned to the caller.
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AuditLog for FileAuditLog {
    fn record(&self, event: &str, id: &str) {
        let stamp = Local::now().format(LINE_TIMESTAMP_FORMAT);
        let line = format!("{stamp} | INFO | {event} {id}\n");
        let result = parent_dir_ready(&self.path).and_then(|_| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .and_then(|mut file| file.write_all(line.as_bytes()))
        });
        if let Err(err) = result {
            tracing::warn!("audit log append failed: {err}");
        }
    }
}

fn parent_dir_ready(path: &std::path::Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent),
        None => Ok(()),
    }
}
