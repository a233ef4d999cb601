use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackerError};

/// Schema version stamped into every persisted document.
pub const STORE_VERSION: u32 = 1;

/// Currency assigned to new expenses when none is given.
pub const DEFAULT_CURRENCY: &str = "BDT";

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const ID_DATE_FORMAT: &str = "%Y%m%d";

/// A single recorded expense. Field order matches the on-disk JSON document.
///
/// Records are created once by `add`, read arbitrarily often, and never
/// updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub currency: String,
    pub note: String,
    #[serde(with = "timestamp_format")]
    pub created_at: NaiveDateTime,
}

/// The persisted document: a version stamp plus every recorded expense in
/// append order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub version: u32,
    pub expenses: Vec<Expense>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            expenses: Vec::new(),
        }
    }
}

impl Store {
    /// Builds the next expense id, `EXP-YYYYMMDD-NNNN`, from the current
    /// record count. The embedded date is the creation date, not the
    /// expense's own date. Uniqueness holds for a single writer; concurrent
    /// processes loading the same count can collide.
    pub fn next_id(&self, today: NaiveDate) -> String {
        format!(
            "EXP-{}-{:04}",
            today.format(ID_DATE_FORMAT),
            self.expenses.len() + 1
        )
    }

    pub fn append(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }
}

/// Parses a `YYYY-MM-DD` date string, rejecting anything that is not the
/// canonical zero-padded form or not a real calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| TrackerError::InvalidDate(raw.to_string()))?;
    // chrono tolerates unpadded components such as `2024-1-5`.
    if parsed.format(DATE_FORMAT).to_string() != raw {
        return Err(TrackerError::InvalidDate(raw.to_string()));
    }
    Ok(parsed)
}

/// Second-precision ISO-8601 timestamps, `YYYY-MM-DDTHH:MM:SS`.
mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
