//! # Credential Record and Identifier Types
//!
//! The degree credential record as it lives in memory, and the `DegreeId`
//! newtype that produces the canonical store key.
//!
//! ## Persisted Form
//!
//! The record shares its key-value store with other record kinds, so the
//! persisted JSON carries a `docType` tag distinguishing degree records
//! from future kinds. The remaining field names match the registry's wire
//! format and are pinned with serde renames.

use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The `docType` tag identifying degree records among record kinds
/// sharing the store.
pub const RECORD_KIND: &str = "degree";

/// Caller-supplied integer identifier of a degree record.
///
/// The id doubles as the record's store key via [`DegreeId::store_key`];
/// it is immutable once the record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DegreeId(pub i64);

impl DegreeId {
    /// The canonical store key for this id: its decimal string rendering.
    ///
    /// Standard decimal representation carries no leading-zero ambiguity,
    /// so distinct ids never collide under this mapping.
    pub fn store_key(&self) -> String {
        self.0.to_string()
    }

    /// Access the inner integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DegreeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DegreeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A degree credential record.
///
/// Created once via [`CredentialRecord::new`]; after creation the only
/// field any operation mutates is `remaining_views`. The counter is not
/// clamped — additive grants may drive it negative — but a view is only
/// authorized while it is strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Record kind tag; always [`RECORD_KIND`] for degree records.
    #[serde(rename = "docType")]
    pub kind: String,
    /// Unique identifier and store key.
    #[serde(rename = "degreeid")]
    pub id: DegreeId,
    /// Name of the degree holder, lowercased.
    #[serde(rename = "studentname")]
    pub student_name: String,
    /// Name of the issuing institution, lowercased.
    #[serde(rename = "institutename")]
    pub institution_name: String,
    /// Duration of the degree in years.
    #[serde(rename = "duration")]
    pub duration_years: i64,
    /// Year the degree was awarded.
    #[serde(rename = "passingyear")]
    pub passing_year: i64,
    /// Cumulative grade point average.
    #[serde(rename = "cgpa")]
    pub gpa: f32,
    /// Views still authorized for this record.
    #[serde(rename = "allowedviews")]
    pub remaining_views: i64,
}

impl CredentialRecord {
    /// Build a new degree record with the kind tag pinned and both name
    /// fields lowercased.
    pub fn new(
        id: DegreeId,
        student_name: &str,
        institution_name: &str,
        duration_years: i64,
        passing_year: i64,
        gpa: f32,
        remaining_views: i64,
    ) -> Self {
        Self {
            kind: RECORD_KIND.to_string(),
            id,
            student_name: student_name.to_lowercase(),
            institution_name: institution_name.to_lowercase(),
            duration_years,
            passing_year,
            gpa,
            remaining_views,
        }
    }

    /// The store key under which this record persists.
    pub fn store_key(&self) -> String {
        self.id.store_key()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> CredentialRecord {
        CredentialRecord::new(DegreeId(1), "Jane Doe", "MIT", 4, 2020, 3.9, 2)
    }

    #[test]
    fn test_new_record_lowercases_names() {
        let r = make_record();
        assert_eq!(r.student_name, "jane doe");
        assert_eq!(r.institution_name, "mit");
    }

    #[test]
    fn test_new_record_pins_kind_tag() {
        let r = make_record();
        assert_eq!(r.kind, RECORD_KIND);
    }

    #[test]
    fn test_store_key_is_decimal_id() {
        assert_eq!(DegreeId(1).store_key(), "1");
        assert_eq!(DegreeId(-7).store_key(), "-7");
        assert_eq!(DegreeId(420023).store_key(), "420023");
        assert_eq!(make_record().store_key(), "1");
    }

    #[test]
    fn test_degree_id_from_str() {
        assert_eq!("42".parse::<DegreeId>().unwrap(), DegreeId(42));
        assert!("4.2".parse::<DegreeId>().is_err());
        assert!("".parse::<DegreeId>().is_err());
        assert!("abc".parse::<DegreeId>().is_err());
    }

    #[test]
    fn test_distinct_ids_distinct_keys() {
        assert_ne!(DegreeId(10).store_key(), DegreeId(100).store_key());
        assert_ne!(DegreeId(1).store_key(), DegreeId(-1).store_key());
    }
}
