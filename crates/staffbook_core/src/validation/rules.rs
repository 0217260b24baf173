//! Field validation rules for employee drafts.
//!
//! # Responsibility
//! - Required, format, date and uniqueness checks in a fixed order.
//! - Produce one error per field; later rules overwrite earlier ones.
//!
//! # Invariants
//! - An empty report is the only state in which a draft may be persisted.
//! - The uniqueness check always runs last and excludes the draft's own id.

use crate::model::employee::{Employee, EmployeeDraft, Field, DATE_FORMAT};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::btree_map::Iter;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d[\d\s()-]{7,}$").expect("valid phone regex"));

/// What went wrong with one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Required,
    InvalidEmail,
    DuplicateEmail,
    InvalidPhone,
    FutureBirthDate,
    EmploymentBeforeBirth,
}

impl ValidationErrorKind {
    /// i18n label key for the inline error message.
    pub fn message_key(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidEmail => "invalidEmail",
            Self::DuplicateEmail => "uniqueEmail",
            Self::InvalidPhone => "invalidPhone",
            Self::FutureBirthDate => "invalidBirthDate",
            Self::EmploymentBeforeBirth => "employmentAfterBirth",
        }
    }
}

impl Display for ValidationErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message_key())
    }
}

/// Field-keyed validation outcome; empty means the draft may be persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, ValidationErrorKind>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the error recorded for one field, if any.
    pub fn error(&self, field: Field) -> Option<ValidationErrorKind> {
        self.errors.get(&field).copied()
    }

    /// Iterates errors in `Field` declaration order.
    pub fn iter(&self) -> Iter<'_, Field, ValidationErrorKind> {
        self.errors.iter()
    }

    fn set(&mut self, field: Field, kind: ValidationErrorKind) {
        self.errors.insert(field, kind);
    }
}

/// Validates a draft against the live collection using the local calendar day.
pub fn validate_today(draft: &EmployeeDraft, collection: &[Employee]) -> ValidationReport {
    validate(draft, collection, Local::now().date_naive())
}

/// Validates a draft with an explicit current date.
///
/// Rule order matters: required checks per field, then format checks, then
/// the date cross-checks, then email uniqueness unconditionally last. A later
/// rule on the same field overwrites the earlier finding, so a duplicate
/// email replaces a format error. That precedence is inherited from the
/// long-observed form behavior rather than a deliberate ranking.
pub fn validate(
    draft: &EmployeeDraft,
    collection: &[Employee],
    today: NaiveDate,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in Field::ALL {
        if draft.value(field).is_empty() {
            report.set(field, ValidationErrorKind::Required);
        }
    }

    if !draft.email.is_empty() && !EMAIL_RE.is_match(&draft.email) {
        report.set(Field::Email, ValidationErrorKind::InvalidEmail);
    }

    if !draft.phone.is_empty() && !PHONE_RE.is_match(&draft.phone) {
        report.set(Field::Phone, ValidationErrorKind::InvalidPhone);
    }

    let birth = parse_date(&draft.birth_date);
    if let Some(birth) = birth {
        if birth > today {
            report.set(Field::BirthDate, ValidationErrorKind::FutureBirthDate);
        }
    }

    if let (Some(birth), Some(employment)) = (birth, parse_date(&draft.employment_date)) {
        if employment <= birth {
            report.set(
                Field::EmploymentDate,
                ValidationErrorKind::EmploymentBeforeBirth,
            );
        }
    }

    let duplicate = collection
        .iter()
        .any(|other| other.email == draft.email && Some(other.id) != draft.id);
    if duplicate {
        report.set(Field::Email, ValidationErrorKind::DuplicateEmail);
    }

    report
}

/// Malformed non-empty dates yield `None`: no date rule fires for them, the
/// same way the original form's invalid-date comparisons all came out false.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_date, EMAIL_RE, PHONE_RE};

    #[test]
    fn email_pattern_requires_local_domain_and_tld() {
        assert!(EMAIL_RE.is_match("a@x.com"));
        assert!(EMAIL_RE.is_match("first.last@sub.domain.org"));
        assert!(!EMAIL_RE.is_match("@x.com"));
        assert!(!EMAIL_RE.is_match("a@x"));
        assert!(!EMAIL_RE.is_match("a@."));
        assert!(!EMAIL_RE.is_match("plainaddress"));
    }

    #[test]
    fn phone_pattern_accepts_loose_shapes_of_eight_or_more() {
        assert!(PHONE_RE.is_match("+90 532 123 45 67"));
        assert!(PHONE_RE.is_match("05321234567"));
        assert!(PHONE_RE.is_match("5 (321) 23-45"));
        assert!(!PHONE_RE.is_match("1234567"));
        assert!(!PHONE_RE.is_match("+-1234567890"));
        assert!(!PHONE_RE.is_match("phone"));
    }

    #[test]
    fn parse_date_accepts_wire_format_only() {
        assert!(parse_date("1990-05-17").is_some());
        assert!(parse_date("17/05/1990").is_none());
        assert!(parse_date("not-a-date").is_none());
        assert!(parse_date("").is_none());
    }
}
