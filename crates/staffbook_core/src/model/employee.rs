//! Employee domain model.
//!
//! # Responsibility
//! - Define the persisted record and its in-memory draft counterpart.
//! - Provide the field enum used by validation dispatch and error maps.
//!
//! # Invariants
//! - `id` is assigned exactly once, at creation, and never changes.
//! - Persisted records only come from drafts that passed validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = Uuid;

/// Date format used by the wire blob and by form input strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed department set offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Analytics,
    Tech,
}

impl Department {
    pub const ALL: [Department; 2] = [Department::Analytics, Department::Tech];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Tech => "Tech",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Analytics" => Some(Self::Analytics),
            "Tech" => Some(Self::Tech),
            _ => None,
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority levels offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Medior => "Medior",
            Self::Senior => "Senior",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Junior" => Some(Self::Junior),
            "Medior" => Some(Self::Medior),
            "Senior" => Some(Self::Senior),
            _ => None,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The eight business fields of a record, in evaluation order.
///
/// Replaces the original UI's name-string dispatch into a generic form map
/// with an explicit enum, so validation results stay typed end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    EmploymentDate,
    BirthDate,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Department,
        Field::Position,
        Field::EmploymentDate,
        Field::BirthDate,
    ];

    /// Wire/label key for this field, matching the original form names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Department => "department",
            Self::Position => "position",
            Self::EmploymentDate => "employmentDate",
            Self::BirthDate => "birthDate",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted employee record.
///
/// Serialized field names and date strings match the JSON array the browser
/// app kept under its `employees` storage key, so existing blobs load as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub position: Position,
    pub employment_date: NaiveDate,
    pub birth_date: NaiveDate,
}

/// In-memory form state for a record being created or edited.
///
/// All business fields are raw strings exactly as typed; `id` is present
/// only when editing an existing record. A draft turns into an [`Employee`]
/// through [`EmployeeDraft::assemble`] once validation reports no errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub employment_date: String,
    pub birth_date: String,
}

impl EmployeeDraft {
    /// Returns an all-empty draft for the create form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills a draft from a stored record for the edit form.
    pub fn from_record(record: &Employee) -> Self {
        Self {
            id: Some(record.id),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            department: record.department.as_str().to_string(),
            position: record.position.as_str().to_string(),
            employment_date: record.employment_date.format(DATE_FORMAT).to_string(),
            birth_date: record.birth_date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Returns the raw value of one field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Department => &self.department,
            Field::Position => &self.position,
            Field::EmploymentDate => &self.employment_date,
            Field::BirthDate => &self.birth_date,
        }
    }

    /// Sets the raw value of one field, mirroring per-field form input.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Department => self.department = value,
            Field::Position => self.position = value,
            Field::EmploymentDate => self.employment_date = value,
            Field::BirthDate => self.birth_date = value,
        }
    }

    /// Builds a typed record from this draft under the given id.
    ///
    /// Callers run the validation engine first; assembly still refuses to
    /// construct a record from values the type system cannot hold.
    pub fn assemble(&self, id: EmployeeId) -> Result<Employee, DraftError> {
        let department = Department::parse(&self.department)
            .ok_or_else(|| DraftError::UnknownDepartment(self.department.clone()))?;
        let position = Position::parse(&self.position)
            .ok_or_else(|| DraftError::UnknownPosition(self.position.clone()))?;
        let employment_date = parse_date(Field::EmploymentDate, &self.employment_date)?;
        let birth_date = parse_date(Field::BirthDate, &self.birth_date)?;

        Ok(Employee {
            id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department,
            position,
            employment_date,
            birth_date,
        })
    }
}

fn parse_date(field: Field, value: &str) -> Result<NaiveDate, DraftError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DraftError::UnparsableDate {
        field,
        value: value.to_string(),
    })
}

/// Error building a typed record out of raw draft strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    MissingId,
    UnknownDepartment(String),
    UnknownPosition(String),
    UnparsableDate { field: Field, value: String },
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId => write!(f, "draft carries no record id"),
            Self::UnknownDepartment(value) => write!(f, "unknown department `{value}`"),
            Self::UnknownPosition(value) => write!(f, "unknown position `{value}`"),
            Self::UnparsableDate { field, value } => {
                write!(f, "field `{field}` holds unparsable date `{value}`")
            }
        }
    }
}

impl Error for DraftError {}
