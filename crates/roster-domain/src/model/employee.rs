//! Employee - the record managed by the roster
//!
//! An Employee is an Entity (has identity). The repository assigns the id;
//! every other field comes from the caller and is validated on construction.
//! Instances are immutable once built - an update is a delete plus a store.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Basic `local@domain.tld` shape. Anything stricter (MX lookup,
/// confirmation mail) belongs to an outer layer.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Unique identifier for an Employee.
///
/// Assigned by the repository on `store`; callers never pick one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised when an [`Employee`] fails construction-time validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// The email does not match the `local@domain.tld` shape.
    #[error("invalid email address: '{email}'")]
    InvalidEmail { email: String },
}

/// Employee - one validated roster record.
///
/// Construction either yields a fully valid instance or fails with a
/// [`ValidationError`]; a half-built Employee is never observable. That
/// guarantee covers JSON too: deserialization funnels through the same
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawEmployee")]
pub struct Employee {
    id: EmployeeId,
    full_name: String,
    role: String,
    department: String,
    email: String,
}

impl Employee {
    /// Create a new Employee.
    ///
    /// The `id` is normally the repository's business: a repository passes
    /// the id it read from its backing store, while a caller creating a
    /// record for `store` passes a placeholder the repository replaces.
    pub fn new(
        id: EmployeeId,
        full_name: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let employee = Self {
            id,
            full_name: full_name.into(),
            role: role.into(),
            department: department.into(),
            email: email.into(),
        };
        employee.validate()?;
        Ok(employee)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("full name", &self.full_name)?;
        require_non_empty("role", &self.role)?;
        require_non_empty("department", &self.department)?;
        if !EMAIL_SHAPE.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail {
                email: self.email.clone(),
            });
        }
        Ok(())
    }

    // ========== Getters ==========

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Copy of this record under a different id.
    ///
    /// Used by repositories when assigning the definitive id on `store`.
    /// The fields were validated when `self` was built, so the copy holds
    /// the same invariants.
    pub fn with_id(&self, id: EmployeeId) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

/// Wire shape for [`Employee`]. Deserialization goes through
/// [`Employee::new`], so invalid records cannot enter via JSON either.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEmployee {
    id: EmployeeId,
    full_name: String,
    role: String,
    department: String,
    email: String,
}

impl TryFrom<RawEmployee> for Employee {
    type Error = ValidationError;

    fn try_from(raw: RawEmployee) -> Result<Self, Self::Error> {
        Employee::new(raw.id, raw.full_name, raw.role, raw.department, raw.email)
    }
}
