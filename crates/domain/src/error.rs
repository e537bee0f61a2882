//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RealmeetError`] via `#[from]`.

use std::fmt;

use serde::Serialize;

/// Top-level error shared by every layer of the service.
#[derive(Debug, thiserror::Error)]
pub enum RealmeetError {
    /// Input failed a required-field or range check.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist (or is not visible).
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Why a single input field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// The field was absent or null.
    Missing,
    /// The field was present but empty or whitespace only.
    Blank,
    /// The value is below the allowed minimum.
    BelowMinimum,
    /// The value is above the configured maximum.
    ExceedsMaximum,
    /// The text is longer than the configured maximum length.
    TooLong,
    /// The value could not be interpreted at all.
    Invalid,
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Missing => "missing",
            Self::Blank => "blank",
            Self::BelowMinimum => "below minimum",
            Self::ExceedsMaximum => "exceeds maximum",
            Self::TooLong => "too long",
            Self::Invalid => "invalid",
        };
        f.write_str(text)
    }
}

/// A rejected field together with the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub code: ViolationCode,
}

impl FieldViolation {
    #[must_use]
    pub const fn new(field: &'static str, code: ViolationCode) -> Self {
        Self { field, code }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.field, self.code)
    }
}

/// Input rejected before it reached storage.
///
/// Always holds at least one [`FieldViolation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Build an error from a non-empty list of violations.
    ///
    /// Returns `None` when `violations` is empty.
    #[must_use]
    pub fn from_violations(violations: Vec<FieldViolation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Shortcut for a single rejected field.
    #[must_use]
    pub fn single(field: &'static str, code: ViolationCode) -> Self {
        Self {
            violations: vec![FieldViolation::new(field, code)],
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether `field` is among the rejected fields.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid input: ")?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Lookup miss for a typed record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
