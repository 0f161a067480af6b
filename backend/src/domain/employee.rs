//! Employee data model.
//!
//! An [`Employee`] is a flat record: a storage-assigned [`EmployeeId`] plus the
//! caller-supplied [`EmployeeDetails`]. The id is fixed once assigned; the
//! details are overwritten wholesale on update.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage-assigned employee identifier.
///
/// # Examples
/// ```
/// use employees_backend::domain::EmployeeId;
///
/// let id: EmployeeId = "42".parse().expect("numeric id");
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Caller-supplied employee fields.
///
/// Used both as the creation candidate and as the replacement values on
/// update. Field contents are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeDetails {
    /// Bundle the three employee fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// A persisted employee record.
///
/// # Examples
/// ```
/// use employees_backend::domain::{Employee, EmployeeDetails, EmployeeId};
///
/// let mut employee = Employee::new(
///     EmployeeId::new(1),
///     EmployeeDetails::new("Lucas", "Barbosa", "lucas@x.com"),
/// );
/// employee.apply(EmployeeDetails::new("Gabi", "Barbosa", "gabi@x.com"));
/// assert_eq!(employee.id(), EmployeeId::new(1));
/// assert_eq!(employee.first_name(), "Gabi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: EmployeeId,
    #[serde(flatten)]
    details: EmployeeDetails,
}

impl Employee {
    /// Combine an assigned id with the employee fields.
    #[must_use]
    pub fn new(id: EmployeeId, details: EmployeeDetails) -> Self {
        Self { id, details }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.details.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.details.last_name
    }

    pub fn email(&self) -> &str {
        &self.details.email
    }

    /// Borrow the mutable fields as a bundle.
    #[must_use]
    pub fn details(&self) -> &EmployeeDetails {
        &self.details
    }

    /// Overwrite first name, last name and email; the id is left untouched.
    pub fn apply(&mut self, details: EmployeeDetails) {
        self.details = details;
    }

    /// Split the record into its id and fields.
    #[must_use]
    pub fn into_parts(self) -> (EmployeeId, EmployeeDetails) {
        (self.id, self.details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn lucas() -> Employee {
        Employee::new(
            EmployeeId::new(1),
            EmployeeDetails::new("Lucas", "Barbosa", "lucas@hotmail.com"),
        )
    }

    #[rstest]
    fn apply_preserves_identifier(mut lucas: Employee) {
        lucas.apply(EmployeeDetails::new("luke", "barbin", "luke@hotmail.com"));

        assert_eq!(lucas.id(), EmployeeId::new(1));
        assert_eq!(lucas.first_name(), "luke");
        assert_eq!(lucas.last_name(), "barbin");
        assert_eq!(lucas.email(), "luke@hotmail.com");
    }

    #[rstest]
    fn serialises_flat_camel_case_record(lucas: Employee) {
        let value = serde_json::to_value(&lucas).expect("serialise employee");
        assert_eq!(
            value,
            json!({
                "id": 1,
                "firstName": "Lucas",
                "lastName": "Barbosa",
                "email": "lucas@hotmail.com",
            })
        );
    }

    #[rstest]
    #[case("7", Some(7))]
    #[case("-3", Some(-3))]
    #[case("seven", None)]
    #[case("", None)]
    fn employee_id_parses_integers(#[case] raw: &str, #[case] expected: Option<i64>) {
        let parsed = raw.parse::<EmployeeId>().ok().map(EmployeeId::get);
        assert_eq!(parsed, expected);
    }
}
