//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{EmployeeId, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be an integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidId.as_str(),
    }))
}

/// Require an optional payload field, reporting its wire name when absent.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_employee_id(value: &str, field: FieldName) -> Result<EmployeeId, Error> {
    value
        .parse::<EmployeeId>()
        .map_err(|_| invalid_id_error(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    const EMAIL: FieldName = FieldName::new("email");
    const ID: FieldName = FieldName::new("id");

    #[rstest]
    fn missing_field_names_the_field() {
        let error = require::<String>(None, EMAIL).expect_err("missing");

        assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(error.message(), "missing required field: email");
        let details = error.details().expect("details");
        assert_eq!(details["field"], "email");
        assert_eq!(details["code"], "missing_field");
    }

    #[rstest]
    fn require_passes_present_values_through() {
        let value = require(Some("lucas@hotmail.com".to_owned()), EMAIL).expect("present");
        assert_eq!(value, "lucas@hotmail.com");
    }

    #[rstest]
    #[case("1", 1)]
    #[case("42", 42)]
    fn parse_employee_id_accepts_integers(#[case] raw: &str, #[case] expected: i64) {
        let id = parse_employee_id(raw, ID).expect("valid id");
        assert_eq!(id.get(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("")]
    fn parse_employee_id_rejects_non_integers(#[case] raw: &str) {
        let error = parse_employee_id(raw, ID).expect_err("invalid id");

        assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
        let details = error.details().expect("details");
        assert_eq!(details["value"], raw);
        assert_eq!(details["code"], "invalid_id");
    }
}
