//! Declarative request-body validation for inbound HTTP adapters.
//!
//! Routes declare their rules as `const` slices of [`FieldRule`]; one routine
//! evaluates them against the raw JSON body and aggregates every violation in
//! rule order. Validation always runs before any database access.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Kinds of rule a declared field must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// The field must be present, non-null, and a JSON string.
    RequiredString,
}

/// A validation rule attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    field: &'static str,
    kind: RuleKind,
}

/// A single violated rule, surfaced to the client as `{field, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    /// Name of the offending request field.
    #[schema(example = "AGENT_NAME")]
    pub field: String,
    /// Actionable description of the violation.
    #[schema(example = "AGENT_NAME is required")]
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: String) -> Self {
        Self {
            field: field.to_owned(),
            message,
        }
    }
}

impl FieldRule {
    /// Declare a required string field.
    pub const fn required_string(field: &'static str) -> Self {
        Self {
            field,
            kind: RuleKind::RequiredString,
        }
    }

    /// Name of the field this rule applies to.
    pub const fn field(&self) -> &'static str {
        self.field
    }

    fn check(&self, body: &Value) -> Option<FieldViolation> {
        match self.kind {
            RuleKind::RequiredString => match body.get(self.field) {
                None | Some(Value::Null) => Some(FieldViolation::new(
                    self.field,
                    format!("{} is required", self.field),
                )),
                Some(Value::String(_)) => None,
                Some(_) => Some(FieldViolation::new(
                    self.field,
                    format!("{} must be a string", self.field),
                )),
            },
        }
    }
}

/// Evaluate every rule against the body, aggregating violations in rule
/// order. A non-object body violates each rule's presence requirement.
///
/// # Errors
/// Returns the ordered violation list when at least one rule fails.
///
/// # Examples
/// ```
/// use sales_backend::inbound::http::validation::{FieldRule, validate};
/// use serde_json::json;
///
/// const RULES: &[FieldRule] = &[FieldRule::required_string("AGENT_NAME")];
///
/// assert!(validate(RULES, &json!({ "AGENT_NAME": "Alex" })).is_ok());
/// let violations = validate(RULES, &json!({})).unwrap_err();
/// assert_eq!(violations[0].field, "AGENT_NAME");
/// ```
pub fn validate(rules: &[FieldRule], body: &Value) -> Result<(), Vec<FieldViolation>> {
    let violations: Vec<FieldViolation> = rules.iter().filter_map(|rule| rule.check(body)).collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Borrow a string field from the body, if present and a string.
pub fn string_field<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    //! Rule evaluation coverage, including aggregation order and edge bodies.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const RULES: &[FieldRule] = &[
        FieldRule::required_string("AGENT_CODE"),
        FieldRule::required_string("AGENT_NAME"),
    ];

    #[rstest]
    #[case::all_present(json!({ "AGENT_CODE": "A001", "AGENT_NAME": "Alex" }))]
    #[case::extra_fields_ignored(json!({
        "AGENT_CODE": "A001",
        "AGENT_NAME": "Alex",
        "COMMISSION": 0.14,
    }))]
    fn valid_bodies_pass(#[case] body: Value) {
        assert!(validate(RULES, &body).is_ok());
    }

    #[rstest]
    #[case::missing(json!({ "AGENT_CODE": "A001" }), "AGENT_NAME is required")]
    #[case::null(json!({ "AGENT_CODE": "A001", "AGENT_NAME": null }), "AGENT_NAME is required")]
    #[case::wrong_type(json!({ "AGENT_CODE": "A001", "AGENT_NAME": 7 }), "AGENT_NAME must be a string")]
    fn single_violation_is_reported(#[case] body: Value, #[case] message: &str) {
        let violations = validate(RULES, &body).expect_err("body should fail validation");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "AGENT_NAME");
        assert_eq!(violations[0].message, message);
    }

    #[test]
    fn violations_aggregate_in_rule_order() {
        let violations =
            validate(RULES, &json!({ "AGENT_NAME": 42 })).expect_err("both rules should fail");
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "AGENT_CODE");
        assert_eq!(violations[0].message, "AGENT_CODE is required");
        assert_eq!(violations[1].field, "AGENT_NAME");
        assert_eq!(violations[1].message, "AGENT_NAME must be a string");
    }

    #[rstest]
    #[case::array(json!(["AGENT_CODE"]))]
    #[case::scalar(json!("AGENT_CODE"))]
    fn non_object_bodies_violate_every_rule(#[case] body: Value) {
        let violations = validate(RULES, &body).expect_err("non-object body should fail");
        assert_eq!(violations.len(), RULES.len());
        assert!(violations.iter().all(|v| v.message.ends_with("is required")));
    }

    #[test]
    fn string_field_borrows_only_strings() {
        let body = json!({ "AGENT_CODE": "A001", "GRADE": 2 });
        assert_eq!(string_field(&body, "AGENT_CODE"), Some("A001"));
        assert_eq!(string_field(&body, "GRADE"), None);
        assert_eq!(string_field(&body, "MISSING"), None);
    }
}
