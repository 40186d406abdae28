//! Field rules for expense input.
//!
//! Every create/update goes through [`ExpenseDraft::new`]; the engine only
//! accepts drafts, so unvalidated input never reaches the store.

use std::sync::LazyLock;

use regex::Regex;

use crate::{FieldError, ValidationErrors};

#[allow(clippy::expect_used)]
static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s.,-]+$").expect("description pattern must compile"));

/// A validated `(description, amount)` pair ready to be persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    description: String,
    amount: f64,
}

impl ExpenseDraft {
    /// Check both fields and collect every broken rule.
    ///
    /// The description is kept exactly as given (no trimming).
    pub fn new(description: impl Into<String>, amount: f64) -> Result<Self, ValidationErrors> {
        let description = description.into();
        let mut errors = ValidationErrors::default();

        if let Err(err) = validate_description(&description) {
            errors.push(err);
        }
        if let Err(err) = validate_amount(amount) {
            errors.push(err);
        }

        if errors.is_empty() {
            Ok(Self {
                description,
                amount,
            })
        } else {
            Err(errors)
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

pub(crate) fn validate_description(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new("description", "description cannot be empty"));
    }
    if !DESCRIPTION_PATTERN.is_match(value) {
        return Err(FieldError::new(
            "description",
            "description contains invalid characters",
        ));
    }
    Ok(())
}

pub(crate) fn validate_amount(value: f64) -> Result<(), FieldError> {
    if value <= 0.0 || !value.is_finite() {
        return Err(FieldError::new("amount", "amount must be greater than zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_description() {
        let draft = ExpenseDraft::new("Lunch at cafe", 15.5).unwrap();
        assert_eq!(draft.description(), "Lunch at cafe");
        assert_eq!(draft.amount(), 15.5);
    }

    #[test]
    fn accepts_punctuation_and_unicode_words() {
        assert!(ExpenseDraft::new("Taxi, airport - 2nd trip.", 1.0).is_ok());
        assert!(ExpenseDraft::new("Café crème", 3.2).is_ok());
        assert!(ExpenseDraft::new("snake_case_item", 3.2).is_ok());
    }

    #[test]
    fn rejects_empty_and_blank_description() {
        for description in ["", "   ", "\t\n"] {
            let errors = ExpenseDraft::new(description, 5.0).unwrap_err();
            assert_eq!(
                errors.fields,
                vec![FieldError::new("description", "description cannot be empty")]
            );
        }
    }

    #[test]
    fn rejects_invalid_characters() {
        for description in ["Lunch!", "a/b", "50% off", "<script>", "tips $"] {
            let errors = ExpenseDraft::new(description, 5.0).unwrap_err();
            assert_eq!(
                errors.fields,
                vec![FieldError::new(
                    "description",
                    "description contains invalid characters"
                )],
                "{description}"
            );
        }
    }

    #[test]
    fn rejects_non_positive_amount() {
        for amount in [0.0, -0.0, -1.0, -0.01, f64::NAN, f64::INFINITY] {
            let errors = ExpenseDraft::new("Dinner", amount).unwrap_err();
            assert_eq!(
                errors.fields,
                vec![FieldError::new("amount", "amount must be greater than zero")]
            );
        }
    }

    #[test]
    fn reports_every_broken_field() {
        let errors = ExpenseDraft::new("", 0.0).unwrap_err();
        let fields: Vec<_> = errors.fields.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["description", "amount"]);
    }
}
