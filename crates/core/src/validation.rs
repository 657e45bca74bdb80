//! Flattening of `validator` reports into the `{field: rule}` map returned
//! to clients.
//!
//! Rule tables live on the request DTOs as `#[validate(...)]` attributes;
//! this module only turns a failed report into a [`CoreError`]. Every
//! violated field is reported, not just the first one.

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Field name (as it appears in the JSON payload) mapped to the violated rule.
pub type FieldErrors = BTreeMap<String, String>;

/// Run the DTO's rule table and collect all violations.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::InvalidFields(flatten(&errors)))
}

/// Convert a validator report into a `{camelCaseField: ruleCode}` map.
///
/// When one field violates several rules, the first reported rule wins.
pub fn flatten(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        let name: &str = field.as_ref();
        if let Some(first) = field_errors.first() {
            out.entry(camel_case(name))
                .or_insert_with(|| first.code.to_string());
        }
    }
    out
}

/// `variant_name` -> `variantName`.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, max = 100))]
        display_name: String,
        #[validate(email)]
        contact_email: String,
        #[validate(range(min = 0))]
        stock: i32,
    }

    #[test]
    fn camel_cases_snake_fields() {
        assert_eq!(camel_case("variant_name"), "variantName");
        assert_eq!(camel_case("product_id"), "productId");
        assert_eq!(camel_case("email"), "email");
    }

    #[test]
    fn collects_every_violation() {
        let input = Sample {
            display_name: "ab".into(),
            contact_email: "not-an-email".into(),
            stock: -1,
        };

        let err = validate_input(&input).unwrap_err();
        let fields = assert_matches!(err, CoreError::InvalidFields(f) => f);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields["displayName"], "length");
        assert_eq!(fields["contactEmail"], "email");
        assert_eq!(fields["stock"], "range");
    }

    #[test]
    fn valid_input_passes() {
        let input = Sample {
            display_name: "Widget".into(),
            contact_email: "a@x.com".into(),
            stock: 0,
        };
        assert!(validate_input(&input).is_ok());
    }
}
