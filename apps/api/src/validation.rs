//! Flattens `validator` errors into field-level messages.
//!
//! Paths use the wire (camelCase) names and list indexes, e.g.
//! `personalInfo.firstName` or `experience[1].company`, so the same messages
//! serve the section forms and the HTTP 400 body.

use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Collects every leaf error, sorted by path.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    out
}

/// One-line summary suitable for an error response.
pub fn describe(fields: &[FieldError]) -> String {
    if fields.is_empty() {
        return "Validation error".to_string();
    }
    let parts: Vec<String> = fields
        .iter()
        .map(|f| format!("{} at \"{}\"", f.message, f.field))
        .collect();
    format!("Validation error: {}", parts.join("; "))
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let name = camel_case(&field.to_string());
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}.{name}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", err.code));
                    out.push(FieldError {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for (i, c) in snake.chars().enumerate() {
        if c == '_' && i > 0 {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::fixtures::{document, experience};
    use validator::Validate;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("first_name"), "firstName");
        assert_eq!(camel_case("personal_info"), "personalInfo");
        assert_eq!(camel_case("email"), "email");
    }

    #[test]
    fn test_nested_path_for_personal_info() {
        let mut doc = document();
        doc.personal_info.first_name.clear();
        let errors = field_errors(&doc.validate().unwrap_err());
        assert_eq!(
            errors,
            vec![FieldError {
                field: "personalInfo.firstName".to_string(),
                message: "First name is required".to_string(),
            }]
        );
    }

    #[test]
    fn test_list_index_in_path() {
        let mut doc = document();
        let mut broken = experience("Acme");
        broken.company.clear();
        doc.experience.push(broken);
        let errors = field_errors(&doc.validate().unwrap_err());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "experience[1].company");
        assert_eq!(errors[0].message, "Company name is required");
    }

    #[test]
    fn test_describe_mentions_every_field() {
        let mut doc = document();
        doc.personal_info.phone.clear();
        doc.skills.technical.clear();
        let msg = describe(&field_errors(&doc.validate().unwrap_err()));
        assert!(msg.starts_with("Validation error: "));
        assert!(msg.contains("Phone number is required at \"personalInfo.phone\""));
        assert!(msg.contains("Technical skills are required at \"skills.technical\""));
    }
}
