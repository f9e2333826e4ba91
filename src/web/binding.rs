use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// Outcome of validating a bound form: the failing validator codes per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingResult {
    field_errors: BTreeMap<String, Vec<String>>,
}

impl BindingResult {
    pub fn validate<T: Validate>(target: &T) -> Self {
        match target.validate() {
            Ok(()) => Self::default(),
            Err(errors) => Self::from(errors),
        }
    }

    /// Record a failure that happened before validation, e.g. while binding.
    pub fn reject(&mut self, field: &str, code: &str) {
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(code.to_string());
    }

    pub fn merge(&mut self, other: BindingResult) {
        for (field, codes) in other.field_errors {
            self.field_errors.entry(field).or_default().extend(codes);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    /// Invalid fields, in name order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.field_errors.keys().map(String::as_str)
    }

    pub fn codes(&self, field: &str) -> &[String] {
        self.field_errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Model attribute flagging an invalid field, e.g. `name_error`.
    pub fn error_flag(field: &str) -> String {
        format!("{field}_error")
    }
}

impl From<ValidationErrors> for BindingResult {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let codes = errors.iter().map(|e| e.code.to_string()).collect();
                (field.to_string(), codes)
            })
            .collect();
        Self { field_errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1))]
        name: String,
        #[validate(range(min = 1, max = 10))]
        level: u32,
    }

    #[test]
    fn test_valid_target_has_no_errors() {
        let result = BindingResult::validate(&Sample {
            name: "Misty".into(),
            level: 5,
        });
        assert!(!result.has_errors());
        assert_eq!(result.fields().count(), 0);
    }

    #[test]
    fn test_collects_every_invalid_field() {
        let result = BindingResult::validate(&Sample {
            name: String::new(),
            level: 11,
        });
        assert!(result.has_errors());
        assert_eq!(result.fields().collect::<Vec<_>>(), ["level", "name"]);
        assert_eq!(result.codes("name"), ["length"]);
        assert_eq!(result.codes("level"), ["range"]);
        assert!(result.codes("unknown").is_empty());
    }

    #[test]
    fn test_binding_and_validation_errors_merge() {
        let mut result = BindingResult::default();
        result.reject("name", "duplicate");
        result.merge(BindingResult::validate(&Sample {
            name: String::new(),
            level: 0,
        }));
        assert_eq!(result.codes("name"), ["duplicate", "length"]);
        assert_eq!(result.codes("level"), ["range"]);
    }

    #[test]
    fn test_error_flag_name() {
        assert_eq!(BindingResult::error_flag("born"), "born_error");
    }
}
