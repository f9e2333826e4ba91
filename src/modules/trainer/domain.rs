use crate::web::BindingResult;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;
use validator::{Validate, ValidationError};

pub const BORN_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trainer {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub born: NaiveDate,
    pub admin: bool,
}

/// A trainer that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrainer {
    pub name: String,
    pub surname: String,
    pub username: String,
    pub born: NaiveDate,
    pub admin: bool,
}

/// Row of the trainer listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainerView {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub born: String,
    pub admin: bool,
}

impl From<Trainer> for TrainerView {
    fn from(trainer: Trainer) -> Self {
        Self {
            id: trainer.id,
            name: trainer.name,
            surname: trainer.surname,
            username: trainer.username,
            born: trainer.born.format(BORN_FORMAT).to_string(),
            admin: trainer.admin,
        }
    }
}

/// The "new trainer" form as submitted by the browser.
///
/// Built from the raw pairs by [`TrainerCreateForm::bind`], so a partial, repeated
/// or malformed submission still reaches validation instead of being rejected
/// by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct TrainerCreateForm {
    #[validate(custom(function = "validate_person_name"))]
    pub name: String,
    #[validate(custom(function = "validate_person_name"))]
    pub surname: String,
    #[validate(length(min = 3, max = 30), custom(function = "validate_username"))]
    pub username: String,
    #[validate(custom(function = "validate_born"))]
    pub born: String,
    /// Checkbox; browsers only send it when ticked.
    pub admin: Option<String>,
}

impl TrainerCreateForm {
    /// Bind url-encoded pairs. A text field sent more than once keeps its
    /// first value and is reported as `duplicate`; a repeated checkbox is
    /// still just ticked. Unknown keys are ignored.
    pub fn bind(pairs: Vec<(String, String)>) -> (Self, BindingResult) {
        let mut form = Self::default();
        let mut binding = BindingResult::default();
        let mut seen = BTreeSet::new();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut form.name,
                "surname" => &mut form.surname,
                "username" => &mut form.username,
                "born" => &mut form.born,
                "admin" => {
                    form.admin.get_or_insert(value);
                    continue;
                }
                _ => {
                    tracing::trace!(key = %key, "ignoring unknown form field");
                    continue;
                }
            };
            if seen.insert(key.clone()) {
                *slot = value;
            } else {
                binding.reject(&key, "duplicate");
            }
        }
        (form, binding)
    }

    pub fn is_admin(&self) -> bool {
        self.admin.is_some()
    }

    /// Only meaningful once the form has passed validation.
    pub fn born_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.born.trim(), BORN_FORMAT).ok()
    }
}

fn validate_person_name(value: &str) -> Result<(), ValidationError> {
    let length = value.trim().chars().count();
    if length == 0 {
        return Err(ValidationError::new("required"));
    }
    // Percent-escapes that are not UTF-8 decode to U+FFFD.
    if value.contains(char::REPLACEMENT_CHARACTER) {
        return Err(ValidationError::new("invalid_character"));
    }
    if length > 50 {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

fn validate_username(value: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.');
    if value.chars().all(allowed) {
        Ok(())
    } else {
        Err(ValidationError::new("username_charset"))
    }
}

fn validate_born(value: &str) -> Result<(), ValidationError> {
    let born = NaiveDate::parse_from_str(value.trim(), BORN_FORMAT)
        .map_err(|_| ValidationError::new("date_format"))?;
    if born > Local::now().date_naive() {
        return Err(ValidationError::new("date_in_future"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_form() -> TrainerCreateForm {
        TrainerCreateForm {
            name: "Ash".into(),
            surname: "Ketchum".into(),
            username: "ash.ketchum".into(),
            born: "1997-04-01".into(),
            admin: None,
        }
    }

    #[test]
    fn test_valid_form() {
        let form = valid_form();
        assert!(form.validate().is_ok());
        assert!(!form.is_admin());
        assert_eq!(form.born_date(), NaiveDate::from_ymd_opt(1997, 4, 1));
    }

    #[test]
    fn test_empty_form_flags_every_required_field() {
        let result = BindingResult::validate(&TrainerCreateForm::default());
        assert_eq!(
            result.fields().collect::<Vec<_>>(),
            ["born", "name", "surname", "username"]
        );
    }

    #[test]
    fn test_blank_name_is_required() {
        let form = TrainerCreateForm {
            name: "   ".into(),
            ..valid_form()
        };
        let result = BindingResult::validate(&form);
        assert_eq!(result.codes("name"), ["required"]);
    }

    #[test]
    fn test_long_surname() {
        let form = TrainerCreateForm {
            surname: "x".repeat(51),
            ..valid_form()
        };
        let result = BindingResult::validate(&form);
        assert_eq!(result.fields().collect::<Vec<_>>(), ["surname"]);
    }

    #[test]
    fn test_username_rules() {
        let short = TrainerCreateForm {
            username: "ab".into(),
            ..valid_form()
        };
        assert_eq!(BindingResult::validate(&short).codes("username"), ["length"]);

        let spaced = TrainerCreateForm {
            username: "ash ketchum".into(),
            ..valid_form()
        };
        assert_eq!(
            BindingResult::validate(&spaced).codes("username"),
            ["username_charset"]
        );
    }

    #[test]
    fn test_born_rules() {
        let garbage = TrainerCreateForm {
            born: "01/04/1997".into(),
            ..valid_form()
        };
        assert_eq!(BindingResult::validate(&garbage).codes("born"), ["date_format"]);

        let tomorrow = Local::now().date_naive() + chrono::Days::new(1);
        let future = TrainerCreateForm {
            born: tomorrow.format(BORN_FORMAT).to_string(),
            ..valid_form()
        };
        assert_eq!(
            BindingResult::validate(&future).codes("born"),
            ["date_in_future"]
        );
    }

    #[test]
    fn test_bind_fills_fields_and_ignores_unknown_keys() {
        let (form, binding) = TrainerCreateForm::bind(pairs(&[
            ("name", "Ash"),
            ("surname", "Ketchum"),
            ("username", "ash.ketchum"),
            ("born", "1997-04-01"),
            ("_csrf", "x"),
        ]));
        assert!(!binding.has_errors());
        assert_eq!(form, valid_form());
    }

    #[test]
    fn test_bind_reports_repeated_text_field() {
        let (form, binding) = TrainerCreateForm::bind(pairs(&[
            ("name", "Ash"),
            ("name", "Red"),
            ("surname", "Ketchum"),
        ]));
        assert_eq!(form.name, "Ash");
        assert_eq!(binding.fields().collect::<Vec<_>>(), ["name"]);
        assert_eq!(binding.codes("name"), ["duplicate"]);
    }

    #[test]
    fn test_bind_accepts_repeated_checkbox() {
        let (form, binding) = TrainerCreateForm::bind(pairs(&[("admin", "on"), ("admin", "on")]));
        assert!(form.is_admin());
        assert!(binding.codes("admin").is_empty());
    }

    #[test]
    fn test_replacement_character_in_name_is_rejected() {
        let form = TrainerCreateForm {
            name: "A\u{FFFD}sh".into(),
            ..valid_form()
        };
        let result = BindingResult::validate(&form);
        assert_eq!(result.codes("name"), ["invalid_character"]);
    }

    #[test]
    fn test_admin_checkbox() {
        let form = TrainerCreateForm {
            admin: Some("on".into()),
            ..valid_form()
        };
        assert!(form.is_admin());
    }

    #[test]
    fn test_view_formats_born() {
        let view = TrainerView::from(Trainer {
            id: 3,
            name: "Misty".into(),
            surname: "Waterflower".into(),
            username: "misty".into(),
            born: NaiveDate::from_ymd_opt(1998, 2, 9).unwrap(),
            admin: true,
        });
        assert_eq!(view.born, "1998-02-09");
    }
}
