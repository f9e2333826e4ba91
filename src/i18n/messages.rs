use crate::error::{LeagueError, Result};
use crate::i18n::AcceptLanguage;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

const FTL_EN: &str = include_str!("../../locales/en.ftl");
const FTL_CS: &str = include_str!("../../locales/cs.ftl");

/// Key-based message table, one Fluent bundle per language.
///
/// Lookup tries the requested languages in order, then the default language,
/// and finally returns the key itself so a missing translation never fails a
/// request.
pub struct Messages {
    default_language: String,
    bundles: HashMap<String, FluentBundle<FluentResource>>,
}

impl Messages {
    pub fn new(default_locale: &str) -> Result<Self> {
        let default_language = parse_locale(default_locale)?.language.as_str().to_string();
        Ok(Self {
            default_language,
            bundles: HashMap::new(),
        })
    }

    /// The catalogs shipped with the application.
    pub fn embedded(default_locale: &str) -> Result<Self> {
        let mut messages = Self::new(default_locale)?;
        messages.add_resource("en", FTL_EN)?;
        messages.add_resource("cs", FTL_CS)?;

        if !messages.supports(&messages.default_language) {
            return Err(LeagueError::Localization {
                message: format!("no messages for default locale '{default_locale}'"),
            });
        }
        Ok(messages)
    }

    pub fn add_resource(&mut self, locale: &str, source: &str) -> Result<()> {
        let langid = parse_locale(locale)?;
        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            LeagueError::Localization {
                message: format!("invalid messages for '{locale}': {errors:?}"),
            }
        })?;

        let language = langid.language.as_str().to_string();
        let bundle = self.bundles.entry(language).or_insert_with(|| {
            let mut bundle = FluentBundle::new_concurrent(vec![langid]);
            bundle.set_use_isolating(false);
            bundle
        });
        bundle
            .add_resource(resource)
            .map_err(|errors| LeagueError::Localization {
                message: format!("conflicting messages for '{locale}': {errors:?}"),
            })
    }

    pub fn supports(&self, language: &str) -> bool {
        self.bundles.contains_key(language)
    }

    pub fn get(&self, accept: &AcceptLanguage, key: &str) -> String {
        self.format(accept, key, None)
    }

    pub fn get_with(&self, accept: &AcceptLanguage, key: &str, args: &FluentArgs) -> String {
        self.format(accept, key, Some(args))
    }

    /// First requested language we have a bundle for, else the default.
    pub fn language_for(&self, accept: &AcceptLanguage) -> &str {
        accept
            .languages()
            .iter()
            .map(|l| l.language.as_str())
            .find_map(|language| self.bundles.get_key_value(language).map(|(k, _)| k.as_str()))
            .unwrap_or(self.default_language.as_str())
    }

    fn format(&self, accept: &AcceptLanguage, key: &str, args: Option<&FluentArgs>) -> String {
        let requested = accept.languages().iter().map(|l| l.language.as_str());
        let candidates = requested.chain(std::iter::once(self.default_language.as_str()));

        for language in candidates {
            let Some(bundle) = self.bundles.get(language) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(key).and_then(|m| m.value()) else {
                continue;
            };

            let mut errors = Vec::new();
            let text = bundle.format_pattern(pattern, args, &mut errors);
            if !errors.is_empty() {
                tracing::warn!(key, language, ?errors, "message formatted with errors");
            }
            return text.into_owned();
        }

        tracing::warn!(key, "no translation found");
        key.to_string()
    }
}

fn parse_locale(locale: &str) -> Result<LanguageIdentifier> {
    locale
        .parse::<LanguageIdentifier>()
        .map_err(|e| LeagueError::Localization {
            message: format!("invalid locale '{locale}': {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> Messages {
        Messages::embedded("en").unwrap()
    }

    #[test]
    fn test_default_language() {
        let text = messages().get(&AcceptLanguage::default(), "trainer-updated-successfully");
        assert_eq!(text, "Trainer was updated successfully.");
    }

    #[test]
    fn test_requested_language_wins() {
        let accept = AcceptLanguage::parse("cs-CZ,en;q=0.5");
        let text = messages().get(&accept, "trainer-updated-successfully");
        assert_eq!(text, "Trenér byl úspěšně upraven.");
        assert_eq!(messages().language_for(&accept), "cs");
    }

    #[test]
    fn test_arguments_are_interpolated() {
        let mut args = FluentArgs::new();
        args.set("id", 42);
        let text = messages().get_with(
            &AcceptLanguage::default(),
            "trainer-created-successfully",
            &args,
        );
        assert_eq!(text, "Trainer with id 42 was created successfully.");
    }

    #[test]
    fn test_unsupported_language_falls_back_to_default() {
        let accept = AcceptLanguage::parse("ja");
        let text = messages().get(&accept, "trainer-no-administrator");
        assert_eq!(text, "The league must always have at least one administrator.");
        assert_eq!(messages().language_for(&accept), "en");
    }

    #[test]
    fn test_key_missing_from_requested_language_falls_back() {
        let mut messages = Messages::new("en").unwrap();
        messages.add_resource("en", "only-english = Hello").unwrap();
        messages.add_resource("cs", "jen-cesky = Ahoj").unwrap();
        let accept = AcceptLanguage::parse("cs");
        assert_eq!(messages.get(&accept, "only-english"), "Hello");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(messages().get(&AcceptLanguage::default(), "nope"), "nope");
    }

    #[test]
    fn test_default_locale_must_be_shipped() {
        assert!(Messages::embedded("de").is_err());
    }

    #[test]
    fn test_invalid_resource_is_rejected() {
        let mut messages = Messages::new("en").unwrap();
        assert!(messages.add_resource("en", "= no id").is_err());
    }
}
