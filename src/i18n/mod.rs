//! Localized messages: a Fluent bundle per language, looked up by key and
//! the request's `Accept-Language` preferences.

mod locale;
mod messages;

pub use fluent_bundle::FluentArgs;
pub use locale::AcceptLanguage;
pub use messages::Messages;
