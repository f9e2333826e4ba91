use axum::extract::FromRequestParts;
use axum::http::{header::ACCEPT_LANGUAGE, request::Parts};
use std::convert::Infallible;
use unic_langid::LanguageIdentifier;

/// Languages the client asked for, most preferred first.
///
/// Ranges with `q=0`, the `*` wildcard and tags that do not parse are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptLanguage(pub Vec<LanguageIdentifier>);

impl AcceptLanguage {
    pub fn parse(header: &str) -> Self {
        let mut ranked: Vec<(f32, usize, LanguageIdentifier)> = header
            .split(',')
            .enumerate()
            .filter_map(|(position, range)| {
                let mut parts = range.split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() || tag == "*" {
                    return None;
                }
                let quality = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                if quality <= 0.0 {
                    return None;
                }
                let language = tag.parse::<LanguageIdentifier>().ok()?;
                Some((quality, position, language))
            })
            .collect();

        // Highest quality first, header order breaks ties.
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        Self(ranked.into_iter().map(|(_, _, language)| language).collect())
    }

    pub fn languages(&self) -> &[LanguageIdentifier] {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AcceptLanguage
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        Ok(Self::parse(header))
    }
}
