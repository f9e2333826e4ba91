//! One-shot messages carried across a redirect.
//!
//! Messages live server-side keyed by a random id; the id travels in the
//! `flash` cookie. Rendering the next page takes the messages and clears the
//! cookie, so each message is shown exactly once.

use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use serde::Serialize;
use strum_macros::{AsRefStr, Display};
use uuid::Uuid;

pub const FLASH_COOKIE: &str = "flash";

/// Messages nobody came back for are dropped after this long.
const DEFAULT_TTL_SECONDS: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn new(level: FlashLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(FlashLevel::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(FlashLevel::Warning, text)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(FlashLevel::Danger, text)
    }

    /// Model attribute the message is rendered from, e.g. `alert_success`.
    pub fn attribute_name(&self) -> String {
        format!("alert_{}", self.level)
    }
}

struct FlashEntry {
    stored_at: DateTime<Utc>,
    messages: Vec<FlashMessage>,
}

pub struct FlashStore {
    entries: DashMap<Uuid, FlashEntry>,
    ttl: TimeDelta,
}

impl Default for FlashStore {
    fn default() -> Self {
        Self::with_ttl(TimeDelta::seconds(DEFAULT_TTL_SECONDS))
    }
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: TimeDelta) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Redirect to `to`, showing `message` on the page the browser lands on.
    pub fn redirect(
        &self,
        jar: CookieJar,
        to: &str,
        message: FlashMessage,
    ) -> (CookieJar, Redirect) {
        tracing::debug!(to, level = %message.level, "redirecting with flash message");
        (self.push(jar, message), Redirect::to(to))
    }

    /// Queue a message for the next request made with this cookie jar.
    pub fn push(&self, jar: CookieJar, message: FlashMessage) -> CookieJar {
        self.purge_expired();

        if let Some(id) = flash_id(&jar) {
            if let Some(mut entry) = self.entries.get_mut(&id) {
                entry.messages.push(message);
                return jar;
            }
        }

        let id = Uuid::new_v4();
        self.entries.insert(
            id,
            FlashEntry {
                stored_at: Utc::now(),
                messages: vec![message],
            },
        );
        jar.add(
            Cookie::build((FLASH_COOKIE, id.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax),
        )
    }

    /// Take the messages queued for this cookie jar and clear the cookie.
    pub fn take(&self, jar: CookieJar) -> (CookieJar, Vec<FlashMessage>) {
        if jar.get(FLASH_COOKIE).is_none() {
            return (jar, Vec::new());
        }

        let messages = flash_id(&jar)
            .and_then(|id| self.entries.remove(&id))
            .filter(|(_, entry)| !self.is_expired(entry))
            .map(|(_, entry)| entry.messages)
            .unwrap_or_default();

        (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), messages)
    }

    /// Number of redirects whose messages have not been shown yet.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    fn is_expired(&self, entry: &FlashEntry) -> bool {
        Utc::now() - entry.stored_at >= self.ttl
    }

    fn purge_expired(&self) {
        let now = Utc::now();
        self.entries.retain(|_, entry| now - entry.stored_at < self.ttl);
    }
}

fn flash_id(jar: &CookieJar) -> Option<Uuid> {
    jar.get(FLASH_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}
