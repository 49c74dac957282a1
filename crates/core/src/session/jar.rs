//! Minimal cookie jar for one panel host
//!
//! Only what the panel session needs: `name=value` pairs replayed on every
//! request, updated from `Set-Cookie` headers. Domain, path and secure
//! attributes are ignored since a jar never leaves its host. Expiry is
//! honoured only for deletion (`Max-Age<=0` or an `Expires` in the past).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieJar {
    #[serde(default)]
    cookies: BTreeMap<String, String>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.insert(name.into(), value.into());
    }

    /// Value for the `Cookie` request header, `None` when the jar is empty.
    pub fn header_value(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Apply one `Set-Cookie` header. Returns whether the jar changed.
    pub fn apply_set_cookie(&mut self, header: &str) -> bool {
        self.apply_set_cookie_at(header, Utc::now())
    }

    /// Apply several `Set-Cookie` headers. Returns whether the jar changed.
    pub fn merge_set_cookies<'a, I>(&mut self, headers: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let now = Utc::now();
        headers.into_iter().fold(false, |changed, header| {
            self.apply_set_cookie_at(header, now) || changed
        })
    }

    fn apply_set_cookie_at(&mut self, header: &str, now: DateTime<Utc>) -> bool {
        let mut segments = header.split(';');
        let Some((name, value)) = segments.next().and_then(|pair| pair.split_once('=')) else {
            return false;
        };
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let value = value.trim().trim_matches('"');

        if value.is_empty() || segments.any(|attr| is_expired(attr, now)) {
            return self.cookies.remove(name).is_some();
        }

        match self.cookies.get(name) {
            Some(existing) if existing == value => false,
            _ => {
                self.cookies.insert(name.to_string(), value.to_string());
                true
            }
        }
    }
}

fn is_expired(attribute: &str, now: DateTime<Utc>) -> bool {
    let Some((key, value)) = attribute.split_once('=') else {
        return false;
    };
    let value = value.trim();
    match key.trim().to_ascii_lowercase().as_str() {
        "max-age" => value.parse::<i64>().is_ok_and(|secs| secs <= 0),
        "expires" => DateTime::parse_from_rfc2822(value).is_ok_and(|at| at < now),
        _ => false,
    }
}
