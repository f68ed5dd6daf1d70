// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A stable, kebab-case identifier (`singleton`, `client-server`).
///
/// Ids double as lookup keys and as CLI arguments, so they are restricted to lowercase ASCII
/// alphanumerics separated by single dashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        validate_kebab_id(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("id must not be empty")]
    Empty,
    #[error("id `{value}` must be kebab-case (lowercase ascii, digits, single dashes)")]
    NotKebabCase { value: String },
}

fn kebab_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("static regex"))
}

fn validate_kebab_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if !kebab_id_regex().is_match(value) {
        return Err(IdError::NotKebabCase {
            value: value.to_owned(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatternIdTag {}
pub type PatternId = Id<PatternIdTag>;

#[cfg(test)]
mod tests {
    use super::{Id, IdError, PatternId};
    use rstest::rstest;

    #[test]
    fn id_rejects_empty() {
        let result: Result<Id<()>, _> = Id::new("");
        assert_eq!(result, Err(IdError::Empty));
    }

    #[rstest]
    #[case("Singleton")]
    #[case("client_server")]
    #[case("-leading")]
    #[case("trailing-")]
    #[case("double--dash")]
    #[case("a/b")]
    fn id_rejects_non_kebab(#[case] raw: &str) {
        let result: Result<PatternId, _> = raw.parse();
        assert_eq!(
            result,
            Err(IdError::NotKebabCase {
                value: raw.to_owned()
            })
        );
    }

    #[rstest]
    #[case("singleton")]
    #[case("client-server")]
    #[case("data-centric")]
    #[case("soa")]
    #[case("n-tier-2")]
    fn id_accepts_kebab(#[case] raw: &str) {
        let id: PatternId = raw.parse().expect("kebab id");
        assert_eq!(id.as_str(), raw);
    }

    #[test]
    fn id_deserializes_with_validation() {
        let ok: PatternId = serde_json::from_str("\"mvc\"").expect("valid");
        assert_eq!(ok.as_str(), "mvc");

        let err = serde_json::from_str::<PatternId>("\"MVC\"").unwrap_err();
        assert!(err.to_string().contains("kebab-case"));
    }
}
