// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pattern::Pattern;

/// The four pattern families, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Creational,
    Structural,
    Behavioral,
    Architectural,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 4] = [
        Self::Creational,
        Self::Structural,
        Self::Behavioral,
        Self::Architectural,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Creational => "creational",
            Self::Structural => "structural",
            Self::Behavioral => "behavioral",
            Self::Architectural => "architectural",
        }
    }

    /// Human-facing label (`Creational`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Creational => "Creational",
            Self::Structural => "Structural",
            Self::Behavioral => "Behavioral",
            Self::Architectural => "Architectural",
        }
    }

    /// Color used when a catalog does not say otherwise.
    pub fn default_color(self) -> ColorToken {
        match self {
            Self::Creational => ColorToken::Blue,
            Self::Structural => ColorToken::Emerald,
            Self::Behavioral => ColorToken::Orange,
            Self::Architectural => ColorToken::Purple,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{value}` (expected creational, structural, behavioral or architectural)")]
pub struct ParseCategoryKindError {
    value: String,
}

impl FromStr for CategoryKind {
    type Err = ParseCategoryKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| ParseCategoryKindError {
                value: s.to_owned(),
            })
    }
}

/// Accent color token associated with a category. The presentation shell maps tokens to
/// concrete terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Emerald,
    Orange,
    Purple,
}

impl ColorToken {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Emerald => "emerald",
            Self::Orange => "orange",
            Self::Purple => "purple",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    kind: CategoryKind,
    color: ColorToken,
    description: String,
    patterns: Vec<Pattern>,
}

impl Category {
    pub fn new(
        kind: CategoryKind,
        color: ColorToken,
        description: impl Into<String>,
        patterns: Vec<Pattern>,
    ) -> Self {
        Self {
            kind,
            color,
            description: description.into(),
            patterns,
        }
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    pub fn color(&self) -> ColorToken {
        self.color
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::CategoryKind;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "Architectural".parse::<CategoryKind>(),
            Ok(CategoryKind::Architectural)
        );
        assert_eq!(" behavioral ".parse::<CategoryKind>(), Ok(CategoryKind::Behavioral));
        assert!("functional".parse::<CategoryKind>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&CategoryKind::Structural).expect("serialize");
        assert_eq!(json, "\"structural\"");
    }
}
