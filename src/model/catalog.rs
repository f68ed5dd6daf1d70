// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The immutable pattern catalog.
//!
//! A catalog is loaded once (embedded JSON or a user file), validated, and then only read.
//! Validation failures surface as [`CatalogError`] at startup; nothing here fails afterwards.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::category::{Category, CategoryKind};
use super::ids::PatternId;
use super::pattern::Pattern;

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog contains no patterns")]
    Empty,
    #[error("duplicate pattern id `{id}`")]
    DuplicatePatternId { id: PatternId },
    #[error("duplicate category `{kind}`")]
    DuplicateCategory { kind: CategoryKind },
    #[error("pattern `{id}` declares category `{declared}` but is listed under `{container}`")]
    CategoryMismatch {
        id: PatternId,
        declared: CategoryKind,
        container: CategoryKind,
    },
    #[error("pattern `{id}` has an empty visual_type")]
    EmptyVisualType { id: PatternId },
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    categories: Vec<Category>,
    #[serde(default)]
    usage_tips: BTreeMap<String, Vec<String>>,
}

/// Position of a pattern: `(category_idx, pattern_idx)`.
type Slot = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    usage_tips: BTreeMap<String, Vec<String>>,
    index: HashMap<PatternId, Slot>,
    order: Vec<Slot>,
}

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.categories, doc.usage_tips)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn new(
        categories: Vec<Category>,
        usage_tips: BTreeMap<String, Vec<String>>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::<PatternId, Slot>::new();
        let mut order = Vec::<Slot>::new();
        let mut seen_kinds = Vec::<CategoryKind>::with_capacity(categories.len());

        for (cat_idx, category) in categories.iter().enumerate() {
            if seen_kinds.contains(&category.kind()) {
                return Err(CatalogError::DuplicateCategory {
                    kind: category.kind(),
                });
            }
            seen_kinds.push(category.kind());

            for (pat_idx, pattern) in category.patterns().iter().enumerate() {
                if pattern.category() != category.kind() {
                    return Err(CatalogError::CategoryMismatch {
                        id: pattern.id().clone(),
                        declared: pattern.category(),
                        container: category.kind(),
                    });
                }
                if pattern.visual_type().trim().is_empty() {
                    return Err(CatalogError::EmptyVisualType {
                        id: pattern.id().clone(),
                    });
                }
                if index.insert(pattern.id().clone(), (cat_idx, pat_idx)).is_some() {
                    return Err(CatalogError::DuplicatePatternId {
                        id: pattern.id().clone(),
                    });
                }
                order.push((cat_idx, pat_idx));
            }
        }

        if order.is_empty() {
            return Err(CatalogError::Empty);
        }

        for key in usage_tips.keys() {
            if !index.contains_key(key.as_str()) {
                tracing::warn!(pattern_id = %key, "usage tips reference an unknown pattern");
            }
        }

        Ok(Self {
            categories,
            usage_tips,
            index,
            order,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, kind: CategoryKind) -> Option<&Category> {
        self.categories.iter().find(|c| c.kind() == kind)
    }

    pub fn get_pattern(&self, id: &str) -> Option<&Pattern> {
        self.index.get(id).map(|slot| self.at(*slot))
    }

    /// First pattern of the first non-empty category. Always present.
    pub fn first_pattern(&self) -> &Pattern {
        self.at(self.order[0])
    }

    /// All patterns in catalog order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> + '_ {
        self.order.iter().map(|slot| self.at(*slot))
    }

    pub fn pattern_count(&self) -> usize {
        self.order.len()
    }

    /// Index of `id` in [`Catalog::patterns`] order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        let slot = self.index.get(id)?;
        self.order.iter().position(|s| s == slot)
    }

    pub fn pattern_at(&self, position: usize) -> Option<&Pattern> {
        self.order.get(position).map(|slot| self.at(*slot))
    }

    pub fn usage_tips(&self, id: &str) -> Option<&[String]> {
        self.usage_tips.get(id).map(Vec::as_slice)
    }

    fn at(&self, (cat_idx, pat_idx): Slot) -> &Pattern {
        &self.categories[cat_idx].patterns()[pat_idx]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{Catalog, CatalogError};
    use crate::model::fixtures::{category, pattern, small_catalog};
    use crate::model::{CategoryKind, ColorToken};

    #[test]
    fn builtin_catalog_loads_all_patterns() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        assert_eq!(catalog.categories().len(), 4);
        assert_eq!(catalog.pattern_count(), 18);
        assert_eq!(catalog.first_pattern().id().as_str(), "singleton");

        let kinds = catalog.categories().iter().map(|c| c.kind()).collect::<Vec<_>>();
        assert_eq!(kinds, CategoryKind::ALL.to_vec());
    }

    #[test]
    fn builtin_catalog_step_counts() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        for p in catalog.patterns() {
            let expected = match p.id().as_str() {
                "builder" | "facade" => 5,
                _ => 4,
            };
            assert_eq!(p.visual_steps().len(), expected, "{}", p.id());
        }
    }

    #[test]
    fn builtin_catalog_has_tips_for_every_pattern() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        for p in catalog.patterns() {
            let tips = catalog.usage_tips(p.id().as_str()).expect("tips");
            assert!(!tips.is_empty(), "{}", p.id());
        }
    }

    #[test]
    fn lookups_follow_catalog_order() {
        let catalog = small_catalog();
        assert_eq!(catalog.position_of("beta"), Some(1));
        assert_eq!(catalog.pattern_at(2).map(|p| p.id().as_str()), Some("gamma"));
        assert!(catalog.get_pattern("missing").is_none());
        assert_eq!(
            catalog.category(CategoryKind::Behavioral).map(|c| c.patterns().len()),
            Some(1)
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let categories = vec![
            category(CategoryKind::Creational, vec![pattern("dup", CategoryKind::Creational, 4)]),
            category(CategoryKind::Structural, vec![pattern("dup", CategoryKind::Structural, 4)]),
        ];
        let err = Catalog::new(categories, BTreeMap::new()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicatePatternId { id } if id.as_str() == "dup"));
    }

    #[test]
    fn rejects_mismatched_category() {
        let categories = vec![category(
            CategoryKind::Creational,
            vec![pattern("adapter", CategoryKind::Structural, 4)],
        )];
        let err = Catalog::new(categories, BTreeMap::new()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::CategoryMismatch {
                declared: CategoryKind::Structural,
                container: CategoryKind::Creational,
                ..
            }
        ));
    }

    #[test]
    fn rejects_duplicate_category_kinds() {
        let categories = vec![
            category(CategoryKind::Creational, vec![pattern("a", CategoryKind::Creational, 1)]),
            category(CategoryKind::Creational, vec![pattern("b", CategoryKind::Creational, 1)]),
        ];
        let err = Catalog::new(categories, BTreeMap::new()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory { kind: CategoryKind::Creational }));
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = Catalog::new(
            vec![category(CategoryKind::Creational, Vec::new())],
            BTreeMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn rejects_blank_visual_type() {
        let blank = pattern("blank", CategoryKind::Creational, 2).with_visual_type("  ");
        let err = Catalog::new(
            vec![category(CategoryKind::Creational, vec![blank])],
            BTreeMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyVisualType { .. }));
    }

    #[test]
    fn json_errors_surface_as_catalog_errors() {
        let err = Catalog::from_json_str("{ \"categories\": 3 }").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));

        let err = Catalog::from_json_str(
            r#"{ "categories": [ { "kind": "creational", "color": "blue", "description": "",
                 "patterns": [ { "id": "Bad Id", "name": "x", "category": "creational",
                                 "visual_type": "x" } ] } ] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("kebab-case"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        match err {
            CatalogError::Io { path, .. } => assert!(path.ends_with("here.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn color_tokens_round_trip_through_json() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let colors = catalog.categories().iter().map(|c| c.color()).collect::<Vec<_>>();
        assert_eq!(
            colors,
            vec![
                ColorToken::Blue,
                ColorToken::Emerald,
                ColorToken::Orange,
                ColorToken::Purple
            ]
        );
    }
}
