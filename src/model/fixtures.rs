// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::catalog::Catalog;
use super::category::{Category, CategoryKind};
use super::ids::PatternId;
use super::pattern::Pattern;

fn pid(value: &str) -> PatternId {
    PatternId::new(value).expect("pattern id")
}

/// A pattern named after its id with `steps` numbered captions.
pub(crate) fn pattern(id: &str, kind: CategoryKind, steps: usize) -> Pattern {
    Pattern::new(pid(id), id.to_uppercase(), kind)
        .with_visual_steps((1..=steps).map(|n| format!("{id} step {n}")))
}

pub(crate) fn category(kind: CategoryKind, patterns: Vec<Pattern>) -> Category {
    Category::new(kind, kind.default_color(), format!("{kind} fixtures"), patterns)
}

/// Three patterns over two categories:
/// `alpha` (3 steps), `beta` (no steps, visual type `beta`) and `gamma` (2 steps, renders as
/// `observer`).
pub(crate) fn small_catalog() -> Catalog {
    let categories = vec![
        category(
            CategoryKind::Creational,
            vec![
                pattern("alpha", CategoryKind::Creational, 3),
                pattern("beta", CategoryKind::Creational, 0),
            ],
        ),
        category(
            CategoryKind::Behavioral,
            vec![pattern("gamma", CategoryKind::Behavioral, 2).with_visual_type("observer")],
        ),
    ];

    let mut tips = BTreeMap::new();
    tips.insert("alpha".to_owned(), vec!["Use alpha first.".to_owned()]);

    Catalog::new(categories, tips).expect("fixture catalog")
}
