// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Catalog data model.
//!
//! Categories contain patterns; each pattern carries its captions, visual type and reference text.

pub mod catalog;
pub mod category;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod pattern;

pub use catalog::{Catalog, CatalogError};
pub use category::{Category, CategoryKind, ColorToken, ParseCategoryKindError};
pub use ids::{Id, IdError, PatternId};
pub use pattern::{Pattern, RealExample};
