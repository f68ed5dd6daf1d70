// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::category::CategoryKind;
use super::ids::PatternId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealExample {
    title: String,
    explanation: String,
}

impl RealExample {
    pub fn new(title: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            explanation: explanation.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// One catalog entry.
///
/// `visual_type` selects the scene renderer and is not required to equal `id`. `visual_steps`
/// holds one caption per animation step; it may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    id: PatternId,
    name: String,
    category: CategoryKind,
    #[serde(default)]
    description: String,
    #[serde(default)]
    academic_context: String,
    #[serde(default)]
    real_world_examples: Vec<RealExample>,
    visual_type: String,
    #[serde(default)]
    visual_steps: Vec<String>,
    #[serde(default)]
    code_snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output_snippet: Option<String>,
}

impl Pattern {
    /// Minimal pattern whose visual type equals its id.
    pub fn new(id: PatternId, name: impl Into<String>, category: CategoryKind) -> Self {
        let visual_type = id.as_str().to_owned();
        Self {
            id,
            name: name.into(),
            category,
            description: String::new(),
            academic_context: String::new(),
            real_world_examples: Vec::new(),
            visual_type,
            visual_steps: Vec::new(),
            code_snippet: String::new(),
            output_snippet: None,
        }
    }

    pub fn with_visual_type(mut self, visual_type: impl Into<String>) -> Self {
        self.visual_type = visual_type.into();
        self
    }

    pub fn with_visual_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visual_steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>, output: Option<String>) -> Self {
        self.code_snippet = code.into();
        self.output_snippet = output;
        self
    }

    pub fn id(&self) -> &PatternId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> CategoryKind {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn academic_context(&self) -> &str {
        &self.academic_context
    }

    pub fn real_world_examples(&self) -> &[RealExample] {
        &self.real_world_examples
    }

    pub fn visual_type(&self) -> &str {
        &self.visual_type
    }

    pub fn visual_steps(&self) -> &[String] {
        &self.visual_steps
    }

    pub fn code_snippet(&self) -> &str {
        &self.code_snippet
    }

    pub fn output_snippet(&self) -> Option<&str> {
        self.output_snippet.as_deref()
    }

    /// Text used by catalog search: `"<id> <name> <category>"`.
    pub fn search_haystack(&self) -> String {
        format!("{} {} {}", self.id, self.name, self.category)
    }
}
