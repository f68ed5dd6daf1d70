// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::{architectural, behavioral, creational, structural};
use super::{Emphasis, Scene};

pub const PLACEHOLDER_TAG: &str = "placeholder";

/// Draws one visual type. `render` must be pure: the same position yields the same scene.
pub trait SceneRenderer: Send + Sync {
    fn tag(&self) -> &'static str;
    fn render(&self, position: usize) -> Scene;
}

/// Generic scene shown for visual types without a renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderScene;

impl SceneRenderer for PlaceholderScene {
    fn tag(&self) -> &'static str {
        PLACEHOLDER_TAG
    }

    fn render(&self, _position: usize) -> Scene {
        Scene::new("Diagram")
            .node("uml", "UML", (0, 0), Emphasis::Muted)
            .note(
                "hint",
                "No animated diagram for this pattern yet.",
                (10, 1),
                Emphasis::Muted,
            )
    }
}

/// Maps visual-type tags to renderers.
pub struct RendererRegistry {
    renderers: BTreeMap<&'static str, Box<dyn SceneRenderer>>,
    placeholder: PlaceholderScene,
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("tags", &self.renderers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

impl RendererRegistry {
    pub fn empty() -> Self {
        Self {
            renderers: BTreeMap::new(),
            placeholder: PlaceholderScene,
        }
    }

    /// All built-in pattern renderers.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for renderer in creational::renderers()
            .into_iter()
            .chain(structural::renderers())
            .chain(behavioral::renderers())
            .chain(architectural::renderers())
        {
            registry.register(renderer);
        }
        registry
    }

    /// Registers `renderer`, returning the one it replaced.
    pub fn register(
        &mut self,
        renderer: Box<dyn SceneRenderer>,
    ) -> Option<Box<dyn SceneRenderer>> {
        self.renderers.insert(renderer.tag(), renderer)
    }

    pub fn get(&self, tag: &str) -> Option<&dyn SceneRenderer> {
        self.renderers.get(tag).map(|renderer| renderer.as_ref())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.renderers.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.renderers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Scene for `tag` at `position`; unknown tags get the placeholder scene.
    pub fn render(&self, tag: &str, position: usize) -> Scene {
        match self.get(tag) {
            Some(renderer) => renderer.render(position),
            None => {
                tracing::debug!(tag, position, "no renderer for visual type; using placeholder");
                self.placeholder.render(position)
            }
        }
    }
}
