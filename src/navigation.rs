// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection shell: the active pattern, its category, and the sequencer bound to it.
//!
//! Every selection resolves to a real catalog entry. Unknown ids and empty categories fall back
//! to the first pattern, so there is always a pattern to show.

use std::sync::Arc;

use crate::model::{Catalog, Category, CategoryKind, ColorToken, Pattern};
use crate::scene::{RendererRegistry, Scene};
use crate::sequencer::{Binding, Clock, SequencerConfig, StepSequencer, SystemClock};
use crate::ui::SessionState;

pub const DEFAULT_USAGE_TIP: &str = "General application context.";

#[derive(Debug)]
pub struct Navigator<C: Clock + Clone = SystemClock> {
    catalog: Arc<Catalog>,
    registry: Arc<RendererRegistry>,
    config: SequencerConfig,
    clock: C,
    session: SessionState,
    sequencer: StepSequencer<C>,
}

impl<C: Clock + Clone> Navigator<C> {
    /// Starts on the first pattern of the first category.
    pub fn new(
        catalog: Arc<Catalog>,
        registry: Arc<RendererRegistry>,
        config: SequencerConfig,
        clock: C,
    ) -> Self {
        let first = catalog.first_pattern();
        let session = SessionState::new(first.category(), first.id().clone());
        let sequencer = StepSequencer::new(Binding::from_pattern(first), config, clock.clone());

        Self {
            catalog,
            registry,
            config,
            clock,
            session,
            sequencer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn sequencer(&self) -> &StepSequencer<C> {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut StepSequencer<C> {
        &mut self.sequencer
    }

    /// Activates `id`, or the first pattern when `id` is unknown. Returns `true` if the
    /// sequencer was rebound.
    pub fn select_pattern(&mut self, id: &str) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let pattern = match catalog.get_pattern(id) {
            Some(pattern) => pattern,
            None => {
                let fallback = catalog.first_pattern();
                tracing::warn!(
                    requested = id,
                    fallback = %fallback.id(),
                    "unknown pattern id; showing the first pattern"
                );
                fallback
            }
        };
        self.activate(pattern)
    }

    /// Activates the first pattern of `kind`, or the first pattern overall when the category is
    /// missing or empty.
    pub fn select_category(&mut self, kind: CategoryKind) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let pattern = match catalog.category(kind).and_then(|c| c.patterns().first()) {
            Some(pattern) => pattern,
            None => {
                tracing::warn!(
                    category = %kind,
                    "category has no patterns; showing the first pattern"
                );
                catalog.first_pattern()
            }
        };
        self.activate(pattern)
    }

    pub fn next_pattern(&mut self) -> bool {
        self.step_pattern(1)
    }

    pub fn prev_pattern(&mut self) -> bool {
        self.step_pattern(-1)
    }

    pub fn next_category(&mut self) -> bool {
        self.step_category(1)
    }

    pub fn prev_category(&mut self) -> bool {
        self.step_category(-1)
    }

    pub fn active_pattern(&self) -> &Pattern {
        self.catalog
            .get_pattern(self.session.active_pattern_id().as_str())
            .unwrap_or_else(|| self.catalog.first_pattern())
    }

    pub fn active_category(&self) -> CategoryKind {
        self.session.active_category()
    }

    pub fn category(&self) -> Option<&Category> {
        self.catalog.category(self.active_category())
    }

    pub fn category_color(&self) -> ColorToken {
        self.category()
            .map(Category::color)
            .unwrap_or_else(|| self.active_category().default_color())
    }

    /// Usage tips for the active pattern, or a single generic tip.
    pub fn usage_tips(&self) -> Vec<&str> {
        match self.catalog.usage_tips(self.session.active_pattern_id().as_str()) {
            Some(tips) if !tips.is_empty() => tips.iter().map(String::as_str).collect(),
            _ => vec![DEFAULT_USAGE_TIP],
        }
    }

    /// Scene for the active visual type at the current position.
    pub fn scene(&self) -> Scene {
        self.registry.render(
            self.sequencer.binding().visual_type(),
            self.sequencer.current_position(),
        )
    }

    pub fn toggle_dark_mode(&mut self) {
        self.session.toggle_dark_mode();
    }

    pub fn toggle_menu(&mut self) {
        self.session.toggle_menu();
    }

    /// Forwards to the sequencer; `true` when a tick advanced the state.
    pub fn poll(&mut self) -> bool {
        self.sequencer.poll()
    }

    fn activate(&mut self, pattern: &Pattern) -> bool {
        self.session.set_selection(pattern.category(), pattern.id().clone());
        if self.sequencer.binding().pattern_id() == pattern.id() {
            return false;
        }

        // Speed survives pattern changes; position and playback do not.
        let config = self.config.with_speed(self.sequencer.speed());
        self.sequencer =
            StepSequencer::new(Binding::from_pattern(pattern), config, self.clock.clone());
        tracing::debug!(pattern_id = %pattern.id(), "sequencer rebound");
        true
    }

    fn step_pattern(&mut self, delta: isize) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let count = catalog.pattern_count();
        let current = catalog
            .position_of(self.session.active_pattern_id().as_str())
            .unwrap_or(0);
        match catalog.pattern_at(wrap(current, delta, count)) {
            Some(pattern) => self.activate(pattern),
            None => false,
        }
    }

    fn step_category(&mut self, delta: isize) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let categories = catalog.categories();
        let count = categories.len();
        let mut index = categories
            .iter()
            .position(|c| c.kind() == self.active_category())
            .unwrap_or(0);

        for _ in 0..count {
            index = wrap(index, delta, count);
            if let Some(pattern) = categories[index].patterns().first() {
                return self.activate(pattern);
            }
        }
        false
    }
}

fn wrap(index: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let count = count as isize;
    (index as isize + delta).rem_euclid(count) as usize
}
