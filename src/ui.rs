// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Session state shared by the navigator and the TUI.
//!
//! `rev` increases on every observable change so the TUI can skip redundant redraw work.

use crate::model::{CategoryKind, PatternId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    rev: u64,
    active_category: CategoryKind,
    active_pattern_id: PatternId,
    dark_mode: bool,
    menu_open: bool,
}

impl SessionState {
    pub fn new(active_category: CategoryKind, active_pattern_id: PatternId) -> Self {
        Self {
            rev: 0,
            active_category,
            active_pattern_id,
            dark_mode: false,
            menu_open: false,
        }
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn active_category(&self) -> CategoryKind {
        self.active_category
    }

    pub fn active_pattern_id(&self) -> &PatternId {
        &self.active_pattern_id
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Records a new selection and closes the menu. Returns `true` if the pattern changed.
    pub fn set_selection(&mut self, category: CategoryKind, pattern_id: PatternId) -> bool {
        let pattern_changed = self.active_pattern_id != pattern_id;
        if !pattern_changed && self.active_category == category && !self.menu_open {
            return false;
        }

        self.active_category = category;
        self.active_pattern_id = pattern_id;
        self.menu_open = false;
        self.rev = self.rev.wrapping_add(1);
        pattern_changed
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        if self.dark_mode == dark_mode {
            return;
        }
        self.dark_mode = dark_mode;
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.set_dark_mode(!self.dark_mode);
    }

    pub fn set_menu_open(&mut self, menu_open: bool) {
        if self.menu_open == menu_open {
            return;
        }
        self.menu_open = menu_open;
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn toggle_menu(&mut self) {
        self.set_menu_open(!self.menu_open);
    }
}
